//! Blocking UART console for the diagnostic report.
//!
//! Serial terminals expect `\r\n` line endings; the report uses `\n`, so
//! every newline is expanded on the way out.
//!
//! # Pins
//!
//! Uses UART0 TX only:
//! - GPIO 0: TX

use embassy_rp::uart::{Blocking, Error as UartError, UartTx};
use embedded_io::{ErrorKind, ErrorType, Write};

/// Convert UART errors to an `embedded_io` error kind.
///
/// Only receive errors carry detail; a transmit failure is always `Other`.
#[inline]
fn uart_error_kind(_e: UartError) -> ErrorKind {
    ErrorKind::Other
}

/// Write-only console on a blocking UART transmitter.
pub struct Console<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> Console<'d> {
    #[must_use]
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), ErrorKind> {
        self.tx.blocking_write(bytes).map_err(uart_error_kind)
    }
}

impl ErrorType for Console<'_> {
    type Error = ErrorKind;
}

impl Write for Console<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut rest = buf;
        while let Some(newline) = rest.iter().position(|&b| b == b'\n') {
            self.write_raw(&rest[..newline])?;
            self.write_raw(b"\r\n")?;
            rest = &rest[newline + 1..];
        }
        if !rest.is_empty() {
            self.write_raw(rest)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush().map_err(uart_error_kind)
    }
}
