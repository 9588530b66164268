//! PlayStation 2 controller monitor for RP2040.
//!
//! Polls a controller over four bit-banged GPIO lines and prints every change
//! to a serial console.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Initializes the controller and switches it to locked analog mode
//! 2. Polls it every [`POLL_INTERVAL_MS`] milliseconds
//! 3. Writes a text report of each changed state to UART0 (115200 baud, 8N1)
//!
//! # Hardware Configuration
//!
//! | Function  | GPIO | Description |
//! |-----------|------|-------------|
//! | DATA      | 16   | Controller to host, input with pull-up |
//! | ATTENTION | 17   | Transaction select, idle high |
//! | CLOCK     | 18   | Bus clock, idle high |
//! | COMMAND   | 19   | Host to controller, idle high |
//! | UART0 TX  | 0    | Diagnostic console |
//! | LED       | 25   | On-board LED (error indicator) |
//!
//! The controller runs from 3.3 V. Fit an external 1K-10K pull-up on DATA if
//! the internal one is too weak for the cable.
//!
//! # Architecture
//!
//! Two Embassy tasks:
//!
//! - **Pad Task**: owns the driver, negotiates the mode and polls it. The
//!   driver busy-waits through every transaction so bit timing is exact.
//! - **Console Task**: waits for changed states and writes the report.
//!
//! The tasks share a [`StateSignal`] with "latest value wins" semantics.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

use embassy_rp::gpio::{Input, Output};
use embassy_time::Delay;
use psx_core::{Config, Driven, Psx, RetryLimit, Sensed, TargetMode};

// Re-export core types for convenience
pub use psx_core::{
    Button, Buttons, Error, IoSink, Mode, Monitor, MonitorError, PadState, ReportError,
    ReportSink,
};

pub mod console;
pub mod signal_sink;

pub use console::Console;
pub use signal_sink::{SignalSink, StateSignal};

/// Console baud rate.
pub const CONSOLE_BAUD: u32 = 115_200;

/// Delay between polls.
pub const POLL_INTERVAL_MS: u64 = 850;

/// Mode the controller is switched to at startup.
pub const TARGET_MODE: TargetMode = TargetMode::Analog;

/// Keep the controller's own analog button from changing the mode.
pub const LOCK_MODE: bool = true;

/// Negotiation attempts per `set_mode` call before the pad task backs off.
pub const NEGOTIATION_ATTEMPTS: u16 = 10;

/// The driver as wired on this board.
pub type Pad = Psx<
    Driven<Output<'static>>,
    Driven<Output<'static>>,
    Sensed<Input<'static>>,
    Driven<Output<'static>>,
    Delay,
>;

/// Driver configuration: default bus timing with a bounded negotiation.
#[must_use]
pub const fn driver_config() -> Config {
    Config::new().with_retry(RetryLimit::Attempts(NEGOTIATION_ATTEMPTS))
}
