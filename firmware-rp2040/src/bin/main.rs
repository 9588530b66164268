#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Timer};
use psx_console_rp2040::{
    driver_config, Console, IoSink, Monitor, Pad, ReportSink, SignalSink, StateSignal,
    CONSOLE_BAUD, LOCK_MODE, POLL_INTERVAL_MS, TARGET_MODE,
};
use psx_core::{Lines, Psx};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Signal for passing changed states from the pad task to the console task.
static STATE_SIGNAL: StaticCell<StateSignal> = StaticCell::new();

const POLL_INTERVAL: Duration = Duration::from_millis(POLL_INTERVAL_MS);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("PSX console starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let signal = STATE_SIGNAL.init(Signal::new());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = CONSOLE_BAUD;
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let console = IoSink::new(Console::new(tx));

    // --- Controller Setup ---
    let lines = Lines::from_pins(
        Output::new(p.PIN_17, Level::High), // ATTENTION
        Output::new(p.PIN_19, Level::High), // COMMAND
        Input::new(p.PIN_16, Pull::Up),     // DATA
        Output::new(p.PIN_18, Level::High), // CLOCK
    );
    let pad = Psx::new(lines, Delay, driver_config());

    // Optional: LED for error indication (on-board LED on Pico)
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(pad_task(pad, signal, led).unwrap());
    spawner.spawn(console_task(console, signal).unwrap());

    info!("PSX console initialized");
}

/// Pad task - negotiates the mode, then polls and signals changed states.
#[embassy_executor::task]
async fn pad_task(mut pad: Pad, signal: &'static StateSignal, mut led: Output<'static>) {
    if let Err(e) = pad.init() {
        error!("Controller init failed: {:?}", e);
    }

    loop {
        match pad.set_mode(TARGET_MODE, LOCK_MODE) {
            Ok(attempts) => {
                info!("Controller in mode {:?} after {} attempts", TARGET_MODE, attempts);
                break;
            }
            Err(e) => {
                warn!("Mode negotiation failed: {:?}, retrying", e);
                led.toggle();
                Timer::after(POLL_INTERVAL).await;
            }
        }
    }

    let mut monitor = Monitor::new(pad, SignalSink::new(signal));
    loop {
        if let Err(e) = monitor.process_one() {
            error!("Poll error: {:?}", e);
            // Toggle LED to indicate error
            led.toggle();
        }
        Timer::after(POLL_INTERVAL).await;
    }
}

/// Console task - waits for changed states and prints the report.
#[embassy_executor::task]
async fn console_task(
    mut console: IoSink<Console<'static>>,
    signal: &'static StateSignal,
) {
    loop {
        let state = signal.wait().await;
        if let Err(e) = console.send(&state) {
            error!("Console error: {:?}", e);
        }
    }
}
