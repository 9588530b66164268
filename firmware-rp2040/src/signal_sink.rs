//! Report sink that hands states to another task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use psx_core::{PadState, ReportError, ReportSink};

/// Latest-value-wins handoff from the pad task to the console task.
pub type StateSignal = Signal<CriticalSectionRawMutex, PadState>;

/// [`ReportSink`] that signals every state to a waiting task.
///
/// A slow console never blocks polling: an unread state is overwritten by
/// the next one.
pub struct SignalSink {
    signal: &'static StateSignal,
}

impl SignalSink {
    #[must_use]
    pub fn new(signal: &'static StateSignal) -> Self {
        Self { signal }
    }
}

impl ReportSink for SignalSink {
    fn send(&mut self, state: &PadState) -> Result<(), ReportError> {
        self.signal.signal(*state);
        Ok(())
    }
}
