//! Log-based signal sink adapter.
//!
//! Implements [`SignalSink`] by writing every signal through the `log`
//! facade instead of stdout.  Selected with `"output": "log"` in the
//! settings file.  Records go to [`SIGNAL_TARGET`] so a filter can let
//! them through while keeping other `info` diagnostics quiet.

use log::info;

use crate::app::ports::SignalSink;
use crate::app::signals::Signal;
use crate::error::Result;

/// Log target for every signal record.
pub const SIGNAL_TARGET: &str = "carpanel::signal";

/// Adapter that logs every [`Signal`] at `info`.
pub struct LogSignalSink;

impl LogSignalSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSignalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSink for LogSignalSink {
    fn emit(&mut self, signal: Signal) -> Result<()> {
        info!(target: SIGNAL_TARGET, "SIGNAL | {} | {}", signal.call_name(), signal);
        Ok(())
    }

    fn separator(&mut self, text: &str) -> Result<()> {
        info!(target: SIGNAL_TARGET, "SIGNAL | {}", text);
        Ok(())
    }
}
