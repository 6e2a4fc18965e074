//! Air conditioner driver.
//!
//! ## Dual-use design
//!
//! Generic over its [`SignalSink`]: the binary wires it to stdout, tests
//! hand it a recorder.  No compressor or fan is modelled; only the
//! active/inactive flag, committed after the signal went out.

use log::debug;

use crate::adapters::console::ConsoleSink;
use crate::app::ports::{AirConditionerPort, SignalSink};
use crate::app::signals::Signal;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirConditionerState {
    Inactive,
    Active,
}

pub struct AirConditioner<S = ConsoleSink> {
    state: AirConditionerState,
    sink: S,
}

impl AirConditioner {
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::stdout())
    }
}

impl Default for AirConditioner {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SignalSink> AirConditioner<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: AirConditionerState::Inactive,
            sink,
        }
    }

    fn transition(&mut self, to: AirConditionerState, signal: Signal) -> Result<()> {
        self.sink.emit(signal)?;
        if self.state == to {
            debug!("AC already {:?}", to);
        } else {
            debug!("AC {:?} -> {:?}", self.state, to);
        }
        self.state = to;
        Ok(())
    }

    pub fn state(&self) -> AirConditionerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == AirConditionerState::Active
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: SignalSink> AirConditionerPort for AirConditioner<S> {
    fn activate(&mut self) -> Result<()> {
        self.transition(AirConditionerState::Active, Signal::AcActivated)
    }

    fn deactivate(&mut self) -> Result<()> {
        self.transition(AirConditionerState::Inactive, Signal::AcDeactivated)
    }
}
