//! Radio driver (simulated, in-memory on/off).
//!
//! Same contract as the engine: one signal per call, state committed only
//! after the signal went out.

use log::debug;

use crate::adapters::console::ConsoleSink;
use crate::app::ports::{RadioPort, SignalSink};
use crate::app::signals::Signal;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioState {
    Off,
    On,
}

pub struct Radio<S = ConsoleSink> {
    state: RadioState,
    sink: S,
}

impl Radio {
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::stdout())
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SignalSink> Radio<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: RadioState::Off,
            sink,
        }
    }

    fn transition(&mut self, to: RadioState, signal: Signal) -> Result<()> {
        self.sink.emit(signal)?;
        if self.state == to {
            debug!("Radio already {:?}", to);
        } else {
            debug!("Radio {:?} -> {:?}", self.state, to);
        }
        self.state = to;
        Ok(())
    }

    pub fn state(&self) -> RadioState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, RadioState::On)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: SignalSink> RadioPort for Radio<S> {
    fn turn_on(&mut self) -> Result<()> {
        self.transition(RadioState::On, Signal::RadioOn)
    }

    fn turn_off(&mut self) -> Result<()> {
        self.transition(RadioState::Off, Signal::RadioOff)
    }
}
