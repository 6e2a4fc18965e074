//! Engine driver.
//!
//! Simulated: tracks running/stopped in memory and raises one signal per
//! call.  A repeated start or stop is not rejected; the signal is raised
//! again.  The state only changes once the signal went out.

use log::debug;

use crate::adapters::console::ConsoleSink;
use crate::app::ports::{EnginePort, SignalSink};
use crate::app::signals::Signal;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Running,
}

pub struct Engine<S = ConsoleSink> {
    state: EngineState,
    sink: S,
}

impl Engine {
    /// Engine that reports to stdout.
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::stdout())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SignalSink> Engine<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: EngineState::Stopped,
            sink,
        }
    }

    fn transition(&mut self, to: EngineState, signal: Signal) -> Result<()> {
        self.sink.emit(signal)?;
        if self.state == to {
            debug!("Engine already {:?}", to);
        } else {
            debug!("Engine {:?} -> {:?}", self.state, to);
        }
        self.state = to;
        Ok(())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: SignalSink> EnginePort for Engine<S> {
    fn start(&mut self) -> Result<()> {
        self.transition(EngineState::Running, Signal::EngineStarted)
    }

    fn stop(&mut self) -> Result<()> {
        self.transition(EngineState::Stopped, Signal::EngineStopped)
    }
}
