//! Outbound signals.
//!
//! Every capability operation raises exactly one [`Signal`] through a
//! [`SignalSink`](super::ports::SignalSink).  Adapters on the other side
//! decide where it ends up: stdout, the log, or a test recorder.

use core::fmt;

/// The three panel components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Engine,
    Radio,
    AirConditioner,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine => write!(f, "Engine"),
            Self::Radio => write!(f, "Radio"),
            Self::AirConditioner => write!(f, "AirConditioner"),
        }
    }
}

/// Observable effect of a single capability operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    EngineStarted,
    EngineStopped,
    RadioOn,
    RadioOff,
    AcActivated,
    AcDeactivated,
}

impl Signal {
    /// Signals raised by `start_car`, in order.
    pub const START_SEQUENCE: [Signal; 3] = [Self::EngineStarted, Self::RadioOn, Self::AcActivated];

    /// Signals raised by `stop_car`, in order.
    pub const STOP_SEQUENCE: [Signal; 3] = [Self::EngineStopped, Self::RadioOff, Self::AcDeactivated];

    /// Component that raises this signal.
    pub const fn component(self) -> Component {
        match self {
            Self::EngineStarted | Self::EngineStopped => Component::Engine,
            Self::RadioOn | Self::RadioOff => Component::Radio,
            Self::AcActivated | Self::AcDeactivated => Component::AirConditioner,
        }
    }

    /// Dotted `component.operation` name, as used in call logs.
    pub const fn call_name(self) -> &'static str {
        match self {
            Self::EngineStarted => "engine.start",
            Self::EngineStopped => "engine.stop",
            Self::RadioOn => "radio.turnOn",
            Self::RadioOff => "radio.turnOff",
            Self::AcActivated => "ac.activate",
            Self::AcDeactivated => "ac.deactivate",
        }
    }

    /// `true` for the enabling half of each capability pair.
    pub const fn is_enable(self) -> bool {
        matches!(self, Self::EngineStarted | Self::RadioOn | Self::AcActivated)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            Self::EngineStarted => "Engine started",
            Self::EngineStopped => "Engine stopped",
            Self::RadioOn => "Radio turned on",
            Self::RadioOff => "Radio turned off",
            Self::AcActivated => "Air conditioner activated",
            Self::AcDeactivated => "Air conditioner deactivated",
        };
        f.write_str(line)
    }
}
