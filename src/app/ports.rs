//! Port traits — the boundary between the panel and its components.
//!
//! ```text
//!   Engine / Radio / AirConditioner ──▶ capability port ──▶ CarControlPanel
//! ```
//!
//! Each capability is its own trait with its own method names, so a
//! component only implements what its role needs.  The
//! [`CarControlPanel`](super::panel::CarControlPanel) consumes them via
//! generics and never names a concrete component.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PanelConfig;
use crate::error::Result;

use super::signals::Signal;

// ───────────────────────────────────────────────────────────────
// Capability ports (panel → component)
// ───────────────────────────────────────────────────────────────

/// Engine capability.
pub trait EnginePort {
    /// Start the engine.  Raises [`Signal::EngineStarted`].
    fn start(&mut self) -> Result<()>;

    /// Stop the engine.  Raises [`Signal::EngineStopped`].
    fn stop(&mut self) -> Result<()>;
}

/// Radio capability.
pub trait RadioPort {
    /// Raises [`Signal::RadioOn`].
    fn turn_on(&mut self) -> Result<()>;

    /// Raises [`Signal::RadioOff`].
    fn turn_off(&mut self) -> Result<()>;
}

/// Air conditioner capability.
pub trait AirConditionerPort {
    /// Raises [`Signal::AcActivated`].
    fn activate(&mut self) -> Result<()>;

    /// Raises [`Signal::AcDeactivated`].
    fn deactivate(&mut self) -> Result<()>;
}

impl<T: EnginePort + ?Sized> EnginePort for Box<T> {
    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<()> {
        (**self).stop()
    }
}

impl<T: EnginePort + ?Sized> EnginePort for &mut T {
    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<()> {
        (**self).stop()
    }
}

impl<T: RadioPort + ?Sized> RadioPort for Box<T> {
    fn turn_on(&mut self) -> Result<()> {
        (**self).turn_on()
    }

    fn turn_off(&mut self) -> Result<()> {
        (**self).turn_off()
    }
}

impl<T: RadioPort + ?Sized> RadioPort for &mut T {
    fn turn_on(&mut self) -> Result<()> {
        (**self).turn_on()
    }

    fn turn_off(&mut self) -> Result<()> {
        (**self).turn_off()
    }
}

impl<T: AirConditionerPort + ?Sized> AirConditionerPort for Box<T> {
    fn activate(&mut self) -> Result<()> {
        (**self).activate()
    }

    fn deactivate(&mut self) -> Result<()> {
        (**self).deactivate()
    }
}

impl<T: AirConditionerPort + ?Sized> AirConditionerPort for &mut T {
    fn activate(&mut self) -> Result<()> {
        (**self).activate()
    }

    fn deactivate(&mut self) -> Result<()> {
        (**self).deactivate()
    }
}

// ───────────────────────────────────────────────────────────────
// Signal sink port (component → console / log / recorder)
// ───────────────────────────────────────────────────────────────

/// Destination for component signals.
pub trait SignalSink {
    fn emit(&mut self, signal: Signal) -> Result<()>;

    /// Mark a break between two sequences.  Sinks without a textual
    /// rendering ignore it.
    fn separator(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// In-memory recorder.
impl SignalSink for Vec<Signal> {
    fn emit(&mut self, signal: Signal) -> Result<()> {
        self.push(signal);
        Ok(())
    }
}

/// Borrowed sink; the caller keeps ownership.
impl<S: SignalSink + ?Sized> SignalSink for &mut S {
    fn emit(&mut self, signal: Signal) -> Result<()> {
        (**self).emit(signal)
    }

    fn separator(&mut self, text: &str) -> Result<()> {
        (**self).separator(text)
    }
}

/// One sink shared by several components on the same thread.
impl<S: SignalSink + ?Sized> SignalSink for Rc<RefCell<S>> {
    fn emit(&mut self, signal: Signal) -> Result<()> {
        self.borrow_mut().emit(signal)
    }

    fn separator(&mut self, text: &str) -> Result<()> {
        self.borrow_mut().separator(text)
    }
}

// ───────────────────────────────────────────────────────────────
// Configuration port (settings file → demo binary)
// ───────────────────────────────────────────────────────────────

/// Loads panel settings.
///
/// Implementations MUST run [`PanelConfig::validate`] before returning.
pub trait ConfigPort {
    /// Returns [`ConfigError::NotFound`] when no settings exist; the caller
    /// decides whether to fall back to [`PanelConfig::default()`].
    fn load(&self) -> core::result::Result<PanelConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No settings file present.
    NotFound,
    /// Settings could not be deserialized.
    Corrupted,
    /// A field failed validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error while reading.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
