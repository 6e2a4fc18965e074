//! Unified error types for the car control panel.
//!
//! A single `Error` enum that every component can convert into, so the
//! panel propagates failures with `?` and never handles them locally.
//! All variants are `Copy`; nothing here allocates.

use core::fmt;

use crate::app::ports::ConfigError;
use crate::app::signals::Component;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A (simulated) component could not carry out its action.
    Hardware(HardwareFault),
    /// The signal channel rejected a write.
    Signal(std::io::ErrorKind),
    /// Panel settings could not be loaded or are invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hardware(e) => write!(f, "hardware: {e}"),
            Self::Signal(kind) => write!(f, "signal: {kind}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Hardware faults
// ---------------------------------------------------------------------------

/// A component refused or failed an operation.
///
/// The stock components never raise this; it exists for simulated hardware
/// and test doubles, and the panel surfaces it to its caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareFault {
    pub component: Component,
    pub reason: &'static str,
}

impl HardwareFault {
    pub const fn new(component: Component, reason: &'static str) -> Self {
        Self { component, reason }
    }
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fault: {}", self.component, self.reason)
    }
}

impl From<HardwareFault> for Error {
    fn from(e: HardwareFault) -> Self {
        Self::Hardware(e)
    }
}

// ---------------------------------------------------------------------------
// Conversions from outer layers
// ---------------------------------------------------------------------------

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Signal(e.kind())
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
