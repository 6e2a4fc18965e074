//! Car control panel — the orchestrating core.
//!
//! [`CarControlPanel`] owns one component per capability and drives them
//! in a fixed order.  Components are injected at construction through the
//! capability ports, making the panel testable with recording doubles.
//!
//! ```text
//!     EnginePort ──▶ ┌──────────────────┐
//!      RadioPort ──▶ │ CarControlPanel  │
//! AirConditioner ──▶ └──────────────────┘
//! ```

use log::info;

use crate::error::Result;

use super::ports::{AirConditionerPort, EnginePort, RadioPort};

/// Drives the engine, radio and air conditioner as one unit.
pub struct CarControlPanel<E, R, A> {
    engine: E,
    radio: R,
    air_conditioner: A,
}

impl<E, R, A> CarControlPanel<E, R, A>
where
    E: EnginePort,
    R: RadioPort,
    A: AirConditionerPort,
{
    /// Wire already-built components into a panel.
    pub fn new(engine: E, radio: R, air_conditioner: A) -> Self {
        Self {
            engine,
            radio,
            air_conditioner,
        }
    }

    // ── Sequences ─────────────────────────────────────────────

    /// Engine start, radio on, AC on.
    ///
    /// Stops at the first failing component and returns its error; the
    /// components already switched on stay on.
    pub fn start_car(&mut self) -> Result<()> {
        info!("Starting car");
        self.engine.start()?;
        self.radio.turn_on()?;
        self.air_conditioner.activate()?;
        Ok(())
    }

    /// Engine stop, radio off, AC off.  Same failure policy as
    /// [`start_car`](Self::start_car).
    pub fn stop_car(&mut self) -> Result<()> {
        info!("Stopping car");
        self.engine.stop()?;
        self.radio.turn_off()?;
        self.air_conditioner.deactivate()?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn air_conditioner(&self) -> &A {
        &self.air_conditioner
    }

    /// Hand the components back, consuming the panel.
    pub fn into_parts(self) -> (E, R, A) {
        (self.engine, self.radio, self.air_conditioner)
    }
}
