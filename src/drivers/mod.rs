//! Simulated component drivers.
//!
//! All three share one shape: emit the signal first, then commit the new
//! state, so a failed emit leaves the component where it was.

pub mod air_conditioner;
pub mod engine;
pub mod radio;

pub use air_conditioner::AirConditioner;
pub use engine::Engine;
pub use radio::Radio;
