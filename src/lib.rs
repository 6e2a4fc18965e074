//! CarPanel library.
//!
//! A car control panel that drives an engine, a radio and an air
//! conditioner purely through capability ports.  Concrete components live
//! in [`drivers`]; signal and settings back-ends live in [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
