//! Application core — the panel and its ports.
//!
//! The [`panel`] drives components only through the capability traits
//! defined in [`ports`], so it never depends on a concrete engine, radio
//! or air conditioner.  [`demo`] wires the stock drivers for the binary.

pub mod demo;
pub mod panel;
pub mod ports;
pub mod signals;
