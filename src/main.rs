//! CarPanel — demo entry point.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │  Adapters:  ConsoleSink / LogSignalSink  SettingsFile │
//! │  ─────────────── Port Trait Boundary ──────────────── │
//! │  Drivers:   Engine   Radio   AirConditioner           │
//! │  Core:      CarControlPanel                           │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Starts the car, prints a separator, stops the car, exits.

use anyhow::{Context, Result};
use log::info;

use carpanel::adapters::settings_file::SettingsFile;
use carpanel::app::demo;

fn main() -> Result<()> {
    // ── 1. Logging (stderr, RUST_LOG overrides) ───────────────
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(demo::DEFAULT_LOG_FILTER),
    )
    .init();
    info!("CarPanel v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Settings ───────────────────────────────────────────
    let file = SettingsFile::from_env();
    let config = demo::load_config(file.as_ref()).with_context(|| match &file {
        Some(f) => format!("loading {}", f.path().display()),
        None => "loading settings".to_owned(),
    })?;

    // ── 3. Wire components and run ────────────────────────────
    demo::run_configured(&config, std::io::stdout()).context("demo sequence")?;
    Ok(())
}
