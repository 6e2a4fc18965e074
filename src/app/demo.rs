//! Demo sequence run by the `carpanel` binary.
//!
//! Settings resolution and component wiring live here rather than in
//! `main.rs` so they can be driven against an in-memory writer.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use log::warn;

use crate::adapters::console::ConsoleSink;
use crate::adapters::log_sink::LogSignalSink;
use crate::config::{Output, PanelConfig};
use crate::drivers::{AirConditioner, Engine, Radio};
use crate::error::Result;

use super::panel::CarControlPanel;
use super::ports::{ConfigError, ConfigPort, SignalSink};

/// `env_logger` filter used when `RUST_LOG` is unset.
///
/// Diagnostics stay at `warn`; the signal target is always let through at
/// `info` so `"output": "log"` is visible without extra setup.
pub const DEFAULT_LOG_FILTER: &str = "warn,carpanel::signal=info";

/// Resolve settings: no port means defaults, and so does a port whose
/// file is missing.  Any other failure is returned.
pub fn load_config<P: ConfigPort>(
    port: Option<&P>,
) -> core::result::Result<PanelConfig, ConfigError> {
    let Some(port) = port else {
        return Ok(PanelConfig::default());
    };
    match port.load() {
        Err(ConfigError::NotFound) => {
            warn!("Settings file not found, using defaults");
            Ok(PanelConfig::default())
        }
        other => other,
    }
}

/// Start, separator, stop, with every component reporting into `sink`.
pub fn run<S: SignalSink>(sink: &mut S, separator: &str) -> Result<()> {
    let shared = Rc::new(RefCell::new(sink));

    let mut panel = CarControlPanel::new(
        Engine::with_sink(Rc::clone(&shared)),
        Radio::with_sink(Rc::clone(&shared)),
        AirConditioner::with_sink(Rc::clone(&shared)),
    );

    panel.start_car()?;
    shared.borrow_mut().separator(separator)?;
    panel.stop_car()?;
    Ok(())
}

/// Run the demo to the destination named by `config.output`.
///
/// Console output goes to `out`, which is handed back; log output leaves
/// `out` untouched.
pub fn run_configured<W: Write>(config: &PanelConfig, out: W) -> Result<W> {
    match config.output {
        Output::Console => {
            let mut sink = ConsoleSink::new(out);
            run(&mut sink, &config.separator)?;
            Ok(sink.into_inner())
        }
        Output::Log => {
            run(&mut LogSignalSink::new(), &config.separator)?;
            Ok(out)
        }
    }
}
