//! Panel settings
//!
//! Presentation options for the demo binary.  Loaded read-only through
//! [`ConfigPort`](crate::app::ports::ConfigPort); the panel itself has no
//! tunables.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Where component signals are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// One line per signal on stdout.
    #[default]
    Console,
    /// Through the `log` facade at `info`.
    Log,
}

/// Demo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Line printed between the start and stop sequences.
    pub separator: String,
    pub output: Output,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            separator: "---".to_owned(),
            output: Output::Console,
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("separator must not be blank"));
        }
        if self.separator.contains(['\n', '\r']) {
            return Err(ConfigError::ValidationFailed(
                "separator must be a single line",
            ));
        }
        Ok(())
    }
}
