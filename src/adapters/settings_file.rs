//! JSON settings file adapter.
//!
//! Implements [`ConfigPort`] over a file on disk.  The file is read on
//! every `load`; nothing is ever written back.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::PanelConfig;

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "CARPANEL_CONFIG";

pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file named by [`CONFIG_ENV`], if set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(CONFIG_ENV).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate settings from a JSON string.
    pub fn parse(text: &str) -> Result<PanelConfig, ConfigError> {
        let config: PanelConfig = serde_json::from_str(text).map_err(|e| {
            warn!("Settings parse error: {}", e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigPort for SettingsFile {
    fn load(&self) -> Result<PanelConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound);
            }
            Err(e) => {
                warn!("Settings read failed ({}): {}", self.path.display(), e);
                return Err(ConfigError::IoError);
            }
        };
        let config = Self::parse(&text)?;
        info!("Settings loaded from {}", self.path.display());
        Ok(config)
    }
}
