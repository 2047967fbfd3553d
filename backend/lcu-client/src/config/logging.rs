use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// `[log]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// Plain-text copy of the log, in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

impl LogConfig {
    /// Parsed level; falls back to `Warn` for values `validate` would reject.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Warn)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if LevelFilter::from_str(&self.level).is_err() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid log level: {} (expected off, error, warn, info, debug or trace)",
                    self.level
                ),
            });
        }

        Ok(())
    }
}
