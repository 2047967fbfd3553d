pub mod client;
pub mod logging;

pub use client::ClientConfig;
pub use logging::LogConfig;

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "hasagi";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HasagiConfig {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl HasagiConfig {
    /// `{config_dir}/hasagi/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config.
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// missing the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::load_from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!(
                    "Config file not found at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file.
    #[track_caller]
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: HasagiConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
