use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// `[client]` section: where to find the LCU and how patiently to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Read credentials from this lockfile instead of scanning processes.
    pub lockfile: Option<PathBuf>,

    /// Extra directory searched for a lockfile.
    pub install_directory: Option<PathBuf>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_retry_initial_interval_ms")]
    pub retry_initial_interval_ms: u64,

    #[serde(default = "default_retry_max_interval_ms")]
    pub retry_max_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lockfile: None,
            install_directory: None,
            request_timeout_secs: default_request_timeout_secs(),
            retry_initial_interval_ms: default_retry_initial_interval_ms(),
            retry_max_interval_ms: default_retry_max_interval_ms(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}
fn default_retry_initial_interval_ms() -> u64 {
    500
}
fn default_retry_max_interval_ms() -> u64 {
    5_000
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_initial_interval(&self) -> Duration {
        Duration::from_millis(self.retry_initial_interval_ms)
    }

    pub fn retry_max_interval(&self) -> Duration {
        Duration::from_millis(self.retry_max_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid request_timeout_secs: {} (must be 1-{MAX_REQUEST_TIMEOUT_SECS})",
                    self.request_timeout_secs
                ),
            });
        }

        if self.retry_initial_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("retry_initial_interval_ms must be greater than 0"),
            });
        }

        if self.retry_max_interval_ms < self.retry_initial_interval_ms {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "retry_max_interval_ms ({}) is below retry_initial_interval_ms ({})",
                    self.retry_max_interval_ms, self.retry_initial_interval_ms
                ),
            });
        }

        if let Some(ref lockfile) = self.lockfile
            && lockfile.as_os_str().is_empty()
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("lockfile cannot be an empty path"),
            });
        }

        Ok(())
    }
}
