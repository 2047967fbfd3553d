use common::ErrorLocation;
use models::ModelError;

use std::error::Error as StdError;
use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DiscoveryError {
    #[error("Network Query Error: {message} {location}")]
    NetworkQuery {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Lockfile Error: {path}: {message} {location}")]
    Lockfile {
        message: String,
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ModelError> for DiscoveryError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        DiscoveryError::Validation {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
