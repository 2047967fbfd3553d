use crate::error::lcu_client::LcuClientError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures that end the readiness wait. A client that is simply not running
/// yet is never an error; it is reported as an attempt notice instead.
#[derive(Debug, ThisError)]
pub enum ConnectError {
    #[error("Client Build Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },

    #[error("Runtime Error: {message} {location}")]
    Runtime {
        message: String,
        location: ErrorLocation,
    },
}

impl From<LcuClientError> for ConnectError {
    #[track_caller]
    fn from(error: LcuClientError) -> Self {
        ConnectError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for ConnectError {
    #[track_caller]
    fn from(error: tokio::task::JoinError) -> Self {
        ConnectError::Runtime {
            message: format!("Discovery task failed: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
