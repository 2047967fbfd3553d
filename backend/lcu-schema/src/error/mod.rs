use common::ErrorLocation;
use lcu_client::error::lcu_client::LcuClientError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error(transparent)]
    Client(#[from] LcuClientError),

    #[error("Help Format Error: {message} {location}")]
    HelpFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("Namespace Error: '{namespace}' is not a valid TypeScript identifier {location}")]
    InvalidNamespace {
        namespace: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for SchemaError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        SchemaError::HelpFormat {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
