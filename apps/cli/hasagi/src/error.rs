use common::ErrorLocation;
use lcu_client::error::config::ConfigError;
use lcu_client::error::connect::ConnectError;
use lcu_client::error::ws::WsError;
use lcu_schema::SchemaError;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

/// Everything a command can fail with. `main` logs it and exits 1.
#[derive(Debug, Error)]
pub enum HasagiError {
    /// Arguments clap accepted but that are still unusable, e.g. invalid JSON.
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Writing an output file or directory failed.
    #[error("Output Error: {path}: {message} {location}")]
    Output {
        message: String,
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    /// Printing to stdout failed, e.g. the reading end of a pipe closed.
    #[error("Stdout Error: {message} {location}")]
    Stdout {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Event Stream Error: {message} {location}")]
    EventStream {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error(transparent)]
    Ws(#[from] WsError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl HasagiError {
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        HasagiError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stdout(source: std::io::Error) -> Self {
        HasagiError::Stdout {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HasagiError::Output {
            message: source.to_string(),
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for HasagiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        HasagiError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
