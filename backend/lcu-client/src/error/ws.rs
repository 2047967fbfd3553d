use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;
use tokio_tungstenite::tungstenite;

#[derive(Debug, ThisError)]
pub enum WsError {
    #[error("Websocket Error: {message} {location}")]
    Websocket {
        message: String,
        location: ErrorLocation,
    },

    #[error("TLS Error: {message} {location}")]
    Tls {
        message: String,
        location: ErrorLocation,
    },

    #[error("Header Error: {message} {location}")]
    Header {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stream Closed: {message} {location}")]
    Closed {
        message: String,
        location: ErrorLocation,
    },
}

impl From<tungstenite::Error> for WsError {
    #[track_caller]
    fn from(error: tungstenite::Error) -> Self {
        WsError::Websocket {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<native_tls::Error> for WsError {
    #[track_caller]
    fn from(error: native_tls::Error) -> Self {
        WsError::Tls {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tungstenite::http::header::InvalidHeaderValue> for WsError {
    #[track_caller]
    fn from(error: tungstenite::http::header::InvalidHeaderValue) -> Self {
        WsError::Header {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
