use common::{ErrorLocation, HttpStatusCode};
use models::TransportError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LcuClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        code: Option<&'static str>,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Error: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    #[error("Header Error: {message} {location}")]
    Header {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl LcuClientError {
    /// Short machine-readable code, mirroring the socket error names users
    /// know from other LCU tooling.
    pub fn code(&self) -> &'static str {
        match self {
            LcuClientError::Http { code, .. } => code.unwrap_or("EHTTP"),
            LcuClientError::Json { .. } => "EJSON",
            LcuClientError::Url { .. } => "EINVALIDURL",
            LcuClientError::Header { .. } => "EHEADER",
            LcuClientError::Server { .. } => "ESERVER",
        }
    }

    /// The message without the location suffix.
    pub fn message(&self) -> &str {
        match self {
            LcuClientError::Http { message, .. }
            | LcuClientError::Json { message, .. }
            | LcuClientError::Url { message, .. }
            | LcuClientError::Header { message, .. }
            | LcuClientError::Server { message, .. } => message,
        }
    }

    pub fn into_transport_error(self) -> TransportError {
        TransportError {
            error_code: Some(self.code().to_string()),
            message: Some(self.message().to_string()),
        }
    }
}

fn reqwest_code(error: &reqwest::Error) -> Option<&'static str> {
    if error.is_timeout() {
        Some("ETIMEDOUT")
    } else if error.is_connect() {
        Some("ECONNREFUSED")
    } else if error.is_decode() || error.is_body() {
        Some("EBODY")
    } else if error.is_builder() {
        Some("EBUILDER")
    } else if error.is_request() {
        Some("EREQUEST")
    } else {
        None
    }
}

impl From<reqwest::Error> for LcuClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        LcuClientError::Http {
            code: reqwest_code(&error),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for LcuClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LcuClientError::Url {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for LcuClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        LcuClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for LcuClientError {
    #[track_caller]
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        LcuClientError::Header {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
