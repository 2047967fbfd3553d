pub mod builder;

use crate::error::model_error::ModelError;
use crate::{LCU_HOSTNAME, LCU_USERNAME};

use common::{ErrorLocation, RedactedToken};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Scheme the LCU serves on. The real client always uses `https`; `http`
/// shows up in lockfiles written for local test servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Https,
    Http,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }

    fn ws_scheme(&self) -> &'static str {
        match self {
            Protocol::Https => "wss",
            Protocol::Http => "ws",
        }
    }
}

impl FromStr for Protocol {
    type Err = ModelError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "https" => Ok(Protocol::Https),
            "http" => Ok(Protocol::Http),
            other => Err(ModelError::Parse {
                message: format!("Unsupported protocol: {other}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to reach a running LCU instance.
///
/// Construct through [`builder::LcuCredentialsBuilder`] so the invariants
/// (non-zero pid and port, non-empty password) always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcuCredentials {
    pub pid: u32,
    pub port: u16,
    pub password: RedactedToken,
    pub protocol: Protocol,
}

impl LcuCredentials {
    /// `https://127.0.0.1:{port}`
    pub fn base_url(&self) -> String {
        format!("{}://{LCU_HOSTNAME}:{}", self.protocol, self.port)
    }

    /// `wss://127.0.0.1:{port}/`
    pub fn ws_url(&self) -> String {
        format!("{}://{LCU_HOSTNAME}:{}/", self.protocol.ws_scheme(), self.port)
    }

    /// Value for the `Authorization` header: `Basic base64("riot:{password}")`.
    pub fn basic_auth(&self) -> String {
        let raw = format!("{LCU_USERNAME}:{}", self.password.expose());
        format!("Basic {}", BASE64.encode(raw))
    }
}
