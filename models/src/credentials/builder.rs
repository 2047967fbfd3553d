use crate::error::model_error::ModelError;
use crate::{LcuCredentials, Protocol};

use common::{ErrorLocation, RedactedToken};

use std::panic::Location;

/// Builder for creating validated LcuCredentials instances.
///
/// Discovery fills it from whichever source it found first (process command
/// line or lockfile); `build` rejects anything the LCU could never accept.
#[derive(Debug, Default)]
pub struct LcuCredentialsBuilder {
    pid: Option<u32>,
    port: Option<u16>,
    password: Option<String>,
    protocol: Option<Protocol>,
}

impl LcuCredentialsBuilder {
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Build the LcuCredentials with validation.
    ///
    /// Protocol defaults to [`Protocol::Https`].
    #[track_caller]
    pub fn build(self) -> Result<LcuCredentials, ModelError> {
        let pid = self.pid.ok_or_else(|| ModelError::Validation {
            message: String::from("PID is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if pid == 0 {
            return Err(ModelError::Validation {
                message: String::from("PID must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let port = self.port.ok_or_else(|| ModelError::Validation {
            message: String::from("Port is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if port == 0 {
            return Err(ModelError::Validation {
                message: String::from("Port must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password = self.password.ok_or_else(|| ModelError::Validation {
            message: String::from("Password is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if password.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Password cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(LcuCredentials {
            pid,
            port,
            password: RedactedToken::new(password),
            protocol: self.protocol.unwrap_or_default(),
        })
    }
}
