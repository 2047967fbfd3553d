//! HTTP status code utilities for classifying LCU responses.

use http::StatusCode;
use serde::Serialize;

/// HTTP status code as returned by the LCU.
///
/// Serializes as the bare number so request results keep `"statusCode": 404`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Reason phrase registered for this code, e.g. `Unprocessable Entity`.
    pub fn canonical_reason(&self) -> Option<&'static str> {
        StatusCode::from_u16(self.0).ok()?.canonical_reason()
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
