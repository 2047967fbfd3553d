//! Outcome of a single LCU HTTP request.
//!
//! A request never "fails" from the caller's point of view: it produces one of
//! three shapes and the caller decides how to report it.

use common::HttpStatusCode;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNKNOWN_ERROR_CODE: &str = "UNKNOWN";
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
const HTTP_ERROR_CODE: &str = "HTTP_ERROR";

/// Result of one request. Serialized without a tag so a success is exactly
/// `{"statusCode": ..., "body": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestResult {
    Success(Success),
    ProtocolError(ProtocolError),
    TransportError(TransportError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Success {
    pub status_code: HttpStatusCode,
    pub body: Value,
}

impl Success {
    pub fn new(status_code: impl Into<HttpStatusCode>, body_text: &str) -> Self {
        Self {
            status_code: status_code.into(),
            body: parse_body(body_text),
        }
    }
}

/// A response arrived but carried a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolError {
    pub status_code: HttpStatusCode,
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Error body shape the LCU uses for every non-2xx response it generates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LcuErrorBody {
    error_code: Option<String>,
    message: Option<String>,
    implementation_details: Option<Value>,
}

impl ProtocolError {
    /// Classify a non-success response body.
    ///
    /// Structured LCU error bodies keep their code, message and
    /// `implementationDetails`. Anything else becomes `HTTP_ERROR` with the raw
    /// text, or the reason phrase when the body is empty.
    pub fn from_response(status_code: impl Into<HttpStatusCode>, body_text: &str) -> Self {
        let status_code = status_code.into();
        let fallback_message = || {
            status_code
                .canonical_reason()
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP {status_code}"))
        };

        match serde_json::from_str::<LcuErrorBody>(body_text) {
            Ok(parsed) if parsed.error_code.is_some() || parsed.message.is_some() => Self {
                status_code,
                error_code: parsed
                    .error_code
                    .unwrap_or_else(|| String::from(HTTP_ERROR_CODE)),
                message: parsed
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(fallback_message),
                details: parsed.implementation_details.filter(|d| !d.is_null()),
            },
            _ => {
                let trimmed = body_text.trim();
                Self {
                    status_code,
                    error_code: String::from(HTTP_ERROR_CODE),
                    message: if trimmed.is_empty() {
                        fallback_message()
                    } else {
                        trimmed.to_string()
                    },
                    details: None,
                }
            }
        }
    }
}

/// The request/response exchange never completed.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransportError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TransportError {
    pub fn error_code_or_default(&self) -> &str {
        self.error_code.as_deref().unwrap_or(UNKNOWN_ERROR_CODE)
    }

    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }
}

/// JSON when it parses, the raw text otherwise, `null` when empty.
pub fn parse_body(body_text: &str) -> Value {
    if body_text.trim().is_empty() {
        return Value::Null;
    }

    serde_json::from_str(body_text).unwrap_or_else(|_| Value::String(body_text.to_string()))
}
