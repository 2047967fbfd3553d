//! Shared building blocks for the hasagi workspace.
//!
//! Everything here is free of LCU knowledge: location-tracked errors, status
//! code helpers, a secret wrapper and the JSON pretty printer used for every
//! file the CLI writes.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting utilities
//! - **models**: Pure data passed between layers
//! - **lcu-client** / **lcu-schema**: Logic operating on models
//! - **hasagi**: The command-line dispatcher wiring everything together

pub mod error;
pub mod http_status;
pub mod pretty_json;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use pretty_json::to_pretty_json;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
