//! Domain models for hasagi.
//!
//! Pure data structures describing one CLI invocation against the League
//! client: who to talk to ([`LcuCredentials`]), what to send ([`HttpMethod`]),
//! what came back ([`RequestResult`]) and what the websocket pushed
//! ([`LcuEvent`]). Models carry validation but no I/O.

pub mod credentials;
pub mod error;
pub mod event;
pub mod http_method;
pub mod request_result;

pub use credentials::builder::LcuCredentialsBuilder;
pub use credentials::{LcuCredentials, Protocol};
pub use error::model_error::ModelError;
pub use event::{EventFilter, EventSubscription, EventType, JSON_API_EVENT, LcuEvent};
pub use http_method::HttpMethod;
pub use request_result::{ProtocolError, RequestResult, Success, TransportError};

/// The LCU only ever listens on loopback.
pub const LCU_HOSTNAME: &str = "127.0.0.1";

/// Fixed user name paired with the remoting token for Basic auth.
pub const LCU_USERNAME: &str = "riot";

#[cfg(test)]
mod tests;
