//! LCU websocket events and subscription filters.
//!
//! The LCU speaks a small subset of WAMP 1.0 over its websocket: clients send
//! `[5, topic]` to subscribe and receive `[8, topic, payload]` for each event.

use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Topic carrying every JSON API change.
pub const JSON_API_EVENT: &str = "OnJsonApiEvent";

const WAMP_SUBSCRIBE: u64 = 5;
const WAMP_EVENT: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Create,
    Update,
    Delete,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Create => "Create",
            EventType::Update => "Update",
            EventType::Delete => "Delete",
        }
    }
}

impl FromStr for EventType {
    type Err = ModelError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(EventType::Create),
            "update" => Ok(EventType::Update),
            "delete" => Ok(EventType::Delete),
            _ => Err(ModelError::Parse {
                message: format!("Unknown event type: {s}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event as delivered by the LCU. The payload is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LcuEvent {
    pub topic: String,
    pub payload: Value,
}

impl LcuEvent {
    pub fn uri(&self) -> Option<&str> {
        self.payload.get("uri")?.as_str()
    }

    pub fn event_type(&self) -> Option<EventType> {
        self.payload.get("eventType")?.as_str()?.parse().ok()
    }

    /// Parse a websocket text frame.
    ///
    /// Returns `Ok(None)` for well-formed frames that are not events (welcome,
    /// call results) and for empty keep-alive frames.
    #[track_caller]
    pub fn from_wamp_frame(text: &str) -> Result<Option<Self>, ModelError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let frame: Value = serde_json::from_str(text).map_err(|e| ModelError::Parse {
            message: format!("Invalid websocket frame: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let Some(parts) = frame.as_array() else {
            return Err(ModelError::Parse {
                message: String::from("Websocket frame is not an array"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if parts.first().and_then(Value::as_u64) != Some(WAMP_EVENT) {
            return Ok(None);
        }

        match (parts.get(1).and_then(Value::as_str), parts.get(2)) {
            (Some(topic), Some(payload)) => Ok(Some(Self {
                topic: topic.to_string(),
                payload: payload.clone(),
            })),
            _ => Err(ModelError::Parse {
                message: String::from("Event frame is missing its topic or payload"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Which events a subscription is interested in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    /// Every JSON API event.
    #[default]
    All,
    /// A named topic, e.g. `OnJsonApiEvent_lol-gameflow_v1_session`.
    Name(String),
    /// JSON API events whose `uri` equals this path.
    Path(String),
}

impl EventFilter {
    /// Build a path filter, adding the leading slash LCU uris always have.
    pub fn path(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with('/') {
            EventFilter::Path(path)
        } else {
            EventFilter::Path(format!("/{path}"))
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            EventFilter::All | EventFilter::Path(_) => JSON_API_EVENT,
            EventFilter::Name(name) => name,
        }
    }

    fn matches(&self, event: &LcuEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Name(name) => event.topic == *name,
            EventFilter::Path(path) => event.uri() == Some(path.as_str()),
        }
    }
}

/// A filter plus the event types to keep. No types means all types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventSubscription {
    pub filter: EventFilter,
    pub types: Vec<EventType>,
}

impl EventSubscription {
    pub fn new(filter: EventFilter, types: Vec<EventType>) -> Self {
        Self { filter, types }
    }

    pub fn topic(&self) -> &str {
        self.filter.topic()
    }

    pub fn matches(&self, event: &LcuEvent) -> bool {
        if !self.filter.matches(event) {
            return false;
        }

        if self.types.is_empty() {
            return true;
        }

        event
            .event_type()
            .is_some_and(|event_type| self.types.contains(&event_type))
    }

    /// The `[5, topic]` frame to send after connecting.
    pub fn subscribe_frame(&self) -> String {
        json!([WAMP_SUBSCRIBE, self.topic()]).to_string()
    }
}
