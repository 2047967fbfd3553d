//! The two `/help` documents.
//!
//! `format=Full` describes every function, event and type in detail.
//! `format=Console` only maps names to one-line descriptions, and is used as a
//! fallback when the full description is empty.

use crate::error::SchemaError;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a type by name. `vector` and `map` carry their element type
/// in `element_type`; an empty `type_name` means "nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpTypeRef {
    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(rename = "elementType", default)]
    pub element_type: String,
}

impl HelpTypeRef {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            element_type: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.type_name.is_empty()
    }

    /// Scalars can travel in a query string; everything else needs a body.
    pub fn is_scalar(&self) -> bool {
        is_scalar_type(&self.type_name)
    }
}

pub(crate) fn is_scalar_type(name: &str) -> bool {
    matches!(
        name,
        "bool"
            | "int8"
            | "int16"
            | "int32"
            | "int64"
            | "uint8"
            | "uint16"
            | "uint32"
            | "uint64"
            | "float"
            | "double"
            | "string"
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpArgument {
    pub name: String,

    #[serde(rename = "type", default)]
    pub type_ref: HelpTypeRef,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpFunction {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub arguments: Vec<HelpArgument>,

    #[serde(default)]
    pub returns: HelpTypeRef,

    /// Only set for functions exposed over HTTP.
    #[serde(default)]
    pub http_method: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpField {
    pub name: String,

    #[serde(rename = "type", default)]
    pub type_ref: HelpTypeRef,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpEnumValue {
    pub name: String,

    #[serde(default)]
    pub value: i64,

    #[serde(default)]
    pub description: String,
}

/// A struct (with `fields`) or an enum (with `values`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpType {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub fields: Vec<HelpField>,

    #[serde(default)]
    pub values: Vec<HelpEnumValue>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl HelpType {
    pub fn is_enum(&self) -> bool {
        !self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpEvent {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub type_ref: HelpTypeRef,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// `/help?format=Full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullHelp {
    #[serde(default)]
    pub functions: Vec<HelpFunction>,

    #[serde(default)]
    pub events: Vec<HelpEvent>,

    #[serde(default)]
    pub types: Vec<HelpType>,
}

impl FullHelp {
    #[track_caller]
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Ok(Self::deserialize(value)?)
    }
}

/// `/help?format=Console`: name to description, per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleHelp {
    #[serde(default)]
    pub functions: BTreeMap<String, Value>,

    #[serde(default)]
    pub events: BTreeMap<String, Value>,

    #[serde(default)]
    pub types: BTreeMap<String, Value>,
}

impl ConsoleHelp {
    #[track_caller]
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Ok(Self::deserialize(value)?)
    }

    pub fn function_description(&self, name: &str) -> Option<&str> {
        describe(self.functions.get(name)?)
    }

    pub fn event_description(&self, name: &str) -> Option<&str> {
        describe(self.events.get(name)?)
    }
}

// Entries are usually plain strings; some builds nest them as `{description}`.
fn describe(entry: &Value) -> Option<&str> {
    entry
        .as_str()
        .or_else(|| entry.get("description")?.as_str())
        .filter(|description| !description.is_empty())
}
