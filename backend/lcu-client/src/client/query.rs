//! JSON object to query-string conversion.

use crate::error::lcu_client::LcuClientError;

use common::ErrorLocation;

use std::panic::Location;

use serde_json::Value;

/// Flatten a JSON object into query pairs.
///
/// Strings are used as-is, other scalars via their JSON text, arrays repeat
/// the key once per element, nested objects are JSON-encoded and `null` values
/// are dropped.
#[track_caller]
pub fn query_pairs(query: &Value) -> Result<Vec<(String, String)>, LcuClientError> {
    let Value::Object(map) = query else {
        return Err(LcuClientError::Url {
            message: format!("Query must be a JSON object, got: {query}"),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                pairs.extend(
                    items
                        .iter()
                        .filter(|item| !item.is_null())
                        .map(|item| (key.clone(), scalar_to_string(item))),
                );
            }
            other => pairs.push((key.clone(), scalar_to_string(other))),
        }
    }

    Ok(pairs)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
