//! LCU API schema: fetching `/help` and turning it into something tools can use.
//!
//! - [`help`]: the `/help` documents as the LCU serves them
//! - [`extended`]: endpoints, events and types joined into one schema
//! - [`swagger`]: an OpenAPI 3 document for the REST API
//! - [`typescript`]: `.d.ts` declarations for endpoints, events and types

pub mod error;
pub mod extended;
pub mod help;
pub mod swagger;
pub mod typescript;

#[cfg(test)]
mod tests;

pub use error::SchemaError;
pub use extended::{Endpoint, EventDefinition, ExtendedSchema};
pub use swagger::SwaggerDocument;
pub use typescript::TypeScriptDeclarations;

use help::{ConsoleHelp, FullHelp};

use lcu_client::LcuClient;

use log::{debug, info};
use serde_json::{Value, json};

const HELP_ENDPOINT: &str = "/help";

/// Everything `/help` knows, raw and derived.
#[derive(Debug, Clone)]
pub struct LcuSchema {
    /// `/help?format=Console`, verbatim.
    pub console: Value,
    /// `/help?format=Full`, verbatim.
    pub full: Value,
    pub extended: ExtendedSchema,
}

/// Fetch both help formats, once each, and derive the extended schema.
///
/// # Errors
///
/// Returns [`SchemaError`] if either request fails or a document does not
/// have the shape the LCU documents.
pub async fn fetch_extended_schema(client: &LcuClient) -> Result<LcuSchema, SchemaError> {
    debug!("Fetching console help");
    let console = client
        .get_json(HELP_ENDPOINT, Some(&json!({ "format": "Console" })))
        .await?;

    debug!("Fetching full help");
    let full = client
        .get_json(HELP_ENDPOINT, Some(&json!({ "format": "Full" })))
        .await?;

    let console_help = ConsoleHelp::from_value(&console)?;
    let full_help = FullHelp::from_value(&full)?;
    let extended = ExtendedSchema::derive(&full_help, &console_help);

    info!(
        "Schema has {} endpoints, {} events and {} types",
        extended.endpoints.len(),
        extended.events.len(),
        extended.types.len()
    );

    Ok(LcuSchema {
        console,
        full,
        extended,
    })
}
