//! `hasagi schema`

use crate::cli::SchemaArgs;
use crate::error::HasagiError;
use crate::output::{ensure_directory, target_path, write_pretty_json, write_text};
use crate::readiness::wait_for_client;

use lcu_client::HasagiConfig;
use lcu_schema::typescript::{ENDPOINTS_FILE_NAME, EVENTS_FILE_NAME, TYPES_FILE_NAME};
use lcu_schema::{LcuSchema, fetch_extended_schema, swagger, typescript};

use std::path::PathBuf;

use log::{info, warn};

pub const CONSOLE_SCHEMA_FILE_NAME: &str = "console-schema.json";
pub const FULL_SCHEMA_FILE_NAME: &str = "full-schema.json";
pub const EXTENDED_SCHEMA_FILE_NAME: &str = "extended-schema.json";
pub const SWAGGER_FILE_NAME: &str = "swagger.json";

/// Output directories requested on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaTargets {
    pub raw: Option<PathBuf>,
    pub swagger: Option<PathBuf>,
    pub typescript: Option<PathBuf>,
    pub namespace: Option<String>,
}

impl SchemaTargets {
    pub fn is_empty(&self) -> bool {
        self.raw.is_none() && self.swagger.is_none() && self.typescript.is_none()
    }
}

impl From<&SchemaArgs> for SchemaTargets {
    fn from(args: &SchemaArgs) -> Self {
        Self {
            raw: target_path(args.raw.as_deref()),
            swagger: target_path(args.swagger.as_deref()),
            typescript: target_path(args.typescript.as_deref()),
            namespace: args.tsnamespace.clone(),
        }
    }
}

/// Write every requested artifact. Returns the files written.
///
/// The Swagger document is derived at most once and shared with the
/// TypeScript output.
pub async fn export(schema: &LcuSchema, targets: &SchemaTargets) -> Result<Vec<PathBuf>, HasagiError> {
    let mut written = Vec::new();

    if let Some(ref dir) = targets.raw {
        ensure_directory(dir).await?;

        for (file_name, value) in [
            (CONSOLE_SCHEMA_FILE_NAME, &schema.console),
            (FULL_SCHEMA_FILE_NAME, &schema.full),
        ] {
            let path = dir.join(file_name);
            write_pretty_json(&path, value).await?;
            written.push(path);
        }

        let path = dir.join(EXTENDED_SCHEMA_FILE_NAME);
        write_pretty_json(&path, &schema.extended).await?;
        written.push(path);
    }

    if targets.swagger.is_none() && targets.typescript.is_none() {
        return Ok(written);
    }

    let document = swagger::generate(&schema.extended);

    if let Some(ref dir) = targets.swagger {
        ensure_directory(dir).await?;
        let path = dir.join(SWAGGER_FILE_NAME);
        write_pretty_json(&path, &document).await?;
        written.push(path);
    }

    if let Some(ref dir) = targets.typescript {
        let declarations =
            typescript::generate(&schema.extended, &document, targets.namespace.as_deref())?;

        ensure_directory(dir).await?;
        for (file_name, contents) in [
            (TYPES_FILE_NAME, &declarations.types),
            (ENDPOINTS_FILE_NAME, &declarations.endpoints),
            (EVENTS_FILE_NAME, &declarations.events),
        ] {
            let path = dir.join(file_name);
            write_text(&path, contents).await?;
            written.push(path);
        }
    }

    Ok(written)
}

pub async fn run(args: SchemaArgs, config: &HasagiConfig) -> Result<(), HasagiError> {
    let targets = SchemaTargets::from(&args);

    if targets.is_empty() {
        info!("No schema output requested (use --raw, --swagger or --typescript)");
        return Ok(());
    }

    if targets.namespace.is_some() && targets.typescript.is_none() {
        warn!("--tsnamespace has no effect without --typescript");
    }

    let client = wait_for_client(&config.client).await?;
    let schema = fetch_extended_schema(&client).await?;

    for path in export(&schema, &targets).await? {
        info!("Wrote {}", path.display());
    }

    Ok(())
}
