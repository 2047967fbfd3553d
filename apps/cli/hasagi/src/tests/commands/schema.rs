use crate::cli::SchemaArgs;
use crate::commands::schema::{
    CONSOLE_SCHEMA_FILE_NAME, EXTENDED_SCHEMA_FILE_NAME, FULL_SCHEMA_FILE_NAME,
    SWAGGER_FILE_NAME, SchemaTargets, export,
};

use lcu_schema::help::{ConsoleHelp, FullHelp};
use lcu_schema::typescript::{ENDPOINTS_FILE_NAME, EVENTS_FILE_NAME, TYPES_FILE_NAME};
use lcu_schema::{ExtendedSchema, LcuSchema};

use std::path::PathBuf;

use serde_json::json;
use tempfile::tempdir;

fn schema() -> LcuSchema {
    let console = json!({ "functions": {}, "events": {}, "types": {} });
    let full = json!({
        "functions": [{
            "name": "GetLolGameflowV1Session",
            "http_method": "GET",
            "url": "/lol-gameflow/v1/session",
            "returns": { "type": "LolGameflowSession", "elementType": "" }
        }],
        "events": [],
        "types": [{ "name": "LolGameflowSession", "fields": [] }]
    });
    let extended = ExtendedSchema::derive(
        &FullHelp::from_value(&full).unwrap(),
        &ConsoleHelp::from_value(&console).unwrap(),
    );

    LcuSchema {
        console,
        full,
        extended,
    }
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn given_no_flags_when_building_targets_then_empty() {
    let targets = SchemaTargets::from(&SchemaArgs {
        typescript: None,
        tsnamespace: Some(String::from("LCU")),
        swagger: None,
        raw: None,
    });

    assert!(targets.is_empty());
}

#[test]
fn given_flag_without_value_when_building_targets_then_current_directory() {
    let targets = SchemaTargets::from(&SchemaArgs {
        typescript: None,
        tsnamespace: None,
        swagger: Some(String::new()),
        raw: None,
    });

    assert_eq!(targets.swagger, Some(PathBuf::from(".")));
    assert!(!targets.is_empty());
}

/// **VALUE**: Swagger only writes `swagger.json` and none of the raw files.
#[tokio::test]
async fn given_swagger_only_when_exporting_then_only_swagger_written() {
    // GIVEN: A Swagger target in a directory that does not exist yet
    let dir = tempdir().unwrap();
    let targets = SchemaTargets {
        swagger: Some(dir.path().join("swagger")),
        ..Default::default()
    };

    // WHEN: Exporting
    let written = export(&schema(), &targets).await.unwrap();

    // THEN: The directory was created and holds only swagger.json
    assert_eq!(names(&written), vec![SWAGGER_FILE_NAME]);
    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(document["openapi"], "3.0.3");
    assert!(!dir.path().join("swagger").join(FULL_SCHEMA_FILE_NAME).exists());
}

/// **VALUE**: Every format together writes all seven fixed file names.
#[tokio::test]
async fn given_all_targets_when_exporting_then_every_file_written() {
    // GIVEN: One directory for everything
    let dir = tempdir().unwrap();
    let targets = SchemaTargets {
        raw: Some(dir.path().to_path_buf()),
        swagger: Some(dir.path().to_path_buf()),
        typescript: Some(dir.path().to_path_buf()),
        namespace: Some(String::from("LCU")),
    };

    // WHEN: Exporting
    let written = export(&schema(), &targets).await.unwrap();

    // THEN: Raw documents verbatim, everything else present
    assert_eq!(
        names(&written),
        vec![
            CONSOLE_SCHEMA_FILE_NAME,
            FULL_SCHEMA_FILE_NAME,
            EXTENDED_SCHEMA_FILE_NAME,
            SWAGGER_FILE_NAME,
            TYPES_FILE_NAME,
            ENDPOINTS_FILE_NAME,
            EVENTS_FILE_NAME,
        ]
    );
    let full: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(FULL_SCHEMA_FILE_NAME)).unwrap())
            .unwrap();
    assert_eq!(full, schema().full);
    let types = std::fs::read_to_string(dir.path().join(TYPES_FILE_NAME)).unwrap();
    assert!(types.starts_with("declare namespace LCU {"));
}

#[tokio::test]
async fn given_invalid_namespace_when_exporting_typescript_then_schema_error() {
    let dir = tempdir().unwrap();
    let targets = SchemaTargets {
        typescript: Some(dir.path().to_path_buf()),
        namespace: Some(String::from("1nvalid")),
        ..Default::default()
    };

    let result = export(&schema(), &targets).await;

    assert!(matches!(result, Err(crate::error::HasagiError::Schema(_))));
}
