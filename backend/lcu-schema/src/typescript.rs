//! TypeScript declarations for the LCU API.
//!
//! Three files are produced: the component types, an `LCUEndpoints` interface
//! keyed by path and method, and `LCUEvents` / `LCUEventPaths` for websocket
//! payloads. With a namespace the files are global `declare namespace` blocks
//! tied together with triple-slash references. Without one they are modules
//! importing the types file.

use crate::error::SchemaError;
use crate::extended::{EventDefinition, ExtendedSchema};
use crate::help::HelpType;
use crate::swagger::{self, Operation, ParameterLocation, Schema, SwaggerDocument};

use common::ErrorLocation;

use std::collections::BTreeMap;
use std::panic::Location;

pub const TYPES_FILE_NAME: &str = "lcu-types.d.ts";
pub const ENDPOINTS_FILE_NAME: &str = "lcu-endpoints.d.ts";
pub const EVENTS_FILE_NAME: &str = "lcu-events.d.ts";

const TYPES_MODULE: &str = "./lcu-types";
const TYPES_ALIAS: &str = "Types";
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScriptDeclarations {
    pub types: String,
    pub endpoints: String,
    pub events: String,
}

/// How declarations are wrapped and how they refer to component types.
#[derive(Debug, Clone, Copy)]
enum Layout<'a> {
    Namespace(&'a str),
    Module,
}

impl Layout<'_> {
    fn export(&self) -> &'static str {
        match self {
            Layout::Namespace(_) => "",
            Layout::Module => "export ",
        }
    }

    /// Prefix for component type names outside the types file.
    fn type_prefix(&self) -> String {
        match self {
            Layout::Namespace(_) => String::new(),
            Layout::Module => format!("{TYPES_ALIAS}."),
        }
    }
}

/// Line-oriented output with indentation.
#[derive(Default)]
struct Writer {
    output: String,
    depth: usize,
}

impl Writer {
    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            self.output.push_str(&INDENT.repeat(self.depth));
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    fn doc(&mut self, description: &str) {
        let description = description.trim();
        if description.is_empty() {
            return;
        }
        let description = description.replace("*/", "*\\/");
        let mut lines = description.lines();
        match (lines.next(), lines.next()) {
            (Some(only), None) => self.line(&format!("/** {only} */")),
            _ => {
                self.line("/**");
                for line in description.lines() {
                    self.line(format!(" * {line}").trim_end());
                }
                self.line(" */");
            }
        }
    }

    /// Wrap `body` in the layout's header and footer.
    fn file(layout: Layout<'_>, references: &[&str], body: impl FnOnce(&mut Writer)) -> String {
        let mut writer = Writer::default();

        match layout {
            Layout::Namespace(namespace) => {
                for reference in references {
                    writer.line(&format!("/// <reference path=\"./{reference}\" />"));
                }
                if !references.is_empty() {
                    writer.line("");
                }
                writer.open(&format!("declare namespace {namespace} {{"));
                body(&mut writer);
                writer.close("}");
            }
            Layout::Module => {
                if !references.is_empty() {
                    writer.line(&format!("import type * as {TYPES_ALIAS} from \"{TYPES_MODULE}\";"));
                    writer.line("");
                }
                body(&mut writer);
                // An empty file would not be a module and could not be imported.
                if writer.output.is_empty() {
                    writer.line("export {};");
                }
            }
        }

        writer.output
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Namespaces may be dotted, e.g. `Lcu.Api`.
#[track_caller]
fn validate_namespace(namespace: &str) -> Result<(), SchemaError> {
    if namespace.split('.').all(is_identifier) {
        return Ok(());
    }

    Err(SchemaError::InvalidNamespace {
        namespace: namespace.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Render a schema as a TypeScript type.
pub fn ts_type(schema: &Schema, type_prefix: &str) -> String {
    if let Some(name) = schema.referenced_name() {
        return format!("{type_prefix}{name}");
    }

    if !schema.enum_values.is_empty() {
        return schema
            .enum_values
            .iter()
            .map(|value| string_literal(value))
            .collect::<Vec<_>>()
            .join(" | ");
    }

    match schema.schema_type.as_deref() {
        Some("boolean") => String::from("boolean"),
        Some("integer") | Some("number") => String::from("number"),
        Some("string") => String::from("string"),
        Some("array") => {
            let items = schema
                .items
                .as_deref()
                .map(|items| ts_type(items, type_prefix))
                .unwrap_or_else(|| String::from("unknown"));
            format!("Array<{items}>")
        }
        Some("object") => {
            let values = schema
                .additional_properties
                .as_deref()
                .map(|values| ts_type(values, type_prefix))
                .unwrap_or_else(|| String::from("unknown"));
            format!("Record<string, {values}>")
        }
        _ => String::from("unknown"),
    }
}

fn write_component(writer: &mut Writer, layout: Layout<'_>, help_type: &HelpType, schema: &Schema) {
    writer.doc(&help_type.description);

    if !schema.enum_values.is_empty() {
        writer.line(&format!(
            "{}type {} = {};",
            layout.export(),
            help_type.name,
            ts_type(schema, "")
        ));
        return;
    }

    writer.open(&format!("{}interface {} {{", layout.export(), help_type.name));
    for field in &help_type.fields {
        let field_schema = schema
            .properties
            .as_ref()
            .and_then(|properties| properties.get(&field.name))
            .cloned()
            .unwrap_or_default();
        writer.doc(&field.description);
        writer.line(&format!(
            "{}{}: {};",
            property_key(&field.name),
            if field.optional { "?" } else { "" },
            ts_type(&field_schema, "")
        ));
    }
    writer.close("}");
}

fn parameter_object(operation: &Operation, location: ParameterLocation, prefix: &str) -> String {
    let members: Vec<String> = operation
        .parameters
        .iter()
        .filter(|parameter| parameter.location == location)
        .map(|parameter| {
            format!(
                "{}{}: {}",
                property_key(&parameter.name),
                if parameter.required { "" } else { "?" },
                ts_type(&parameter.schema, prefix)
            )
        })
        .collect();

    if members.is_empty() {
        String::from("{}")
    } else {
        format!("{{ {} }}", members.join("; "))
    }
}

fn write_endpoints(writer: &mut Writer, layout: Layout<'_>, swagger: &SwaggerDocument) {
    let prefix = layout.type_prefix();

    writer.open(&format!("{}interface LCUEndpoints {{", layout.export()));
    for (path, operations) in &swagger.paths {
        writer.open(&format!("{}: {{", string_literal(path)));
        for (method, operation) in operations {
            writer.doc(&operation.description);
            writer.open(&format!("{}: {{", method.to_ascii_uppercase()));
            writer.line(&format!(
                "path: {};",
                parameter_object(operation, ParameterLocation::Path, &prefix)
            ));
            writer.line(&format!(
                "query: {};",
                parameter_object(operation, ParameterLocation::Query, &prefix)
            ));
            writer.line(&format!(
                "body: {};",
                operation
                    .body_schema()
                    .map(|schema| ts_type(schema, &prefix))
                    .unwrap_or_else(|| String::from("never"))
            ));
            writer.line(&format!(
                "response: {};",
                operation
                    .response_schema()
                    .map(|schema| ts_type(schema, &prefix))
                    .unwrap_or_else(|| String::from("void"))
            ));
            writer.close("};");
        }
        writer.close("};");
    }
    writer.close("}");
}

fn write_events(writer: &mut Writer, layout: Layout<'_>, schema: &ExtendedSchema) {
    let prefix = layout.type_prefix();
    let payload = |event: &EventDefinition| {
        swagger::schema_for(&event.type_ref)
            .map(|schema| ts_type(&schema, &prefix))
            .unwrap_or_else(|| String::from("unknown"))
    };

    writer.open(&format!("{}interface LCUEvents {{", layout.export()));
    for event in &schema.events {
        writer.doc(&event.description);
        writer.line(&format!("{}: {};", string_literal(&event.name), payload(event)));
    }
    writer.close("}");

    writer.line("");

    let by_path: BTreeMap<&str, String> = schema
        .events
        .iter()
        .filter_map(|event| Some((event.path.as_deref()?, payload(event))))
        .collect();

    writer.open(&format!("{}interface LCUEventPaths {{", layout.export()));
    for (path, payload) in by_path {
        writer.line(&format!("{}: {};", string_literal(path), payload));
    }
    writer.close("}");
}

/// Generate the three declaration files.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidNamespace`] if `namespace` is not a (dotted)
/// identifier.
#[track_caller]
pub fn generate(
    schema: &ExtendedSchema,
    swagger: &SwaggerDocument,
    namespace: Option<&str>,
) -> Result<TypeScriptDeclarations, SchemaError> {
    let layout = match namespace {
        Some(namespace) => {
            validate_namespace(namespace)?;
            Layout::Namespace(namespace)
        }
        None => Layout::Module,
    };

    let types = Writer::file(layout, &[], |writer| {
        for (index, help_type) in schema.types.iter().enumerate() {
            if index > 0 {
                writer.line("");
            }
            let component = swagger
                .components
                .schemas
                .get(&help_type.name)
                .cloned()
                .unwrap_or_default();
            write_component(writer, layout, help_type, &component);
        }
    });

    let endpoints = Writer::file(layout, &[TYPES_FILE_NAME], |writer| {
        write_endpoints(writer, layout, swagger)
    });

    let events = Writer::file(layout, &[TYPES_FILE_NAME], |writer| {
        write_events(writer, layout, schema)
    });

    Ok(TypeScriptDeclarations {
        types,
        endpoints,
        events,
    })
}
