//! OpenAPI 3.0.3 document for the LCU REST API.

use crate::extended::{Endpoint, ExtendedSchema};
use crate::help::{HelpArgument, HelpType, HelpTypeRef};

use std::collections::BTreeMap;

use serde::Serialize;

pub const OPENAPI_VERSION: &str = "3.0.3";
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
const JSON_CONTENT_TYPE: &str = "application/json";
const SUCCESS_RESPONSE_KEY: &str = "2XX";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerDocument {
    pub openapi: String,
    pub info: Info,
    /// Path, then lower-case method.
    pub paths: BTreeMap<String, BTreeMap<String, Operation>>,
    pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Components {
    pub schemas: BTreeMap<String, Schema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, Response>,
}

impl Operation {
    /// Schema of the request body, if any.
    pub fn body_schema(&self) -> Option<&Schema> {
        self.request_body.as_ref()?.content.get(JSON_CONTENT_TYPE)?.schema.as_ref()
    }

    /// Schema of the success response, if it has content.
    pub fn response_schema(&self) -> Option<&Schema> {
        self.responses
            .get(SUCCESS_RESPONSE_KEY)?
            .content
            .as_ref()?
            .get(JSON_CONTENT_TYPE)?
            .schema
            .as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    pub required: bool,
    pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}

/// The subset of JSON Schema the LCU types need.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Default::default()
        }
    }

    fn integer(format: &str, unsigned: bool) -> Self {
        Self {
            format: Some(format.to_string()),
            minimum: unsigned.then_some(0),
            ..Self::typed("integer")
        }
    }

    pub fn reference_to(name: &str) -> Self {
        Self {
            reference: Some(format!("{SCHEMA_REF_PREFIX}{name}")),
            ..Default::default()
        }
    }

    /// Component name this schema points at.
    pub fn referenced_name(&self) -> Option<&str> {
        self.reference.as_deref()?.strip_prefix(SCHEMA_REF_PREFIX)
    }
}

/// Map an LCU type reference to a schema. `None` for the empty type.
pub fn schema_for(type_ref: &HelpTypeRef) -> Option<Schema> {
    let schema = match type_ref.type_name.as_str() {
        "" => return None,
        "bool" => Schema::typed("boolean"),
        "int8" | "int16" | "int32" => Schema::integer("int32", false),
        "int64" => Schema::integer("int64", false),
        "uint8" | "uint16" | "uint32" => Schema::integer("int32", true),
        "uint64" => Schema::integer("int64", true),
        "float" => Schema {
            format: Some(String::from("float")),
            ..Schema::typed("number")
        },
        "double" => Schema {
            format: Some(String::from("double")),
            ..Schema::typed("number")
        },
        "string" => Schema::typed("string"),
        "object" => Schema::typed("object"),
        "vector" => Schema {
            items: Some(Box::new(element_schema(&type_ref.element_type))),
            ..Schema::typed("array")
        },
        "map" => Schema {
            additional_properties: Some(Box::new(element_schema(&type_ref.element_type))),
            ..Schema::typed("object")
        },
        name => Schema::reference_to(name),
    };

    Some(schema)
}

// An unnamed element type is "anything".
fn element_schema(element_type: &str) -> Schema {
    schema_for(&HelpTypeRef::named(element_type)).unwrap_or_default()
}

fn component_schema(help_type: &HelpType) -> Schema {
    let description = (!help_type.description.is_empty()).then(|| help_type.description.clone());

    if help_type.is_enum() {
        return Schema {
            enum_values: help_type.values.iter().map(|v| v.name.clone()).collect(),
            description,
            ..Schema::typed("string")
        };
    }

    let properties = help_type
        .fields
        .iter()
        .map(|field| {
            let mut schema = schema_for(&field.type_ref).unwrap_or_default();
            if !field.description.is_empty() {
                schema.description = Some(field.description.clone());
            }
            (field.name.clone(), schema)
        })
        .collect();

    Schema {
        properties: Some(properties),
        required: help_type
            .fields
            .iter()
            .filter(|field| !field.optional)
            .map(|field| field.name.clone())
            .collect(),
        description,
        ..Schema::typed("object")
    }
}

fn json_content(schema: Schema) -> BTreeMap<String, MediaType> {
    BTreeMap::from([(
        String::from(JSON_CONTENT_TYPE),
        MediaType {
            schema: Some(schema),
        },
    )])
}

fn parameter(argument: &HelpArgument, location: ParameterLocation) -> Parameter {
    Parameter {
        name: argument.name.clone(),
        location,
        required: location == ParameterLocation::Path || !argument.optional,
        description: argument.description.clone(),
        schema: schema_for(&argument.type_ref).unwrap_or_default(),
    }
}

/// OpenAPI has no `{+name}` reserved expansion.
pub fn openapi_path(path: &str) -> String {
    path.replace("{+", "{")
}

fn operation(endpoint: &Endpoint) -> Operation {
    let parameters = endpoint
        .path_params
        .iter()
        .map(|argument| parameter(argument, ParameterLocation::Path))
        .chain(
            endpoint
                .query_params
                .iter()
                .map(|argument| parameter(argument, ParameterLocation::Query)),
        )
        .collect();

    let request_body = endpoint.body.as_ref().map(|body| RequestBody {
        required: !body.optional,
        content: json_content(schema_for(&body.type_ref).unwrap_or_default()),
    });

    let response = Response {
        description: String::from("Successful response"),
        content: schema_for(&endpoint.returns).map(json_content),
    };

    Operation {
        operation_id: endpoint.name.clone(),
        description: endpoint.description.clone(),
        tags: endpoint.plugin.iter().cloned().collect(),
        parameters,
        request_body,
        responses: BTreeMap::from([(String::from(SUCCESS_RESPONSE_KEY), response)]),
    }
}

/// Build the OpenAPI document. Endpoints sharing a path and method keep the
/// first definition.
pub fn generate(schema: &ExtendedSchema) -> SwaggerDocument {
    let mut paths: BTreeMap<String, BTreeMap<String, Operation>> = BTreeMap::new();

    for endpoint in &schema.endpoints {
        paths
            .entry(openapi_path(&endpoint.path))
            .or_default()
            .entry(endpoint.method.to_ascii_lowercase())
            .or_insert_with(|| operation(endpoint));
    }

    let schemas = schema
        .types
        .iter()
        .map(|help_type| (help_type.name.clone(), component_schema(help_type)))
        .collect();

    SwaggerDocument {
        openapi: String::from(OPENAPI_VERSION),
        info: Info {
            title: String::from("League Client Update API"),
            version: String::from("1.0.0"),
        },
        paths,
        components: Components { schemas },
    }
}
