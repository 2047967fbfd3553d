//! The extended schema: `/help` reshaped around HTTP endpoints and events.

use crate::help::{ConsoleHelp, FullHelp, HelpArgument, HelpFunction, HelpType, HelpTypeRef};

use models::{HttpMethod, JSON_API_EVENT};

use log::trace;
use serde::Serialize;

const PLUGIN_TAG_PREFIX: &str = "Plugin ";
const BODY_ARGUMENT_NAME: &str = "body";

/// One REST endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub name: String,
    /// Upper-case HTTP method.
    pub method: String,
    /// URL template as the LCU reports it, e.g. `/lol-summoner/v1/summoners/{id}`.
    pub path: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    pub path_params: Vec<HelpArgument>,
    pub query_params: Vec<HelpArgument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<HelpArgument>,
    pub returns: HelpTypeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub name: String,
    pub description: String,
    /// URI the event fires for, when the name encodes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: HelpTypeRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtendedSchema {
    pub endpoints: Vec<Endpoint>,
    pub events: Vec<EventDefinition>,
    pub types: Vec<HelpType>,
}

impl ExtendedSchema {
    pub fn derive(full: &FullHelp, console: &ConsoleHelp) -> Self {
        let endpoints = full
            .functions
            .iter()
            .filter_map(|function| Endpoint::from_function(function, console))
            .collect();

        let events = full
            .events
            .iter()
            .map(|event| EventDefinition {
                name: event.name.clone(),
                description: non_empty_or(&event.description, || {
                    console.event_description(&event.name)
                }),
                path: event_path(&event.name),
                type_ref: event.type_ref.clone(),
            })
            .collect();

        Self {
            endpoints,
            events,
            types: full.types.clone(),
        }
    }
}

impl Endpoint {
    /// `None` for functions that are not reachable over HTTP.
    fn from_function(function: &HelpFunction, console: &ConsoleHelp) -> Option<Self> {
        let (Some(method), Some(path)) = (&function.http_method, &function.url) else {
            trace!("Skipping non-HTTP function {}", function.name);
            return None;
        };
        let method = method.to_ascii_uppercase();

        let placeholders = path_placeholders(path);
        let (path_params, rest): (Vec<_>, Vec<_>) = function
            .arguments
            .iter()
            .cloned()
            .partition(|argument| placeholders.contains(&argument.name.as_str()));

        let carries_body = method
            .parse::<HttpMethod>()
            .is_ok_and(|method| method.has_body());
        let (body, query_params) = if carries_body {
            split_body(rest)
        } else {
            (None, rest)
        };

        Some(Self {
            name: function.name.clone(),
            description: non_empty_or(&function.description, || {
                console.function_description(&function.name)
            }),
            plugin: function
                .tags
                .iter()
                .find_map(|tag| tag.strip_prefix(PLUGIN_TAG_PREFIX))
                .map(String::from),
            method,
            path: path.clone(),
            path_params,
            query_params,
            body,
            returns: function.returns.clone(),
        })
    }
}

/// Pick the argument sent as the request body: one named `body`, else the
/// first argument that cannot be a query value.
fn split_body(mut arguments: Vec<HelpArgument>) -> (Option<HelpArgument>, Vec<HelpArgument>) {
    let position = arguments
        .iter()
        .position(|argument| argument.name == BODY_ARGUMENT_NAME)
        .or_else(|| {
            arguments
                .iter()
                .position(|argument| !argument.type_ref.is_scalar())
        });

    match position {
        Some(index) => {
            let body = arguments.remove(index);
            (Some(body), arguments)
        }
        None => (None, arguments),
    }
}

/// Names of `{name}` and `{+name}` placeholders in a URL template.
pub fn path_placeholders(path: &str) -> Vec<&str> {
    path.split('{')
        .skip(1)
        .filter_map(|segment| segment.split_once('}'))
        .map(|(name, _)| name.trim_start_matches('+'))
        .collect()
}

/// `OnJsonApiEvent_lol-gameflow_v1_session` fires for `/lol-gameflow/v1/session`.
pub fn event_path(name: &str) -> Option<String> {
    let suffix = name.strip_prefix(JSON_API_EVENT)?.strip_prefix('_')?;
    if suffix.is_empty() {
        return None;
    }
    Some(format!("/{}", suffix.replace('_', "/")))
}

fn non_empty_or<'a>(description: &str, fallback: impl FnOnce() -> Option<&'a str>) -> String {
    if description.is_empty() {
        fallback().unwrap_or_default().to_string()
    } else {
        description.to_string()
    }
}
