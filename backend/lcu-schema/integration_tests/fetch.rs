use lcu_client::LcuClient;
use lcu_schema::{SchemaError, fetch_extended_schema, swagger, typescript};
use models::{LcuCredentialsBuilder, Protocol};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LcuClient {
    let credentials = LcuCredentialsBuilder::default()
        .with_pid(4242)
        .with_port(server.address().port())
        .with_password("test-token")
        .with_protocol(Protocol::Http)
        .build()
        .unwrap();
    LcuClient::new(credentials, Duration::from_secs(5)).unwrap()
}

async fn mount_help(server: &MockServer, format: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/help"))
        .and(query_param("format", format))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// **VALUE**: Verifies both help formats are fetched exactly once and combined.
///
/// **WHY THIS MATTERS**: `/help?format=Full` is several megabytes. Fetching it once per
/// output format would make `schema -r -s -t` three times slower.
///
/// **BUG THIS CATCHES**: Would catch a second fetch (the mocks expect exactly one call) or
/// the raw documents being altered before they are written to disk.
#[tokio::test]
async fn given_lcu_help_when_fetching_schema_then_each_format_fetched_once() {
    // GIVEN: An LCU stub serving both formats
    let server = MockServer::start().await;
    let console = json!({
        "functions": { "GetLolGameflowV1Session": "Current session." },
        "events": {},
        "types": {}
    });
    let full = json!({
        "functions": [{
            "name": "GetLolGameflowV1Session",
            "description": "",
            "http_method": "GET",
            "url": "/lol-gameflow/v1/session",
            "arguments": [],
            "returns": { "type": "LolGameflowSession", "elementType": "" },
            "tags": ["Plugin lol-gameflow"]
        }],
        "events": [{
            "name": "OnJsonApiEvent_lol-gameflow_v1_session",
            "type": { "type": "LolGameflowSession", "elementType": "" }
        }],
        "types": [{
            "name": "LolGameflowSession",
            "fields": [{ "name": "phase", "type": { "type": "string", "elementType": "" } }]
        }]
    });
    mount_help(&server, "Console", console.clone()).await;
    mount_help(&server, "Full", full.clone()).await;
    let client = client_for(&server);

    // WHEN: Fetching and deriving every output
    let schema = fetch_extended_schema(&client).await.unwrap();
    let document = swagger::generate(&schema.extended);
    let declarations = typescript::generate(&schema.extended, &document, Some("LCU")).unwrap();

    // THEN: Raw documents verbatim, derived data consistent
    assert_eq!(schema.console, console);
    assert_eq!(schema.full, full);
    assert_eq!(schema.extended.endpoints.len(), 1);
    assert_eq!(schema.extended.endpoints[0].description, "Current session.");
    assert!(document.paths.contains_key("/lol-gameflow/v1/session"));
    assert!(declarations.events.contains("\"/lol-gameflow/v1/session\": LolGameflowSession;"));
}

#[tokio::test]
async fn given_help_unavailable_when_fetching_schema_then_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/help"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = fetch_extended_schema(&client).await;

    assert!(matches!(result, Err(SchemaError::Client(_))), "Got {result:?}");
}

#[tokio::test]
async fn given_malformed_full_help_when_fetching_schema_then_help_format_error() {
    let server = MockServer::start().await;
    mount_help(&server, "Console", json!({})).await;
    mount_help(&server, "Full", json!({ "functions": 7 })).await;
    let client = client_for(&server);

    let result = fetch_extended_schema(&client).await;

    assert!(matches!(result, Err(SchemaError::HelpFormat { .. })), "Got {result:?}");
}
