use crate::commands::request::{parse_json_option, parse_query_option, render};
use crate::error::HasagiError;

use models::{ProtocolError, RequestResult, Success, TransportError};

use common::HttpStatusCode;

use serde_json::json;

#[test]
fn given_no_option_when_parsing_json_then_none() {
    assert_eq!(parse_json_option("--body", None).unwrap(), None);
}

#[test]
fn given_valid_json_when_parsing_body_then_value() {
    let body = parse_json_option("--body", Some(r#"[1, "two"]"#)).unwrap();

    assert_eq!(body, Some(json!([1, "two"])));
}

/// **VALUE**: Invalid JSON is a usage error naming the flag.
///
/// **WHY THIS MATTERS**: This check runs before waiting for the client; without it a typo
/// only surfaces after the League client starts, as an opaque transport error.
#[test]
fn given_invalid_json_when_parsing_body_then_usage_error_names_flag() {
    // WHEN: Parsing a truncated object
    let result = parse_json_option("--body", Some("{\"queueId\": "));

    // THEN: A usage error mentioning --body
    match result {
        Err(e @ HasagiError::Usage { .. }) => assert!(e.to_string().contains("--body")),
        other => panic!("Expected usage error, got {other:?}"),
    }
}

#[test]
fn given_non_object_query_when_parsing_then_usage_error() {
    let result = parse_query_option(Some("[1, 2]"));

    assert!(matches!(result, Err(HasagiError::Usage { .. })));
}

#[test]
fn given_object_query_when_parsing_then_accepted() {
    let query = parse_query_option(Some(r#"{"force": true}"#)).unwrap();

    assert_eq!(query, Some(json!({ "force": true })));
}

#[test]
fn given_success_when_rendered_then_status_and_pretty_body() {
    let result = RequestResult::Success(Success::new(200u16, r#"{"summonerLevel":412}"#));

    let text = render(&result).unwrap();

    assert_eq!(text, "Status: 200\n{\n    \"summonerLevel\": 412\n}");
}

/// **VALUE**: Protocol errors show status, code and message, and never a body.
///
/// **BUG THIS CATCHES**: Would catch the renderer falling back to printing the raw result
/// (with its JSON field names) for errors.
#[test]
fn given_protocol_error_when_rendered_then_status_and_message_without_body() {
    // GIVEN: A 404 from the LCU
    let result = RequestResult::ProtocolError(ProtocolError {
        status_code: HttpStatusCode(404),
        error_code: String::from("RPC_ERROR"),
        message: String::from("Not Found"),
        details: None,
    });

    // WHEN: Rendering
    let text = render(&result).unwrap();

    // THEN: Status and message, no body
    assert!(text.contains("404"));
    assert!(text.contains("Not Found"));
    assert!(text.contains("RPC_ERROR"));
    assert!(!text.to_lowercase().contains("body"));
    assert!(!text.contains("Details"));
}

#[test]
fn given_protocol_error_with_details_when_rendered_then_details_shown() {
    let result = RequestResult::ProtocolError(ProtocolError {
        status_code: HttpStatusCode(400),
        error_code: String::from("RPC_ERROR"),
        message: String::from("Invalid queue"),
        details: Some(json!({ "queueId": 9999 })),
    });

    let text = render(&result).unwrap();

    assert!(text.ends_with("Details: {\n    \"queueId\": 9999\n}"));
}

#[test]
fn given_transport_error_without_fields_when_rendered_then_defaults_used() {
    let result = RequestResult::TransportError(TransportError::default());

    let text = render(&result).unwrap();

    assert_eq!(text, "Error: UNKNOWN\nMessage: Unknown error");
}
