use crate::request_result::parse_body;
use crate::{ProtocolError, RequestResult, Success, TransportError};

use common::HttpStatusCode;

use serde_json::json;

/// **VALUE**: A success serializes exactly as `{statusCode, body}`.
///
/// **WHY THIS MATTERS**: `request --out` files are consumed by scripts expecting this
/// shape; an enum tag would break them.
///
/// **BUG THIS CATCHES**: Would catch someone removing `#[serde(untagged)]`.
#[test]
fn given_success_when_serialized_then_only_status_code_and_body() {
    // GIVEN: A success result
    let result = RequestResult::Success(Success::new(200u16, r#"{"summonerLevel": 30}"#));

    // WHEN: Serializing
    let value = serde_json::to_value(&result).unwrap();

    // THEN: Exactly statusCode and body
    assert_eq!(
        value,
        json!({ "statusCode": 200, "body": { "summonerLevel": 30 } })
    );
}

/// **VALUE**: LCU error bodies are classified into code, message and details.
#[test]
fn given_lcu_error_body_when_classified_then_keeps_code_message_and_details() {
    // GIVEN: The body the LCU returns for an unknown route
    let body = r#"{
        "errorCode": "RPC_ERROR",
        "httpStatus": 404,
        "implementationDetails": { "reason": "no handler" },
        "message": "Invalid function: 'GET /nope'"
    }"#;

    // WHEN: Classifying
    let error = ProtocolError::from_response(404u16, body);

    // THEN: Fields are lifted from the body
    assert_eq!(error.status_code, HttpStatusCode(404));
    assert_eq!(error.error_code, "RPC_ERROR");
    assert_eq!(error.message, "Invalid function: 'GET /nope'");
    assert_eq!(error.details, Some(json!({ "reason": "no handler" })));
}

#[test]
fn given_empty_error_body_when_classified_then_uses_reason_phrase() {
    let error = ProtocolError::from_response(404u16, "");

    assert_eq!(error.error_code, "HTTP_ERROR");
    assert_eq!(error.message, "Not Found");
    assert_eq!(error.details, None);
}

#[test]
fn given_plain_text_error_body_when_classified_then_message_is_text() {
    let error = ProtocolError::from_response(500u16, "  boom  ");

    assert_eq!(error.error_code, "HTTP_ERROR");
    assert_eq!(error.message, "boom");
}

/// **VALUE**: Protocol errors never serialize a `body` field.
#[test]
fn given_protocol_error_without_details_when_serialized_then_omits_details_and_body() {
    let result = RequestResult::ProtocolError(ProtocolError::from_response(404u16, ""));

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({ "statusCode": 404, "errorCode": "HTTP_ERROR", "message": "Not Found" })
    );
}

#[test]
fn given_transport_error_without_fields_when_defaults_then_generic_text() {
    let error = TransportError::default();

    assert_eq!(error.error_code_or_default(), "UNKNOWN");
    assert_eq!(error.message_or_default(), "Unknown error");
    assert_eq!(serde_json::to_value(&error).unwrap(), json!({}));
}

#[test]
fn given_bodies_when_parsed_then_json_text_or_null() {
    assert_eq!(parse_body(""), json!(null));
    assert_eq!(parse_body("[1,2]"), json!([1, 2]));
    assert_eq!(parse_body("not json"), json!("not json"));
}

/// **VALUE**: Empty-bodied errors get the registered reason phrase for any status.
///
/// **BUG THIS CATCHES**: Would catch a 422 from a rejected payload printing "HTTP 422".
#[test]
fn given_empty_unprocessable_response_when_classified_then_reason_phrase_message() {
    // GIVEN/WHEN: Status codes outside the everyday 4xx set with no body
    let unprocessable = ProtocolError::from_response(422u16, "");
    let timeout = ProtocolError::from_response(408u16, "  ");

    // THEN: The message is the reason phrase
    assert_eq!(unprocessable.message, "Unprocessable Entity");
    assert_eq!(timeout.message, "Request Timeout");
    assert_eq!(unprocessable.status_code, HttpStatusCode(422));
}
