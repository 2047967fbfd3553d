use crate::HttpStatusCode;

#[test]
fn given_2xx_codes_when_classified_then_success() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(304).is_success());
    assert!(!HttpStatusCode(404).is_success());
}

/// **VALUE**: Protocol errors without an LCU error body fall back to the reason phrase.
///
/// **BUG THIS CATCHES**: Would catch a 404 being reported with an empty message.
#[test]
fn given_not_found_when_canonical_reason_then_returns_not_found() {
    assert_eq!(HttpStatusCode(404).canonical_reason(), Some("Not Found"));
    assert_eq!(HttpStatusCode(599).canonical_reason(), None);
}

/// **VALUE**: Every registered status code has its reason phrase, not just common ones.
///
/// **BUG THIS CATCHES**: Would catch a partial lookup table reporting "HTTP 422" for a
/// rejected lobby payload.
#[test]
fn given_less_common_codes_when_canonical_reason_then_registered_phrase() {
    assert_eq!(HttpStatusCode(408).canonical_reason(), Some("Request Timeout"));
    assert_eq!(HttpStatusCode(422).canonical_reason(), Some("Unprocessable Entity"));
    assert_eq!(HttpStatusCode(0).canonical_reason(), None);
}

#[test]
fn given_status_code_when_serialized_then_is_bare_number() {
    let json = serde_json::to_string(&HttpStatusCode(418)).unwrap();
    assert_eq!(json, "418");
}
