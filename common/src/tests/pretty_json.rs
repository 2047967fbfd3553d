use crate::to_pretty_json;

use serde_json::json;

/// **VALUE**: Every JSON file the CLI writes uses a four-space indent.
///
/// **BUG THIS CATCHES**: Would catch a switch back to `serde_json::to_string_pretty`,
/// which indents with two spaces.
#[test]
fn given_nested_value_when_rendered_then_indents_with_four_spaces() {
    // GIVEN: A nested value
    let value = json!({ "statusCode": 200, "body": { "ok": true } });

    // WHEN: Rendering
    let rendered = to_pretty_json(&value).unwrap();

    // THEN: Nested keys are indented by four and eight spaces
    assert!(rendered.contains("\n    \"body\": {"));
    assert!(rendered.contains("\n        \"ok\": true"));
    assert!(!rendered.ends_with('\n'), "Callers decide on trailing newlines");
}

#[test]
fn given_scalar_when_rendered_then_matches_compact_form() {
    assert_eq!(to_pretty_json(&json!(null)).unwrap(), "null");
    assert_eq!(to_pretty_json(&json!("text")).unwrap(), "\"text\"");
}
