use crate::commands::credentials::CredentialsOutput;

use common::to_pretty_json;
use models::LcuCredentialsBuilder;

/// **VALUE**: Verifies the exact JSON other tools read from `hasagi credentials`.
///
/// **BUG THIS CATCHES**: Would catch field renames (e.g. `base_url`) or the Basic token
/// being built from the wrong user name.
#[test]
fn given_credentials_when_rendered_then_base_url_and_basic_auth() {
    // GIVEN: Known credentials
    let credentials = LcuCredentialsBuilder::default()
        .with_pid(1234)
        .with_port(54321)
        .with_password("hunter2")
        .build()
        .unwrap();

    // WHEN: Rendering the output
    let json = to_pretty_json(&CredentialsOutput::from(&credentials)).unwrap();

    // THEN: camelCase keys, https URL, riot:<password> token
    assert_eq!(
        json,
        "{\n    \"baseUrl\": \"https://127.0.0.1:54321\",\n    \"authorization\": \"Basic cmlvdDpodW50ZXIy\"\n}"
    );
}
