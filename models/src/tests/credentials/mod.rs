mod builder;

use crate::{LcuCredentialsBuilder, Protocol};

use std::str::FromStr;

fn credentials(protocol: Protocol) -> crate::LcuCredentials {
    LcuCredentialsBuilder::default()
        .with_pid(4242)
        .with_port(54321)
        .with_password("hunter2")
        .with_protocol(protocol)
        .build()
        .unwrap()
}

/// **VALUE**: Verifies the derived URLs the HTTP and websocket clients connect to.
///
/// **BUG THIS CATCHES**: Would catch the websocket URL keeping the `https` scheme,
/// which tungstenite rejects.
#[test]
fn given_https_credentials_when_deriving_urls_then_uses_loopback_and_secure_schemes() {
    let creds = credentials(Protocol::Https);

    assert_eq!(creds.base_url(), "https://127.0.0.1:54321");
    assert_eq!(creds.ws_url(), "wss://127.0.0.1:54321/");
}

#[test]
fn given_http_credentials_when_deriving_urls_then_uses_plain_schemes() {
    let creds = credentials(Protocol::Http);

    assert_eq!(creds.base_url(), "http://127.0.0.1:54321");
    assert_eq!(creds.ws_url(), "ws://127.0.0.1:54321/");
}

/// **VALUE**: The Basic auth header is `riot:<password>` base64-encoded.
///
/// **WHY THIS MATTERS**: The `credentials` command prints this value for use in other
/// tools; an encoding slip makes every pasted request fail with 401.
#[test]
fn given_credentials_when_basic_auth_then_encodes_riot_user() {
    let creds = credentials(Protocol::Https);

    // "riot:hunter2"
    assert_eq!(creds.basic_auth(), "Basic cmlvdDpodW50ZXIy");
}

#[test]
fn given_credentials_when_debug_formatted_then_password_is_redacted() {
    let creds = credentials(Protocol::Https);

    let debug = format!("{creds:?}");

    assert!(!debug.contains("hunter2"));
}

#[test]
fn given_protocol_strings_when_parsed_then_accepts_http_and_https_only() {
    assert_eq!(Protocol::from_str("https").unwrap(), Protocol::Https);
    assert_eq!(Protocol::from_str("HTTP").unwrap(), Protocol::Http);
    assert!(Protocol::from_str("ftp").is_err());
}
