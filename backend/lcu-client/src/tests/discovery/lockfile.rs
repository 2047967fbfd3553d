use crate::discovery::lockfile::{find_lockfile, parse_lockfile};
use crate::error::discovery::DiscoveryError;

use models::Protocol;

use std::path::{Path, PathBuf};

/// **VALUE**: Verifies parsing of the lockfile the client writes while running.
///
/// **BUG THIS CATCHES**: Would catch field order mistakes (port and pid are both
/// numbers, so swapping them still "parses").
#[test]
fn given_valid_lockfile_when_parsed_then_returns_credentials() {
    // GIVEN: A lockfile line with a trailing newline
    let contents = "LeagueClient:14832:53412:Zk3hQ9x:https\n";

    // WHEN: Parsing
    let credentials = parse_lockfile(contents, Path::new("lockfile")).unwrap();

    // THEN: Fields land in the right places
    assert_eq!(credentials.pid, 14832);
    assert_eq!(credentials.port, 53412);
    assert_eq!(credentials.password.expose(), "Zk3hQ9x");
    assert_eq!(credentials.protocol, Protocol::Https);
}

#[test]
fn given_http_lockfile_when_parsed_then_protocol_is_http() {
    let credentials = parse_lockfile("Test:1:8080:pw:http", Path::new("lockfile")).unwrap();

    assert_eq!(credentials.protocol, Protocol::Http);
    assert_eq!(credentials.base_url(), "http://127.0.0.1:8080");
}

/// **VALUE**: A half-written lockfile is reported, not silently accepted.
///
/// **WHY THIS MATTERS**: The client writes the lockfile while starting. Reading it
/// mid-write must produce an error that the readiness loop retries.
#[test]
fn given_truncated_lockfile_when_parsed_then_returns_lockfile_error() {
    // GIVEN: A truncated lockfile
    let contents = "LeagueClient:14832:534";

    // WHEN: Parsing
    let result = parse_lockfile(contents, Path::new("/tmp/lockfile"));

    // THEN: A lockfile error naming the path
    match result {
        Err(DiscoveryError::Lockfile { path, message, .. }) => {
            assert_eq!(path, PathBuf::from("/tmp/lockfile"));
            assert!(message.contains("Expected 5 fields"));
        }
        other => panic!("Expected lockfile error, got {other:?}"),
    }
}

#[test]
fn given_non_numeric_port_when_parsed_then_returns_lockfile_error() {
    let result = parse_lockfile("LeagueClient:1:abc:pw:https", Path::new("lockfile"));

    assert!(matches!(result, Err(DiscoveryError::Lockfile { .. })));
}

#[test]
fn given_unknown_protocol_when_parsed_then_returns_lockfile_error() {
    let result = parse_lockfile("LeagueClient:1:2:pw:gopher", Path::new("lockfile"));

    assert!(matches!(result, Err(DiscoveryError::Lockfile { .. })));
}

#[test]
fn given_empty_password_when_parsed_then_returns_validation_error() {
    let result = parse_lockfile("LeagueClient:1:2::https", Path::new("lockfile"));

    assert!(matches!(result, Err(DiscoveryError::Validation { .. })));
}

#[test]
fn given_directories_when_finding_lockfile_then_returns_first_existing() {
    let missing = tempfile::tempdir().unwrap();
    let present = tempfile::tempdir().unwrap();
    std::fs::write(present.path().join("lockfile"), "x:1:2:pw:https").unwrap();

    let directories = vec![missing.path().to_path_buf(), present.path().to_path_buf()];
    let found = find_lockfile(&directories);

    assert_eq!(found, Some(present.path().join("lockfile")));
}
