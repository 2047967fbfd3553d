use crate::helpers::{fast_retry_config, lockfile_contents, write_lockfile};

use lcu_client::config::ClientConfig;
use lcu_client::discovery::{discover, lockfile::read_lockfile, process::find_listening_port};
use lcu_client::error::discovery::DiscoveryError;
use models::Protocol;

use tempfile::tempdir;

// ----------------------------------------------------------------------------
// discover() with a configured lockfile
// ----------------------------------------------------------------------------

/// **VALUE**: A configured lockfile is the only source consulted.
///
/// **WHY THIS MATTERS**: The `lockfile` setting exists for installs discovery cannot find
/// and for local test servers. It must win over any process scan.
#[test]
fn given_configured_lockfile_when_discover_then_returns_its_credentials() {
    // GIVEN: A lockfile on disk
    let dir = tempdir().unwrap();
    let config = fast_retry_config(write_lockfile(dir.path(), 61234));

    // WHEN: Discovering
    let credentials = discover(&config).unwrap().expect("credentials");

    // THEN: Exactly what the lockfile says
    assert_eq!(credentials.pid, 4242);
    assert_eq!(credentials.port, 61234);
    assert_eq!(credentials.password.expose(), "test-token");
    assert_eq!(credentials.protocol, Protocol::Http);
}

/// **VALUE**: A configured lockfile that does not exist yet means "not running".
///
/// **BUG THIS CATCHES**: Would catch discovery returning an error here, which would make
/// `connect` stop waiting for a client that has not started yet.
#[test]
fn given_configured_lockfile_missing_when_discover_then_returns_none() {
    let dir = tempdir().unwrap();
    let config = fast_retry_config(dir.path().join("lockfile"));

    let result = discover(&config);

    assert!(matches!(result, Ok(None)), "Got {result:?}");
}

#[test]
fn given_corrupt_configured_lockfile_when_discover_then_returns_lockfile_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lockfile");
    std::fs::write(&path, "LeagueClient:4242").unwrap();
    let config = fast_retry_config(path);

    let result = discover(&config);

    assert!(matches!(result, Err(DiscoveryError::Lockfile { .. })), "Got {result:?}");
}

// ----------------------------------------------------------------------------
// Process and lockfile scanning
// ----------------------------------------------------------------------------

/// **VALUE**: Scanning a machine without a League client does not fail.
///
/// **WHY THIS MATTERS**: This is every CI machine and every start before the client
/// launches. Discovery must answer "not running", not error out.
#[test]
fn given_no_client_configured_when_discover_then_returns_ok() {
    // GIVEN: Default config, no League client in the test environment
    let config = ClientConfig::default();

    // WHEN: Discovering
    let result = discover(&config);

    // THEN: Ok, whatever the machine has running
    assert!(result.is_ok(), "Discovery should not error: {result:?}");
}

#[test]
fn given_nonexistent_pid_when_find_listening_port_then_returns_none() {
    let result = find_listening_port(u32::MAX);

    // Socket enumeration can be unavailable in sandboxes; absence of a port is what matters.
    if let Ok(port) = result {
        assert_eq!(port, None);
    }
}

#[test]
fn given_lockfile_with_trailing_newline_when_read_then_parses() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lockfile");
    std::fs::write(&path, format!("{}\n", lockfile_contents(2999))).unwrap();

    let credentials = read_lockfile(&path).unwrap();

    assert_eq!(credentials.port, 2999);
}
