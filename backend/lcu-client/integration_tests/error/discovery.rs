use common::ErrorLocation;
use lcu_client::error::discovery::DiscoveryError;
use models::LcuCredentialsBuilder;

use std::error::Error;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Verifies that `DiscoveryError::NetworkQuery` includes location tracking.
///
/// **WHY THIS MATTERS**: Socket enumeration fails differently on every platform. Knowing
/// exactly where the error was raised is the only way to tell which call failed.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `location` field or breaks the
/// Display implementation so it no longer includes it.
#[test]
#[track_caller]
fn given_network_query_error_when_formatted_then_includes_location() {
    // GIVEN: A NetworkQuery error with location
    let io_err = IoError::new(ErrorKind::PermissionDenied, "permission denied");
    let err = DiscoveryError::NetworkQuery {
        message: String::from("Failed to query sockets"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(io_err),
    };

    // WHEN: Formatting the error as string
    let error_string = err.to_string();

    // THEN: Should include error type, message, and file location
    assert!(error_string.contains("Network Query Error"));
    assert!(error_string.contains("Failed to query sockets"));
    assert!(error_string.contains("discovery.rs"));
}

/// **VALUE**: Lockfile errors name the file they came from.
///
/// **WHY THIS MATTERS**: Users with several installs need to know which lockfile is bad.
#[test]
fn given_lockfile_error_when_formatted_then_includes_path() {
    // GIVEN: A Lockfile error
    let err = DiscoveryError::Lockfile {
        message: String::from("Expected 5 fields, found 2"),
        path: PathBuf::from("/games/League of Legends/lockfile"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let error_string = err.to_string();

    // THEN: Path and message are both present
    assert!(error_string.contains("Lockfile Error"));
    assert!(error_string.contains("/games/League of Legends/lockfile"));
    assert!(error_string.contains("Expected 5 fields, found 2"));
}

/// **VALUE**: Invalid credentials surface as validation errors with the model's reason.
#[test]
fn given_model_error_when_converted_then_becomes_validation_error() {
    // GIVEN: Credentials without a password
    let model_error = LcuCredentialsBuilder::default()
        .with_pid(1)
        .with_port(2999)
        .build()
        .unwrap_err();

    // WHEN: Converting
    let err = DiscoveryError::from(model_error);

    // THEN: The original reason survives
    assert!(matches!(err, DiscoveryError::Validation { .. }));
    assert!(err.to_string().contains("Password is required"));
}

/// **VALUE**: Verifies that error source chains are preserved for debugging.
///
/// **BUG THIS CATCHES**: Would catch someone removing the `#[source]` attribute, which
/// loses the OS error behind a failed socket query.
#[test]
fn given_network_query_error_with_source_when_inspected_then_preserves_chain() {
    // GIVEN: A NetworkQuery error with an underlying IO error
    let io_err = IoError::new(ErrorKind::PermissionDenied, "access denied");
    let err = DiscoveryError::NetworkQuery {
        message: String::from("Socket query failed"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(io_err),
    };

    // WHEN: Accessing the error source
    let source = err.source();

    // THEN: Should preserve the source chain with original error message
    let source = source.expect("Should have error source");
    assert!(source.to_string().contains("access denied"));
}
