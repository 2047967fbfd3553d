use crate::{LcuCredentialsBuilder, ModelError, Protocol};

/// **VALUE**: Verifies that builder validation rejects zero PIDs.
///
/// **WHY THIS MATTERS**: A lockfile with a zeroed pid field means it was truncated
/// mid-write. Accepting it would hand a half-written password to the HTTP client.
///
/// **BUG THIS CATCHES**: Would catch if the pid check is deleted during refactoring.
#[test]
fn given_zero_pid_when_building_credentials_then_returns_validation_error() {
    // GIVEN: Builder with PID set to zero
    let builder = LcuCredentialsBuilder::default()
        .with_pid(0)
        .with_port(3000)
        .with_password("token");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "PID must be non-zero");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_missing_port_when_building_then_returns_validation_error() {
    let builder = LcuCredentialsBuilder::default()
        .with_pid(12)
        .with_password("token");

    let result = builder.build();

    match result {
        Err(ModelError::Validation { message, .. }) => assert_eq!(message, "Port is required"),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_zero_port_when_building_then_returns_validation_error() {
    let builder = LcuCredentialsBuilder::default()
        .with_pid(12)
        .with_port(0)
        .with_password("token");

    let result = builder.build();

    match result {
        Err(ModelError::Validation { message, .. }) => assert_eq!(message, "Port must be non-zero"),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that an empty remoting token is rejected.
///
/// **BUG THIS CATCHES**: Would catch `--remoting-auth-token=` (empty value) slipping
/// through and producing `Basic cmlvdDo=` headers that always 401.
#[test]
fn given_empty_password_when_building_then_returns_validation_error() {
    // GIVEN: Builder with an empty password
    let builder = LcuCredentialsBuilder::default()
        .with_pid(12)
        .with_port(2999)
        .with_password("");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Password cannot be empty");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_missing_password_when_building_then_returns_validation_error() {
    let result = LcuCredentialsBuilder::default()
        .with_pid(12)
        .with_port(2999)
        .build();

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}

/// **VALUE**: Verifies the happy path and the https default.
///
/// **WHY THIS MATTERS**: Process-scan discovery never learns the protocol; it relies on
/// the default being https like the real client.
#[test]
fn given_all_valid_fields_without_protocol_when_building_then_defaults_to_https() {
    // GIVEN: Builder with all required fields
    let builder = LcuCredentialsBuilder::default()
        .with_pid(31337)
        .with_port(2999)
        .with_password("abc");

    // WHEN: Building
    let creds = builder.build().unwrap();

    // THEN: Fields are preserved and protocol defaults to https
    assert_eq!(creds.pid, 31337);
    assert_eq!(creds.port, 2999);
    assert_eq!(creds.password.expose(), "abc");
    assert_eq!(creds.protocol, Protocol::Https);
}
