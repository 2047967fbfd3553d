// Unit tests for logger module initialization logic
// Tests focus on level selection and error handling

use crate::error::HasagiError;
use crate::logger::{build_dispatch, initialize, raise_level};

use std::path::PathBuf;

use log::LevelFilter;
use tempfile::tempdir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Tests and the binary may both initialize logging. If a second
/// call errors, `run` fails for reasons unrelated to the command.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // WHEN: Calling initialize twice
    let result1 = initialize(LevelFilter::Warn, None);
    let result2 = initialize(LevelFilter::Debug, None);

    // THEN: Both should return Ok (second one logs warning but doesn't error)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(result2.is_ok(), "Second initialization should succeed (idempotent)");
}

/// **VALUE**: A log file that cannot be created is a clear error, not a panic.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` is unwrapped.
#[test]
fn given_unwritable_log_file_when_building_dispatch_then_returns_logger_error() {
    // GIVEN: A path below a regular file
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, "").unwrap();
    let log_file = blocker.join("hasagi.log");

    // WHEN: Building the dispatch
    let result = build_dispatch(LevelFilter::Info, Some(&log_file));

    // THEN: A Logger error
    assert!(matches!(result, Err(HasagiError::Logger { .. })));
}

#[test]
fn given_writable_log_file_when_building_dispatch_then_file_created() {
    let dir = tempdir().unwrap();
    let log_file: PathBuf = dir.path().join("hasagi.log");

    let result = build_dispatch(LevelFilter::Info, Some(&log_file));

    assert!(result.is_ok());
    assert!(log_file.exists());
}

/// **VALUE**: Each `-v` raises the configured level by one step, capped at trace.
#[test]
fn given_verbosity_when_raising_level_then_steps_up_from_configured() {
    assert_eq!(raise_level(LevelFilter::Warn, 0), LevelFilter::Warn);
    assert_eq!(raise_level(LevelFilter::Warn, 1), LevelFilter::Info);
    assert_eq!(raise_level(LevelFilter::Warn, 2), LevelFilter::Debug);
    assert_eq!(raise_level(LevelFilter::Warn, 9), LevelFilter::Trace);
    assert_eq!(raise_level(LevelFilter::Off, 1), LevelFilter::Error);
    assert_eq!(raise_level(LevelFilter::Debug, 1), LevelFilter::Trace);
}
