//! Logging for the `hasagi` binary.
//!
//! Colored output goes to stderr so stdout only ever carries command output.
//! A plain-text copy can additionally be written to a file.

use crate::error::HasagiError;

use common::ErrorLocation;

use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, debug, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

/// Set once a logger has actually been installed.
static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Raise `configured` by one level per `-v`, capped at trace.
pub fn raise_level(configured: LevelFilter, verbose: u8) -> LevelFilter {
    let current = LEVELS
        .iter()
        .position(|level| *level == configured)
        .unwrap_or(2);
    let raised = (current + usize::from(verbose)).min(LEVELS.len() - 1);
    LEVELS[raised]
}

pub fn is_initialized() -> bool {
    LOGGER_INITIALIZED.load(Ordering::SeqCst)
}

/// Initialize the global logger.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns [`HasagiError::Logger`] if the log file cannot be opened or a
/// logger was already installed by someone else.
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<(), HasagiError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(level, log_file).and_then(apply);
        if result.is_ok() {
            LOGGER_INITIALIZED.store(true, Ordering::SeqCst);
            debug!("Logger initialized with level: {level:?}");
        }
    });

    result
}

#[track_caller]
fn apply(dispatch: Dispatch) -> Result<(), HasagiError> {
    dispatch.apply().map_err(|e| HasagiError::Logger {
        message: format!("Failed to initialize logger: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Build the stderr dispatch, plus a file dispatch when `log_file` is set.
#[track_caller]
pub fn build_dispatch(level: LevelFilter, log_file: Option<&Path>) -> Result<Dispatch, HasagiError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let mut dispatch = Dispatch::new().level(level).chain(stderr_dispatch);

    if let Some(path) = log_file {
        let file = fern::log_file(path).map_err(|e| HasagiError::Logger {
            message: format!("Failed to open log file {}: {e}", path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // File dispatch (plain text, no colors)
        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(file);

        dispatch = dispatch.chain(file_dispatch);
    }

    Ok(dispatch)
}
