//! The `lockfile` the client writes into its install directory while running.
//!
//! Format: `name:pid:port:password:protocol`, e.g.
//! `LeagueClient:14832:53412:Zk3h...:https`.

use crate::LOCKFILE_NAME;
use crate::error::discovery::DiscoveryError;

use common::ErrorLocation;
use models::{LcuCredentials, LcuCredentialsBuilder, Protocol};

use std::panic::Location;
use std::path::{Path, PathBuf};

const LOCKFILE_FIELD_COUNT: usize = 5;

/// Parse lockfile contents. `path` is only used for error reporting.
#[track_caller]
pub fn parse_lockfile(contents: &str, path: &Path) -> Result<LcuCredentials, DiscoveryError> {
    let lockfile_error = |message: String| DiscoveryError::Lockfile {
        message,
        path: path.to_path_buf(),
        location: ErrorLocation::from(Location::caller()),
    };

    let fields: Vec<&str> = contents.trim().split(':').collect();
    if fields.len() != LOCKFILE_FIELD_COUNT {
        return Err(lockfile_error(format!(
            "Expected {LOCKFILE_FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let pid: u32 = fields[1]
        .parse()
        .map_err(|e| lockfile_error(format!("Invalid pid '{}': {e}", fields[1])))?;
    let port: u16 = fields[2]
        .parse()
        .map_err(|e| lockfile_error(format!("Invalid port '{}': {e}", fields[2])))?;
    let protocol: Protocol = fields[4]
        .parse()
        .map_err(|e| lockfile_error(format!("{e}")))?;

    let credentials = LcuCredentialsBuilder::default()
        .with_pid(pid)
        .with_port(port)
        .with_password(fields[3])
        .with_protocol(protocol)
        .build()?;

    Ok(credentials)
}

#[track_caller]
pub fn read_lockfile(path: &Path) -> Result<LcuCredentials, DiscoveryError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DiscoveryError::Lockfile {
        message: format!("Failed to read lockfile: {e}"),
        path: path.to_path_buf(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    parse_lockfile(&contents, path)
}

/// Where the client installs by default on this platform.
pub fn default_install_directories() -> Vec<PathBuf> {
    let mut directories = Vec::new();

    if cfg!(target_os = "windows") {
        directories.push(PathBuf::from(r"C:\Riot Games\League of Legends"));
    }

    if cfg!(target_os = "macos") {
        directories.push(PathBuf::from(
            "/Applications/League of Legends.app/Contents/LoL",
        ));
    }

    directories
}

/// First existing lockfile among `directories`.
pub fn find_lockfile<'a, I>(directories: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    directories
        .into_iter()
        .map(|dir| dir.join(LOCKFILE_NAME))
        .find(|path| path.is_file())
}
