//! Locating a running League client and its credentials.
//!
//! Sources, in order:
//! 1. The lockfile named in the config (no process scan at all)
//! 2. The `LeagueClientUx` command line (`--app-port`, `--remoting-auth-token`),
//!    falling back to netstat for the port and to the lockfile next to the
//!    process for the token
//! 3. A lockfile in the configured or default install directory
//!
//! Everything here blocks; async callers should use `spawn_blocking`.

pub mod lockfile;
pub mod process;

use crate::config::ClientConfig;
use crate::error::discovery::DiscoveryError;

use models::{LcuCredentials, LcuCredentialsBuilder};

use std::path::PathBuf;

use log::{debug, trace};

/// Discover credentials for a running client.
///
/// # Returns
///
/// * `Ok(Some(LcuCredentials))` - A client was found
/// * `Ok(None)` - No client is running (yet)
/// * `Err(DiscoveryError)` - A source existed but could not be read
#[track_caller]
pub fn discover(config: &ClientConfig) -> Result<Option<LcuCredentials>, DiscoveryError> {
    debug!("Starting client discovery");

    if let Some(ref path) = config.lockfile {
        if !path.is_file() {
            debug!("Configured lockfile {} does not exist yet", path.display());
            return Ok(None);
        }

        debug!("Reading configured lockfile {}", path.display());
        return lockfile::read_lockfile(path).map(Some);
    }

    if let Some(client) = process::find_client_process() {
        return discover_from_process(&client);
    }

    trace!("No client process found, checking install directories");

    let directories: Vec<PathBuf> = config
        .install_directory
        .iter()
        .cloned()
        .chain(lockfile::default_install_directories())
        .collect();

    match lockfile::find_lockfile(&directories) {
        Some(path) => {
            let credentials = lockfile::read_lockfile(&path)?;

            // A lockfile without a live owner is left over from a crash.
            if process::with_process(credentials.pid, |_| ()).is_none() {
                debug!(
                    "Ignoring stale lockfile {} (PID {} not running)",
                    path.display(),
                    credentials.pid
                );
                return Ok(None);
            }

            Ok(Some(credentials))
        }
        None => {
            debug!("No League client found");
            Ok(None)
        }
    }
}

#[track_caller]
fn discover_from_process(
    client: &process::ClientProcess,
) -> Result<Option<LcuCredentials>, DiscoveryError> {
    if let Some(ref token) = client.args.token {
        let port = match client.args.port {
            Some(port) => Some(port),
            None => process::find_listening_port(client.pid)?,
        };

        if let Some(port) = port {
            debug!("Using credentials from command line of PID {}", client.pid);

            let credentials = LcuCredentialsBuilder::default()
                .with_pid(client.pid)
                .with_port(port)
                .with_password(token.as_str())
                .build()?;

            return Ok(Some(credentials));
        }
    }

    match lockfile::find_lockfile(&client.lockfile_directories()) {
        Some(path) => {
            debug!(
                "Command line of PID {} unreadable, using {}",
                client.pid,
                path.display()
            );
            lockfile::read_lockfile(&path).map(Some)
        }
        None => {
            debug!(
                "Client process {} found but its credentials are not readable yet",
                client.pid
            );
            Ok(None)
        }
    }
}
