use crate::error::discovery::DiscoveryError;
use crate::{LCU_PROCESS_EXE_NAME, LCU_PROCESS_NAME};

use common::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::OnceLock;

use log::{debug, trace};
use netstat2::{
    AddressFamilyFlags, ProtocolFlags, ProtocolSocketInfo, SocketInfo, TcpState, get_sockets_info,
};
use regex::Regex;
use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

const CLIENT_ARG_PATTERN: &str = r"^--(?P<key>[a-z][a-z0-9-]*)=(?P<value>.*)$";
const ARG_CAPTURE_KEY: &str = "key";
const ARG_CAPTURE_VALUE: &str = "value";
const APP_PORT_ARG: &str = "app-port";
const AUTH_TOKEN_ARG: &str = "remoting-auth-token";
const INSTALL_DIRECTORY_ARG: &str = "install-directory";

static CLIENT_ARG_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_client_arg_regex() -> &'static Regex {
    CLIENT_ARG_REGEX.get_or_init(|| Regex::new(CLIENT_ARG_PATTERN).expect("valid regex pattern"))
}

/// Connection details the client UX process was launched with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientArgs {
    pub port: Option<u16>,
    pub token: Option<String>,
    pub install_directory: Option<PathBuf>,
}

/// A running `LeagueClientUx` process.
#[derive(Debug, Clone)]
pub struct ClientProcess {
    pub pid: u32,
    pub args: ClientArgs,
    pub exe_directory: Option<PathBuf>,
}

impl ClientProcess {
    /// Directories that may hold the lockfile, most specific first.
    pub fn lockfile_directories(&self) -> Vec<PathBuf> {
        self.args
            .install_directory
            .iter()
            .chain(self.exe_directory.iter())
            .cloned()
            .collect()
    }
}

pub(crate) fn is_client_process(name: &str) -> bool {
    name == LCU_PROCESS_NAME || name.eq_ignore_ascii_case(LCU_PROCESS_EXE_NAME)
}

/// Pull `--app-port`, `--remoting-auth-token` and `--install-directory` out of
/// a command line. Quotes around values are stripped; unknown flags ignored.
pub(crate) fn parse_client_args<I, S>(args: I) -> ClientArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let regex = get_client_arg_regex();

    let values: HashMap<String, String> = args
        .into_iter()
        .filter_map(|arg| {
            let captures = regex.captures(arg.as_ref().trim())?;
            let key = captures.name(ARG_CAPTURE_KEY)?.as_str().to_string();
            let value = captures
                .name(ARG_CAPTURE_VALUE)?
                .as_str()
                .trim_matches('"')
                .to_string();
            Some((key, value))
        })
        .collect();

    ClientArgs {
        port: values.get(APP_PORT_ARG).and_then(|p| p.parse().ok()),
        token: values
            .get(AUTH_TOKEN_ARG)
            .filter(|t| !t.is_empty())
            .cloned(),
        install_directory: values
            .get(INSTALL_DIRECTORY_ARG)
            .filter(|d| !d.is_empty())
            .map(PathBuf::from),
    }
}

fn command_args(process: &Process) -> Vec<String> {
    process
        .cmd()
        .iter()
        .map(|s| s.to_string_lossy().to_string())
        .collect()
}

/// Load `processes` with just the command line and executable path.
fn scan_processes(processes: ProcessesToUpdate<'_>) -> System {
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        processes,
        true,
        ProcessRefreshKind::nothing()
            .with_cmd(UpdateKind::OnlyIfNotSet)
            .with_exe(UpdateKind::OnlyIfNotSet),
    );
    sys
}

/// Scan the process table for the client UX process.
pub fn find_client_process() -> Option<ClientProcess> {
    let sys = scan_processes(ProcessesToUpdate::All);

    trace!("Scanning {} processes", sys.processes().len());

    sys.processes().iter().find_map(|(pid, p)| {
        let name = p.name().to_string_lossy();
        if !is_client_process(&name) {
            return None;
        }

        debug!("Found {name} (PID: {pid})");

        Some(ClientProcess {
            pid: pid.as_u32(),
            args: parse_client_args(command_args(p)),
            exe_directory: p.exe().and_then(|exe| exe.parent()).map(PathBuf::from),
        })
    })
}

#[track_caller]
pub(crate) fn with_process<F, R>(pid: u32, f: F) -> Option<R>
where
    F: FnOnce(&Process) -> R,
{
    let pid = Pid::from_u32(pid);
    let sys = scan_processes(ProcessesToUpdate::Some(&[pid]));

    sys.process(pid).map(f)
}

#[track_caller]
fn query_tcp_sockets() -> Result<Vec<SocketInfo>, DiscoveryError> {
    get_sockets_info(
        AddressFamilyFlags::IPV4 | AddressFamilyFlags::IPV6,
        ProtocolFlags::TCP,
    )
    .map_err(|e| DiscoveryError::NetworkQuery {
        message: format!("Failed to query network sockets: {e}"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(e),
    })
}

/// Lowest TCP port `pid` is listening on.
///
/// The UX process also listens on a riotclient port; the LCU API port is the
/// one passed as `--app-port`, so this is only a fallback when that argument
/// could not be read.
#[track_caller]
pub fn find_listening_port(pid: u32) -> Result<Option<u16>, DiscoveryError> {
    let sockets = query_tcp_sockets()?;

    let port = sockets
        .into_iter()
        .filter_map(|s| match s.protocol_socket_info {
            ProtocolSocketInfo::Tcp(tcp)
                if tcp.state == TcpState::Listen && s.associated_pids.contains(&pid) =>
            {
                Some(tcp.local_port)
            }
            _ => None,
        })
        .min();

    if port.is_none() {
        debug!("Process {pid} is not listening on any TCP port");
    }

    Ok(port)
}
