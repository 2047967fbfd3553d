// Unit tests for process module private functions
// Integration tests for public API are in integration_tests/discovery/process.rs

use crate::discovery::process::{is_client_process, parse_client_args, with_process};

use std::path::PathBuf;

/// **VALUE**: Verifies credential extraction from a real-looking client command line.
///
/// **WHY THIS MATTERS**: This is the primary discovery path on Windows. If parsing
/// breaks, every command waits forever for a client that is already running.
///
/// **BUG THIS CATCHES**: Would catch the regex anchoring changing so that
/// `--riotclient-app-port` is mistaken for `--app-port`.
#[test]
fn given_client_command_line_when_parsed_then_extracts_port_token_and_install_dir() {
    // GIVEN: Arguments as sysinfo reports them for LeagueClientUx.exe
    let args = [
        r"C:\Riot Games\League of Legends\LeagueClientUx.exe",
        "--riotclient-auth-token=aaaa",
        "--riotclient-app-port=61000",
        "--remoting-auth-token=Zk3hQ_9x-tok",
        "--app-port=53412",
        r#"--install-directory="C:\Riot Games\League of Legends""#,
        "--app-name=LeagueClient",
    ];

    // WHEN: Parsing
    let parsed = parse_client_args(args);

    // THEN: Only the LCU values are picked up, quotes stripped
    assert_eq!(parsed.port, Some(53412));
    assert_eq!(parsed.token.as_deref(), Some("Zk3hQ_9x-tok"));
    assert_eq!(
        parsed.install_directory,
        Some(PathBuf::from(r"C:\Riot Games\League of Legends"))
    );
}

/// **VALUE**: Missing or malformed values yield `None` instead of garbage.
///
/// **WHY THIS MATTERS**: On macOS the command line of other users' processes can be
/// empty; discovery must then fall back to netstat and the lockfile.
#[test]
fn given_incomplete_command_line_when_parsed_then_fields_are_none() {
    let parsed = parse_client_args(["LeagueClientUx", "--app-port=notaport", "--remoting-auth-token="]);

    assert_eq!(parsed.port, None);
    assert_eq!(parsed.token, None);
    assert_eq!(parsed.install_directory, None);
}

#[test]
fn given_empty_command_line_when_parsed_then_default() {
    let parsed = parse_client_args(Vec::<String>::new());

    assert_eq!(parsed, Default::default());
}

#[test]
fn given_process_names_when_checked_then_only_client_ux_matches() {
    assert!(is_client_process("LeagueClientUx"));
    assert!(is_client_process("LeagueClientUx.exe"));
    assert!(is_client_process("leagueclientux.EXE"));
    assert!(!is_client_process("LeagueClientUxRender.exe"));
    assert!(!is_client_process("LeagueClient.exe"));
}

/// **VALUE**: Tests that `with_process()` gracefully handles non-existent PIDs.
///
/// **WHY THIS MATTERS**: Stale-lockfile detection relies on this returning `None`
/// instead of panicking when the recorded PID is gone.
#[test]
fn given_nonexistent_pid_when_with_process_called_then_returns_none() {
    // GIVEN: A PID that doesn't exist
    let fake_pid = u32::MAX;

    // WHEN: Calling with_process with the invalid PID
    let result = with_process(fake_pid, |_| true);

    // THEN: Should return None (graceful handling)
    assert!(
        result.is_none(),
        "Should return None for non-existent process"
    );
}

#[test]
fn given_valid_pid_when_with_process_called_then_executes_closure() {
    let our_pid = std::process::id();

    let result = with_process(our_pid, |p| p.pid().as_u32());

    assert_eq!(result, Some(our_pid));
}

/// **VALUE**: The lightweight process refresh still loads command lines and executables.
///
/// **WHY THIS MATTERS**: Discovery reads `--app-port` and `--remoting-auth-token` from the
/// client's command line. A refresh that skips it finds the process but no credentials.
///
/// **BUG THIS CATCHES**: Would catch the refresh kind dropping `cmd` or `exe` when only
/// process data is scanned instead of every subsystem.
#[test]
fn given_own_process_when_scanned_then_command_line_and_exe_loaded() {
    // GIVEN: This test binary, which always has argv[0]
    let our_pid = std::process::id();

    // WHEN: Looking it up
    let loaded = with_process(our_pid, |p| (p.cmd().len(), p.exe().is_some()));

    // THEN: Both were refreshed
    let (args, has_exe) = loaded.expect("own process is visible");
    assert!(args >= 1);
    assert!(has_exe);
}
