//! Shared fixtures for lcu-client integration tests.

use lcu_client::LcuClient;
use lcu_client::config::ClientConfig;
use models::{LcuCredentials, LcuCredentialsBuilder, Protocol};

use std::path::{Path, PathBuf};
use std::time::Duration;

use wiremock::MockServer;

pub const TEST_PASSWORD: &str = "test-token";

/// `Basic base64("riot:test-token")`
pub const TEST_AUTHORIZATION: &str = "Basic cmlvdDp0ZXN0LXRva2Vu";

pub fn http_credentials(port: u16) -> LcuCredentials {
    LcuCredentialsBuilder::default()
        .with_pid(4242)
        .with_port(port)
        .with_password(TEST_PASSWORD)
        .with_protocol(Protocol::Http)
        .build()
        .expect("valid test credentials")
}

pub fn client_for(server: &MockServer) -> LcuClient {
    LcuClient::new(
        http_credentials(server.address().port()),
        Duration::from_secs(5),
    )
    .expect("client builds")
}

pub fn lockfile_contents(port: u16) -> String {
    format!("LeagueClient:4242:{port}:{TEST_PASSWORD}:http")
}

pub fn write_lockfile(dir: &Path, port: u16) -> PathBuf {
    let path = dir.join("lockfile");
    std::fs::write(&path, lockfile_contents(port)).expect("lockfile written");
    path
}

/// Client config reading `lockfile` and retrying quickly.
pub fn fast_retry_config(lockfile: PathBuf) -> ClientConfig {
    ClientConfig {
        lockfile: Some(lockfile),
        install_directory: None,
        request_timeout_secs: 5,
        retry_initial_interval_ms: 10,
        retry_max_interval_ms: 20,
    }
}

/// A loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}
