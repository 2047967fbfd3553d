//! A throwaway config and lockfile for running the `hasagi` binary against
//! local stand-ins for the LCU.

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_cmd::cargo::cargo_bin_cmd;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TestEnv {
    dir: TempDir,
    pub config: PathBuf,
    pub lockfile: PathBuf,
    pub work_dir: PathBuf,
}

impl TestEnv {
    /// Config pointing at a lockfile that does not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let lockfile = dir.path().join("lockfile");
        let config = dir.path().join("config.toml");
        let work_dir = dir.path().join("work");
        std::fs::create_dir_all(&work_dir).expect("create work dir");

        std::fs::write(
            &config,
            format!(
                "[client]\nlockfile = {}\nrequest_timeout_secs = 5\nretry_initial_interval_ms = 50\nretry_max_interval_ms = 100\n",
                toml_string(&lockfile)
            ),
        )
        .expect("write config");

        Self {
            dir,
            config,
            lockfile,
            work_dir,
        }
    }

    /// Config and lockfile for a client on `port`.
    pub fn for_port(port: u16) -> Self {
        let env = Self::new();
        std::fs::write(&env.lockfile, format!("LeagueClient:4242:{port}:test-token:http"))
            .expect("write lockfile");
        env
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `hasagi --config <config>` running in the work directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hasagi");
        cmd.arg("--config")
            .arg(&self.config)
            .current_dir(&self.work_dir)
            .timeout(COMMAND_TIMEOUT);
        cmd
    }

    /// Run without blocking the runtime serving the mocks.
    pub async fn run(&self, args: &[&str]) -> Assert {
        let mut cmd = self.cmd();
        cmd.args(args);
        tokio::task::spawn_blocking(move || cmd.assert())
            .await
            .expect("command thread")
    }
}

fn toml_string(path: &Path) -> String {
    // TOML basic strings share JSON's escaping for paths.
    serde_json::Value::from(path.to_string_lossy().into_owned()).to_string()
}

/// LCU stand-in that answers the readiness probe.
pub async fn lcu_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .with_priority(u8::MAX)
        .mount(&server)
        .await;
    server
}

pub fn stdout(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}
