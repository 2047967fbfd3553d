use crate::helpers::{fast_retry_config, write_lockfile};

use lcu_client::{AttemptFailed, connect};

use std::time::Duration;

use tempfile::tempdir;
use tokio::sync::mpsc;
use tokio::time::timeout;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn answering_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

/// **VALUE**: A reachable client is connected on the first attempt without any notice.
#[tokio::test]
async fn given_lockfile_for_running_server_when_connect_then_returns_client() {
    // GIVEN: A lockfile pointing at an answering server
    let server = answering_server().await;
    let dir = tempdir().unwrap();
    let config = fast_retry_config(write_lockfile(dir.path(), server.address().port()));
    let (notices, mut received) = mpsc::unbounded_channel();

    // WHEN: Connecting
    let client = timeout(Duration::from_secs(5), connect(&config, notices))
        .await
        .expect("connect stalled")
        .unwrap();

    // THEN: Connected to the server's port with no failed attempts
    assert_eq!(client.credentials().port, server.address().port());
    assert!(received.try_recv().is_err());
}

/// **VALUE**: Verifies the CLI keeps waiting, and says so, while no client is running.
///
/// **WHY THIS MATTERS**: Users start `hasagi` before the League client. Giving up, or
/// waiting silently, both look like a hang or a crash.
///
/// **BUG THIS CATCHES**: Would catch `connect` returning an error when nothing is found,
/// or retrying without reporting attempts.
#[tokio::test]
async fn given_missing_lockfile_when_connect_then_keeps_reporting_attempts() {
    // GIVEN: A lockfile that does not exist
    let dir = tempdir().unwrap();
    let config = fast_retry_config(dir.path().join("lockfile"));
    let (notices, mut received) = mpsc::unbounded_channel::<AttemptFailed>();

    // WHEN: Connecting for a short while
    let outcome = timeout(Duration::from_millis(300), connect(&config, notices)).await;

    // THEN: Still waiting, with numbered notices explaining why
    assert!(outcome.is_err(), "connect should still be pending");

    let first = received.try_recv().expect("at least one notice");
    let second = received.try_recv().expect("at least two notices");
    assert_eq!(first.attempt, 1);
    assert_eq!(second.attempt, 2);
    assert_eq!(first.reason, "League client is not running");
    assert!(first.retry_in <= Duration::from_millis(30));
}

/// **VALUE**: A client that starts while we are waiting is picked up.
#[tokio::test]
async fn given_lockfile_appears_later_when_connect_then_resolves() {
    // GIVEN: No lockfile yet
    let server = answering_server().await;
    let dir = tempdir().unwrap();
    let lockfile = dir.path().join("lockfile");
    let config = fast_retry_config(lockfile.clone());
    let (notices, _received) = mpsc::unbounded_channel();

    // WHEN: The lockfile is written after connecting starts
    let port = server.address().port();
    let writer_dir = dir.path().to_path_buf();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        write_lockfile(&writer_dir, port);
    });

    let client = timeout(Duration::from_secs(5), connect(&config, notices))
        .await
        .expect("connect never saw the lockfile")
        .unwrap();

    // THEN: Connected to the late client
    assert_eq!(client.credentials().port, port);
}

#[tokio::test]
async fn given_lockfile_for_closed_port_when_connect_then_reports_not_answering() {
    let dir = tempdir().unwrap();
    let config = fast_retry_config(write_lockfile(dir.path(), crate::helpers::closed_port()));
    let (notices, mut received) = mpsc::unbounded_channel();

    let outcome = timeout(Duration::from_millis(200), connect(&config, notices)).await;

    assert!(outcome.is_err());
    let notice = received.try_recv().expect("a notice");
    assert!(notice.reason.contains("is not answering yet"), "Got {}", notice.reason);
}
