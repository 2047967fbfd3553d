use hasagi::commands::listen::drain_events;
use hasagi::error::HasagiError;
use hasagi::output::EventSink;

use lcu_client::ws;
use models::{EventFilter, EventSubscription, LcuCredentialsBuilder, Protocol};

use std::future::pending;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tempfile::tempdir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// Accept one client, wait for its subscribe frame, send `frames`, then
/// either close or hold the socket open until `release` fires.
async fn websocket_server(frames: Vec<String>, release: Option<oneshot::Receiver<()>>) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = accept_async(stream).await.unwrap();
        let _subscribe = socket.next().await;

        for frame in frames {
            socket.send(Message::Text(frame.into())).await.unwrap();
        }

        if let Some(release) = release {
            let _ = release.await;
        }
        let _ = socket.close(None).await;
    });

    port
}

fn credentials(port: u16) -> models::LcuCredentials {
    LcuCredentialsBuilder::default()
        .with_pid(4242)
        .with_port(port)
        .with_password("test-token")
        .with_protocol(Protocol::Http)
        .build()
        .unwrap()
}

fn event_frame(phase: &str) -> String {
    json!([
        8,
        "OnJsonApiEvent",
        { "data": { "phase": phase }, "eventType": "Update", "uri": "/lol-gameflow/v1/session" }
    ])
    .to_string()
}

/// **VALUE**: Verifies the listen loop writes one pretty blob plus newline per event, in
/// order, and reports the end of the stream as an error.
///
/// **WHY THIS MATTERS**: The event file is the command's main product. Reordering or
/// partial writes make it unparseable; a silently ending stream looks like "no events".
#[tokio::test]
async fn given_events_then_close_when_draining_then_appended_in_order_and_error_returned() {
    // GIVEN: A server sending two events and closing
    let port = websocket_server(vec![event_frame("Lobby"), event_frame("InProgress")], None).await;
    let mut events = ws::subscribe(&credentials(port), EventSubscription::default())
        .await
        .unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.json");
    let mut sink = EventSink::open(path.clone()).await.unwrap();

    // WHEN: Draining without a shutdown signal
    let result = timeout(
        Duration::from_secs(5),
        drain_events(&mut events, Some(&mut sink), pending::<()>()),
    )
    .await
    .expect("drain stalled");

    // THEN: The close is an error and both events were appended
    assert!(
        matches!(result, Err(HasagiError::Ws(_) | HasagiError::EventStream { .. })),
        "Got {result:?}"
    );

    let expected = |phase: &str| {
        format!(
            "{{\n    \"data\": {{\n        \"phase\": \"{phase}\"\n    }},\n    \"eventType\": \"Update\",\n    \"uri\": \"/lol-gameflow/v1/session\"\n}}\n"
        )
    };
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("{}{}", expected("Lobby"), expected("InProgress")));
}

/// **VALUE**: Ctrl-C (any shutdown signal) ends listening cleanly.
#[tokio::test]
async fn given_shutdown_signal_when_draining_then_returns_ok() {
    // GIVEN: A server that keeps the socket open
    let (release, held) = oneshot::channel();
    let port = websocket_server(Vec::new(), Some(held)).await;
    let mut events = ws::subscribe(
        &credentials(port),
        EventSubscription::new(EventFilter::path("/lol-gameflow/v1/session"), Vec::new()),
    )
    .await
    .unwrap();

    // WHEN: The shutdown signal fires
    let result = timeout(
        Duration::from_secs(5),
        drain_events(&mut events, None, tokio::time::sleep(Duration::from_millis(50))),
    )
    .await
    .expect("drain ignored shutdown");

    // THEN: A clean exit
    assert!(result.is_ok(), "Got {result:?}");
    let _ = release.send(());
}
