use crate::helpers::{TEST_AUTHORIZATION, http_credentials};

use lcu_client::error::ws::WsError;
use lcu_client::ws;
use models::{EventFilter, EventSubscription, EventType};

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};

const SESSION_URI: &str = "/lol-gameflow/v1/session";

/// What the fake LCU saw from the client.
#[derive(Debug)]
struct Handshake {
    authorization: Option<String>,
    subscribe_frame: Option<String>,
}

fn event_frame(uri: &str, event_type: &str, data: serde_json::Value) -> String {
    json!([
        8,
        "OnJsonApiEvent",
        { "data": data, "eventType": event_type, "uri": uri }
    ])
    .to_string()
}

/// Accept one websocket client, wait for its subscribe frame, push `frames`
/// and close.
async fn serve_once(frames: Vec<String>) -> (u16, oneshot::Receiver<Handshake>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (report, handshake) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();

        let mut authorization = None;
        let callback = |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
            authorization = request
                .headers()
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(String::from);
            Ok(response)
        };
        let mut socket = accept_hdr_async(stream, callback).await.unwrap();

        let subscribe_frame = match socket.next().await {
            Some(Ok(Message::Text(text))) => Some(text.to_string()),
            _ => None,
        };

        let _ = report.send(Handshake {
            authorization,
            subscribe_frame,
        });

        for frame in frames {
            socket.send(Message::Text(frame.into())).await.unwrap();
        }
        let _ = socket.close(None).await;
    });

    (port, handshake)
}

/// **VALUE**: Verifies the whole subscription path against a real websocket server:
/// auth header, subscribe frame, filtering and ordering.
///
/// **WHY THIS MATTERS**: `listen` writes events in the order the LCU sent them. A reader
/// that reorders, drops matching events or leaks filtered ones corrupts the output file.
///
/// **BUG THIS CATCHES**: Would catch the filter being applied to the wrong field, the
/// type filter being ignored, or the subscribe frame using the wrong WAMP opcode.
#[tokio::test]
async fn given_mixed_events_when_subscribed_by_path_and_type_then_yields_matching_in_order() {
    // GIVEN: A server pushing a welcome frame plus a mix of events
    let frames = vec![
        json!([0, "session-id", 1, "fake-lcu"]).to_string(),
        event_frame("/lol-chat/v1/me", "Update", json!({ "availability": "away" })),
        event_frame(SESSION_URI, "Create", json!({ "phase": "Lobby" })),
        event_frame(SESSION_URI, "Update", json!({ "phase": "Matchmaking" })),
        String::new(),
        event_frame(SESSION_URI, "Update", json!({ "phase": "ReadyCheck" })),
    ];
    let (port, handshake) = serve_once(frames).await;
    let subscription = EventSubscription::new(EventFilter::path(SESSION_URI), vec![EventType::Update]);

    // WHEN: Subscribing and draining the stream
    let mut stream = ws::subscribe(&http_credentials(port), subscription)
        .await
        .unwrap();

    let mut phases = Vec::new();
    let terminal = loop {
        let item = timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("stream stalled");
        match item {
            Some(Ok(event)) => phases.push(event.payload["data"]["phase"].clone()),
            Some(Err(e)) => break e,
            None => panic!("Stream ended without reporting the close"),
        }
    };

    // THEN: Only matching updates, in order, then the close, then nothing
    assert_eq!(phases, vec![json!("Matchmaking"), json!("ReadyCheck")]);
    assert!(matches!(terminal, WsError::Closed { .. }), "Got {terminal:?}");
    assert!(stream.next().await.is_none());

    let handshake = handshake.await.unwrap();
    assert_eq!(handshake.authorization.as_deref(), Some(TEST_AUTHORIZATION));
    assert_eq!(
        handshake.subscribe_frame.as_deref(),
        Some(r#"[5,"OnJsonApiEvent"]"#)
    );
}

/// **VALUE**: A named subscription subscribes to that topic instead of the catch-all one.
#[tokio::test]
async fn given_name_filter_when_subscribed_then_subscribes_to_named_topic() {
    // GIVEN: A server with no events
    let (port, handshake) = serve_once(Vec::new()).await;
    let subscription = EventSubscription::new(
        EventFilter::Name(String::from("OnJsonApiEvent_lol-gameflow_v1_session")),
        Vec::new(),
    );

    // WHEN: Subscribing
    let mut stream = ws::subscribe(&http_credentials(port), subscription)
        .await
        .unwrap();

    // THEN: The named topic is in the subscribe frame and the close is reported
    let handshake = handshake.await.unwrap();
    assert_eq!(
        handshake.subscribe_frame.as_deref(),
        Some(r#"[5,"OnJsonApiEvent_lol-gameflow_v1_session"]"#)
    );
    let item = timeout(Duration::from_secs(5), stream.next()).await.unwrap();
    assert!(matches!(item, Some(Err(_))));
}

#[tokio::test]
async fn given_nothing_listening_when_subscribe_then_returns_error() {
    let port = crate::helpers::closed_port();

    let result = ws::subscribe(&http_credentials(port), EventSubscription::default()).await;

    assert!(result.is_err());
}
