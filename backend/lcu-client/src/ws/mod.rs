//! LCU websocket event subscriptions.
//!
//! The LCU pushes JSON API changes over a WAMP-flavoured websocket on the same
//! port as the REST API. A subscription opens one socket, sends a single
//! `[5, topic]` frame and then forwards matching `[8, topic, payload]` frames,
//! in delivery order, through a bounded channel.

use crate::error::ws::WsError;

use common::ErrorLocation;
use models::{EventSubscription, LcuCredentials, LcuEvent};

use std::panic::Location;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::net::TcpStream;
use tokio::spawn as TokioSpawn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::{
    Connector, MaybeTlsStream, WebSocketStream, connect_async_tls_with_config,
};

const EVENT_CHANNEL_CAPACITY: usize = 1024;

type LcuSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Events for one subscription, in the order the LCU delivered them.
///
/// Yields `Err` once if the socket fails, then `None`. Dropping the stream
/// closes the socket.
pub struct EventStream {
    receiver: mpsc::Receiver<Result<LcuEvent, WsError>>,
    reader: JoinHandle<()>,
}

impl EventStream {
    pub async fn next(&mut self) -> Option<Result<LcuEvent, WsError>> {
        self.receiver.recv().await
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

fn tls_connector() -> Result<Connector, WsError> {
    let connector = native_tls::TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(Connector::NativeTls(connector))
}

/// Connect to the LCU websocket and subscribe.
///
/// # Errors
///
/// Returns [`WsError`] if the handshake or the subscribe frame fails. Errors
/// after that point are delivered through [`EventStream::next`].
pub async fn subscribe(
    credentials: &LcuCredentials,
    subscription: EventSubscription,
) -> Result<EventStream, WsError> {
    let mut request = credentials.ws_url().into_client_request()?;
    let mut authorization = HeaderValue::from_str(&credentials.basic_auth())?;
    authorization.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, authorization);

    let (socket, _) =
        connect_async_tls_with_config(request, None, false, Some(tls_connector()?)).await?;
    debug!("Websocket connected to {}", credentials.ws_url());

    let (mut write, read) = socket.split();
    write
        .send(Message::Text(subscription.subscribe_frame().into()))
        .await?;

    info!("Subscribed to {}", subscription.topic());

    let (sender, receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let reader = TokioSpawn(read_events(read, write, subscription, sender));

    Ok(EventStream { receiver, reader })
}

/// Forward matching events until the socket closes or the stream is dropped.
///
/// Owns the write half so the connection stays open for as long as we read.
async fn read_events(
    mut read: SplitStream<LcuSocket>,
    _write: SplitSink<LcuSocket, Message>,
    subscription: EventSubscription,
    sender: mpsc::Sender<Result<LcuEvent, WsError>>,
) {
    while let Some(message) = read.next().await {
        let item = match message {
            Ok(Message::Text(text)) => match LcuEvent::from_wamp_frame(text.as_str()) {
                Ok(Some(event)) if subscription.matches(&event) => Ok(event),
                Ok(_) => continue,
                Err(e) => {
                    warn!("Skipping malformed websocket frame: {e}");
                    continue;
                }
            },
            Ok(Message::Close(frame)) => {
                let reason = frame
                    .map(|f| format!("{} {}", u16::from(f.code), f.reason.as_str()))
                    .unwrap_or_else(|| String::from("no close frame"));
                Err(WsError::Closed {
                    message: format!("LCU closed the websocket: {reason}"),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Ok(_) => continue,
            Err(e) => Err(WsError::from(e)),
        };

        let is_terminal = item.is_err();
        if sender.send(item).await.is_err() {
            debug!("Event receiver dropped, stopping reader");
            return;
        }
        if is_terminal {
            return;
        }
    }

    let _ = sender
        .send(Err(WsError::Closed {
            message: String::from("LCU websocket ended"),
            location: ErrorLocation::from(Location::caller()),
        }))
        .await;
}
