//! Waiting for a League client to become reachable.
//!
//! [`connect`] keeps discovering and probing until the LCU answers. Each failed
//! attempt is reported on a channel so the caller can tell the user what is
//! going on while the future is still pending.

use crate::client::LcuClient;
use crate::config::ClientConfig;
use crate::discovery;
use crate::error::connect::ConnectError;

use std::time::Duration;

use backoff::{ExponentialBackoff, backoff::Backoff};
use log::{debug, info, trace};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::spawn_blocking;
use tokio::time::sleep as TokioSleep;

const CLIENT_NOT_FOUND_REASON: &str = "League client is not running";

/// One failed connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailed {
    pub attempt: u32,
    pub reason: String,
    pub retry_in: Duration,
}

enum Attempt {
    Ready(LcuClient),
    NotReady(String),
}

fn retry_backoff(config: &ClientConfig) -> ExponentialBackoff {
    ExponentialBackoff {
        current_interval: config.retry_initial_interval(),
        initial_interval: config.retry_initial_interval(),
        max_interval: config.retry_max_interval(),
        max_elapsed_time: None,
        ..Default::default()
    }
}

async fn attempt(config: &ClientConfig) -> Result<Attempt, ConnectError> {
    let discovery_config = config.clone();
    let discovered = spawn_blocking(move || discovery::discover(&discovery_config)).await?;

    let credentials = match discovered {
        Ok(Some(credentials)) => credentials,
        Ok(None) => return Ok(Attempt::NotReady(String::from(CLIENT_NOT_FOUND_REASON))),
        Err(e) => return Ok(Attempt::NotReady(e.to_string())),
    };

    trace!("Discovered client PID {} on port {}", credentials.pid, credentials.port);

    let client = LcuClient::new(credentials, config.request_timeout())?;

    match client.probe().await {
        Ok(status) => {
            debug!("Readiness probe answered {status}");
            Ok(Attempt::Ready(client))
        }
        Err(e) => Ok(Attempt::NotReady(format!(
            "League client at {} is not answering yet: {}",
            client.base_url(),
            e.message()
        ))),
    }
}

/// Wait until a League client is running and answering HTTP.
///
/// Retries forever with exponential backoff. Every failed attempt is sent to
/// `notices`; a dropped receiver is ignored.
///
/// # Errors
///
/// Only for failures retrying cannot fix, such as the HTTP client failing to
/// initialise its TLS backend.
pub async fn connect(
    config: &ClientConfig,
    notices: UnboundedSender<AttemptFailed>,
) -> Result<LcuClient, ConnectError> {
    let mut backoff = retry_backoff(config);
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;

        match attempt(config).await? {
            Attempt::Ready(client) => {
                info!("Connected to League client at {}", client.base_url());
                return Ok(client);
            }
            Attempt::NotReady(reason) => {
                let retry_in = backoff
                    .next_backoff()
                    .unwrap_or_else(|| config.retry_max_interval());

                debug!("Connection attempt {attempts} failed: {reason}");

                let _ = notices.send(AttemptFailed {
                    attempt: attempts,
                    reason,
                    retry_in,
                });

                TokioSleep(retry_in).await;
            }
        }
    }
}
