//! Waiting for the League client before a command runs.

use crate::error::HasagiError;

use lcu_client::config::ClientConfig;
use lcu_client::{LcuClient, connect};

use std::time::Duration;

use humantime::format_duration;
use log::{debug, warn};
use tokio::sync::mpsc;

/// Connect to the League client, logging a notice for every failed attempt
/// while waiting.
pub async fn wait_for_client(config: &ClientConfig) -> Result<LcuClient, HasagiError> {
    let (notices, mut received) = mpsc::unbounded_channel();
    let connecting = connect(config, notices);
    tokio::pin!(connecting);

    loop {
        tokio::select! {
            biased;

            result = &mut connecting => {
                let client = result?;
                debug!("League client ready at {}", client.base_url());
                return Ok(client);
            }
            Some(notice) = received.recv() => {
                warn!(
                    "Waiting for the League client... ({}; retrying in {})",
                    notice.reason,
                    format_duration(whole_millis(notice.retry_in))
                );
            }
        }
    }
}

// Backoff intervals are jittered down to the nanosecond.
fn whole_millis(duration: Duration) -> Duration {
    Duration::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
