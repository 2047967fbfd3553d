//! `hasagi listen`

use crate::cli::ListenArgs;
use crate::error::HasagiError;
use crate::output::{EVENTS_FILE_NAME, EventSink, OutputTarget, print_line};
use crate::readiness::wait_for_client;

use common::{ErrorLocation, to_pretty_json};
use lcu_client::{EventStream, HasagiConfig};
use models::{EventFilter, EventSubscription};

use std::future::Future;
use std::panic::Location;

use log::{debug, info};

/// Build the subscription from the filter flags. clap keeps `--path` and
/// `--name` exclusive.
pub fn subscription_for(args: &ListenArgs) -> EventSubscription {
    let filter = match (&args.path, &args.name) {
        (Some(path), _) => EventFilter::path(path.as_str()),
        (None, Some(name)) => EventFilter::Name(name.clone()),
        (None, None) => EventFilter::All,
    };

    EventSubscription::new(filter, args.types.iter().copied().map(Into::into).collect())
}

/// Print every event, and append it to `sink`, until `shutdown` resolves or
/// the stream ends.
///
/// # Errors
///
/// The stream ending is an error: the LCU went away. Write failures propagate.
pub async fn drain_events<F>(
    events: &mut EventStream,
    mut sink: Option<&mut EventSink>,
    shutdown: F,
) -> Result<(), HasagiError>
where
    F: Future,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Stopped listening");
                return Ok(());
            }
            item = events.next() => {
                match item {
                    Some(Ok(event)) => {
                        let blob = to_pretty_json(&event.payload)?;
                        print_line(&blob)?;

                        if let Some(sink) = sink.as_deref_mut() {
                            sink.append(&blob).await?;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        return Err(HasagiError::EventStream {
                            message: String::from("Event stream ended"),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                }
            }
        }
    }
}

pub async fn run(args: ListenArgs, config: &HasagiConfig) -> Result<(), HasagiError> {
    let subscription = subscription_for(&args);
    let target = OutputTarget::resolve(args.out.as_deref());

    let client = wait_for_client(&config.client).await?;

    let mut sink = match target {
        Some(target) => {
            let sink = EventSink::open(target.file_path(EVENTS_FILE_NAME)).await?;
            info!("Appending events to {}", sink.path().display());
            Some(sink)
        }
        None => None,
    };

    let mut events = client.subscribe(subscription).await?;
    debug!("Listening until Ctrl-C");

    drain_events(&mut events, sink.as_mut(), tokio::signal::ctrl_c()).await
}
