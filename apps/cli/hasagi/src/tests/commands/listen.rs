use crate::cli::{EventTypeArg, ListenArgs};
use crate::commands::listen::subscription_for;

use models::{EventFilter, EventType, JSON_API_EVENT};

fn args(path: Option<&str>, name: Option<&str>, types: Vec<EventTypeArg>) -> ListenArgs {
    ListenArgs {
        path: path.map(String::from),
        name: name.map(String::from),
        types,
        out: None,
    }
}

#[test]
fn given_no_filter_when_building_subscription_then_all_json_api_events() {
    let subscription = subscription_for(&args(None, None, Vec::new()));

    assert_eq!(subscription.filter, EventFilter::All);
    assert_eq!(subscription.topic(), JSON_API_EVENT);
    assert!(subscription.types.is_empty());
}

/// **VALUE**: Paths without a leading slash still match LCU uris.
#[test]
fn given_path_without_slash_when_building_subscription_then_slash_added() {
    let subscription = subscription_for(&args(Some("lol-gameflow/v1/session"), None, Vec::new()));

    assert_eq!(
        subscription.filter,
        EventFilter::Path(String::from("/lol-gameflow/v1/session"))
    );
    assert_eq!(subscription.topic(), JSON_API_EVENT);
}

#[test]
fn given_name_and_types_when_building_subscription_then_named_topic_with_types() {
    let subscription = subscription_for(&args(
        None,
        Some("OnJsonApiEvent_lol-lobby_v2_lobby"),
        vec![EventTypeArg::Update, EventTypeArg::Delete],
    ));

    assert_eq!(subscription.topic(), "OnJsonApiEvent_lol-lobby_v2_lobby");
    assert_eq!(subscription.types, vec![EventType::Update, EventType::Delete]);
}
