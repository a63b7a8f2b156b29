//! Real-time trip channel integration tests
//!
//! Exercises the channel registry the way the server does: mutation-side
//! publishes on one task, subscriber relay loops on others, with clean
//! termination on forced close.

use chrono::Utc;
use pretty_assertions::assert_eq;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{timeout, Duration};
use uuid::Uuid;

use cartful::backend::realtime::TripChannelRegistry;
use cartful::shared::models::TripItem;
use cartful::shared::{TripEvent, TripEventKind};

fn sample_item(trip_id: Uuid) -> TripItem {
    let now = Utc::now();
    TripItem {
        id: Uuid::new_v4(),
        trip_id,
        inventory_item_id: Uuid::new_v4(),
        store_id: None,
        quantity: 2,
        notes: None,
        is_checked: false,
        checked_at: None,
        checked_by: None,
        added_by: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
    }
}

/// Run a subscriber relay loop like the SSE endpoint does: collect events
/// until the channel closes, then return what was seen.
async fn relay_until_closed(
    mut rx: tokio::sync::broadcast::Receiver<TripEvent>,
) -> Vec<TripEvent> {
    let mut seen = Vec::new();
    loop {
        match rx.recv().await {
            Ok(event) => seen.push(event),
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => return seen,
        }
    }
}

#[tokio::test]
async fn subscriber_sees_mutations_in_publish_order_until_close() {
    let registry = TripChannelRegistry::new();
    let trip_id = Uuid::new_v4();

    let rx = registry.subscribe(trip_id);
    let relay = tokio::spawn(relay_until_closed(rx));

    let item = sample_item(trip_id);
    let mut checked = item.clone();
    checked.is_checked = true;
    checked.checked_at = Some(Utc::now());

    let published = vec![
        TripEvent::item_added(&item),
        TripEvent::item_checked(&checked),
        TripEvent::item_removed(item.id, trip_id),
    ];
    for event in &published {
        registry.publish(event.clone());
    }
    registry.close_trip(trip_id);

    // The relay terminates cleanly (no panic, no error) with all events
    // in publish order.
    let seen = timeout(Duration::from_secs(1), relay)
        .await
        .expect("relay should finish after close")
        .unwrap();
    assert_eq!(seen, published);
}

#[tokio::test]
async fn every_subscriber_observes_the_forced_close() {
    let registry = TripChannelRegistry::new();
    let trip_id = Uuid::new_v4();

    let relays: Vec<_> = (0..4)
        .map(|_| tokio::spawn(relay_until_closed(registry.subscribe(trip_id))))
        .collect();

    let event = TripEvent::item_added(&sample_item(trip_id));
    registry.publish(event.clone());
    registry.close_trip(trip_id);

    for relay in relays {
        let seen = timeout(Duration::from_secs(1), relay)
            .await
            .expect("every relay should finish after close")
            .unwrap();
        assert_eq!(seen, vec![event.clone()]);
    }
}

#[tokio::test]
async fn events_do_not_leak_across_trips() {
    let registry = TripChannelRegistry::new();
    let trip_a = Uuid::new_v4();
    let trip_b = Uuid::new_v4();

    let relay_a = tokio::spawn(relay_until_closed(registry.subscribe(trip_a)));
    let relay_b = tokio::spawn(relay_until_closed(registry.subscribe(trip_b)));

    let event_a = TripEvent::item_added(&sample_item(trip_a));
    let event_b = TripEvent::item_added(&sample_item(trip_b));
    registry.publish(event_a.clone());
    registry.publish(event_b.clone());
    registry.close_trip(trip_a);
    registry.close_trip(trip_b);

    let seen_a = timeout(Duration::from_secs(1), relay_a).await.unwrap().unwrap();
    let seen_b = timeout(Duration::from_secs(1), relay_b).await.unwrap().unwrap();
    assert_eq!(seen_a, vec![event_a]);
    assert_eq!(seen_b, vec![event_b]);
}

#[tokio::test]
async fn resubscribing_after_close_starts_empty() {
    let registry = TripChannelRegistry::new();
    let trip_id = Uuid::new_v4();

    let _stale = registry.subscribe(trip_id);
    registry.publish(TripEvent::item_added(&sample_item(trip_id)));
    registry.close_trip(trip_id);

    let rx = registry.subscribe(trip_id);
    let relay = tokio::spawn(relay_until_closed(rx));

    // Only events published after the fresh subscription arrive.
    let fresh = TripEvent::item_updated(&sample_item(trip_id));
    registry.publish(fresh.clone());
    registry.close_trip(trip_id);

    let seen = timeout(Duration::from_secs(1), relay).await.unwrap().unwrap();
    assert_eq!(seen, vec![fresh]);
}

#[tokio::test]
async fn delivered_events_serialize_one_per_frame() {
    // The SSE layer writes one frame per event; its payload must parse
    // back to the same tagged shape.
    let trip_id = Uuid::new_v4();
    let item = sample_item(trip_id);
    let event = TripEvent::item_added(&item);

    let frame_name = event.kind_name();
    let frame_data = serde_json::to_string(&event).unwrap();

    assert_eq!(frame_name, "item_added");
    let parsed: TripEvent = serde_json::from_str(&frame_data).unwrap();
    assert_eq!(parsed, event);
    match parsed.kind {
        TripEventKind::ItemAdded { item: carried } => assert_eq!(carried.id, item.id),
        _ => panic!("Expected ItemAdded"),
    }
}
