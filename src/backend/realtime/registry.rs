/**
 * Per-Trip Event Channel Registry
 *
 * This module owns the trip -> broadcast-channel map that backs real-time
 * trip collaboration. Each open trip has at most one channel; publishing a
 * mutation event on a trip fans it out to every subscriber currently
 * streaming that trip.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, which provides a
 * multi-producer, multi-consumer channel. Each subscriber owns a bounded
 * receiver queue: a slow subscriber lags and loses its own oldest events,
 * it never blocks the publisher or sibling subscribers.
 *
 * # Channel Lifecycle
 *
 * - Created lazily by the first `subscribe` for a trip. Get-or-create is
 *   atomic under the map lock, so concurrent first-subscribers cannot race
 *   into creating two channels.
 * - `publish` never creates a channel. An event for a trip nobody is
 *   watching is dropped silently.
 * - A channel outlives its last subscriber; only `close_trip` removes it.
 *   Dropping the sender closes the channel, which every receiver observes
 *   as a normal completion signal, and a later `subscribe` on the same
 *   trip starts fresh.
 *
 * The registry is the only component that touches the map. Mutation
 * handlers ask it to publish; subscription handlers ask it for receivers.
 * Neither holds channel references of its own.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::shared::TripEvent;

/// Bounded per-subscriber queue depth for a trip channel
const CHANNEL_CAPACITY: usize = 256;

/// Registry of per-trip broadcast channels
///
/// Cheap to clone; all clones share the same underlying map. The inner
/// mutex is held only for map operations (insert/lookup/remove), never
/// across a send or an await point, so activity on one trip never blocks
/// another beyond map access.
#[derive(Clone)]
pub struct TripChannelRegistry {
    channels: Arc<Mutex<HashMap<Uuid, broadcast::Sender<TripEvent>>>>,
    capacity: usize,
}

impl TripChannelRegistry {
    /// Create an empty registry with the default per-channel capacity
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Create an empty registry with an explicit per-channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
            capacity,
        }
    }

    /// Subscribe to a trip's channel, creating the channel if none is open
    ///
    /// Returns a receiver positioned after any events already published;
    /// a fresh subscriber never sees leftover history. Exactly one channel
    /// exists per trip at a time: the entry API performs get-or-create
    /// atomically under the map lock.
    pub fn subscribe(&self, trip_id: Uuid) -> broadcast::Receiver<TripEvent> {
        let mut channels = self.channels.lock().unwrap();
        let sender = channels
            .entry(trip_id)
            .or_insert_with(|| {
                tracing::debug!("[Registry] Opening channel for trip {}", trip_id);
                broadcast::channel(self.capacity).0
            });
        sender.subscribe()
    }

    /// Publish an event to its trip's channel
    ///
    /// Lookup only: if no channel is open for `event.trip_id` (nobody has
    /// ever subscribed, or the trip was closed), the event is dropped and
    /// this is not an error. Send failures are likewise swallowed; the
    /// mutation that produced the event has already succeeded and no
    /// publication problem may surface to the mutator.
    ///
    /// Returns the number of subscribers the event was delivered to.
    pub fn publish(&self, event: TripEvent) -> usize {
        let sender = {
            let channels = self.channels.lock().unwrap();
            channels.get(&event.trip_id).cloned()
        };

        let Some(sender) = sender else {
            tracing::debug!(
                "[Registry] No channel for trip {}, dropping {} event",
                event.trip_id,
                event.kind_name()
            );
            return 0;
        };

        match sender.send(event) {
            Ok(subscriber_count) => {
                tracing::debug!(
                    "[Registry] Event delivered to {} subscribers",
                    subscriber_count
                );
                subscriber_count
            }
            Err(_) => {
                // Channel exists but every receiver is gone; nothing to do.
                tracing::debug!("[Registry] No subscribers to receive event");
                0
            }
        }
    }

    /// Forcibly close a trip's channel
    ///
    /// Removes the sender from the map and drops it. Every currently
    /// attached receiver observes the closure as a normal completion
    /// signal (`RecvError::Closed`), not an error. A subsequent
    /// `subscribe` for the same trip opens a fresh, empty channel.
    ///
    /// Closing a trip that has no open channel is a no-op.
    pub fn close_trip(&self, trip_id: Uuid) {
        let removed = self.channels.lock().unwrap().remove(&trip_id);
        if removed.is_some() {
            tracing::info!("[Registry] Closed channel for trip {}", trip_id);
        }
    }

    /// Number of live subscribers on a trip's channel (0 if none is open)
    pub fn subscriber_count(&self, trip_id: Uuid) -> usize {
        self.channels
            .lock()
            .unwrap()
            .get(&trip_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    /// Number of currently open channels
    pub fn open_channel_count(&self) -> usize {
        self.channels.lock().unwrap().len()
    }
}

impl Default for TripChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use crate::shared::models::TripItem;
    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    fn item_on(trip_id: Uuid) -> TripItem {
        let now = Utc::now();
        TripItem {
            id: Uuid::new_v4(),
            trip_id,
            inventory_item_id: Uuid::new_v4(),
            store_id: None,
            quantity: 1,
            notes: None,
            is_checked: false,
            checked_at: None,
            checked_by: None,
            added_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_double_subscribe_shares_one_channel() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();

        let mut rx1 = registry.subscribe(trip_id);
        let mut rx2 = registry.subscribe(trip_id);
        assert_eq!(registry.open_channel_count(), 1);
        assert_eq!(registry.subscriber_count(trip_id), 2);

        // One publish reaches both receivers, so they share a channel.
        let event = TripEvent::item_added(&item_on(trip_id));
        assert_eq!(registry.publish(event.clone()), 2);
        assert_eq!(rx1.recv().await.unwrap(), event);
        assert_eq!(rx2.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_drops_silently() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();

        let delivered = registry.publish(TripEvent::item_added(&item_on(trip_id)));

        assert_eq!(delivered, 0);
        // Publishing is not a reason to create a channel.
        assert_eq!(registry.open_channel_count(), 0);
    }

    #[tokio::test]
    async fn test_sequential_publishes_arrive_in_order() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();
        let mut rx = registry.subscribe(trip_id);

        let item = item_on(trip_id);
        let added = TripEvent::item_added(&item);
        let updated = TripEvent::item_updated(&item);
        let removed = TripEvent::item_removed(item.id, trip_id);
        registry.publish(added.clone());
        registry.publish(updated.clone());
        registry.publish(removed.clone());

        assert_eq!(rx.recv().await.unwrap(), added);
        assert_eq!(rx.recv().await.unwrap(), updated);
        assert_eq!(rx.recv().await.unwrap(), removed);
    }

    #[tokio::test]
    async fn test_trips_are_isolated() {
        let registry = TripChannelRegistry::new();
        let trip_a = Uuid::new_v4();
        let trip_b = Uuid::new_v4();
        let mut rx_a = registry.subscribe(trip_a);
        let mut rx_b = registry.subscribe(trip_b);

        let event_a = TripEvent::item_added(&item_on(trip_a));
        registry.publish(event_a.clone());

        assert_eq!(rx_a.recv().await.unwrap(), event_a);
        assert_matches!(rx_b.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_close_trip_completes_all_subscribers() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();
        let mut rx1 = registry.subscribe(trip_id);
        let mut rx2 = registry.subscribe(trip_id);

        registry.close_trip(trip_id);

        // Both observe normal completion, not an error value.
        assert_matches!(rx1.recv().await, Err(RecvError::Closed));
        assert_matches!(rx2.recv().await, Err(RecvError::Closed));
        assert_eq!(registry.open_channel_count(), 0);
    }

    #[tokio::test]
    async fn test_resubscribe_after_close_is_fresh() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();

        let _rx = registry.subscribe(trip_id);
        registry.publish(TripEvent::item_added(&item_on(trip_id)));
        registry.close_trip(trip_id);

        // The new channel delivers no leftover events.
        let mut rx = registry.subscribe(trip_id);
        assert_eq!(registry.open_channel_count(), 1);
        assert_matches!(rx.try_recv(), Err(TryRecvError::Empty));

        let event = TripEvent::item_added(&item_on(trip_id));
        registry.publish(event.clone());
        assert_eq!(rx.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_close_unknown_trip_is_noop() {
        let registry = TripChannelRegistry::new();
        registry.close_trip(Uuid::new_v4());
        assert_eq!(registry.open_channel_count(), 0);
    }

    #[tokio::test]
    async fn test_channel_survives_last_subscriber() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();

        let rx = registry.subscribe(trip_id);
        drop(rx);

        // Teardown is explicit only; the channel stays open with zero
        // subscribers until close_trip is called.
        assert_eq!(registry.subscriber_count(trip_id), 0);
        assert_eq!(registry.open_channel_count(), 1);
    }

    #[tokio::test]
    async fn test_slow_subscriber_lags_alone() {
        let registry = TripChannelRegistry::with_capacity(2);
        let trip_id = Uuid::new_v4();
        let mut slow = registry.subscribe(trip_id);

        // Overflow the slow receiver's queue.
        let item = item_on(trip_id);
        for _ in 0..4 {
            registry.publish(TripEvent::item_updated(&item));
        }

        // A fresh subscriber is unaffected by the sibling's lag.
        let mut fresh = registry.subscribe(trip_id);
        let event = TripEvent::item_checked(&item);
        registry.publish(event.clone());

        assert_matches!(slow.recv().await, Err(RecvError::Lagged(_)));
        assert_eq!(fresh.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_concurrent_first_subscribers_share_channel() {
        let registry = TripChannelRegistry::new();
        let trip_id = Uuid::new_v4();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move { registry.subscribe(trip_id) }));
        }
        let mut receivers = Vec::new();
        for handle in handles {
            receivers.push(handle.await.unwrap());
        }

        assert_eq!(registry.open_channel_count(), 1);
        assert_eq!(registry.subscriber_count(trip_id), 16);

        let event = TripEvent::item_added(&item_on(trip_id));
        assert_eq!(registry.publish(event.clone()), 16);
        for mut rx in receivers {
            assert_eq!(rx.recv().await.unwrap(), event);
        }
    }
}
