/**
 * Real-time Trip Event System
 *
 * This module defines the events broadcast to subscribers of a shopping
 * trip. Every successful mutation of a trip item produces exactly one
 * event; events are fire-and-forget and never persisted.
 *
 * # Event Kinds
 *
 * The kind enumeration is a tagged union so each kind carries its own
 * statically checked payload shape:
 * - `ItemAdded` - a new line appeared on the checklist (full item)
 * - `ItemUpdated` - quantity/notes/store changed (full item)
 * - `ItemChecked` - checked or unchecked (flag + timestamp only)
 * - `ItemRemoved` - the line was deleted (ids only, the item is gone)
 *
 * # Wire Format
 *
 * Serialized as `{trip_id, trip_item_id, event_type, payload, timestamp}`,
 * where `event_type` is the kind tag and `payload` is the kind-specific
 * body. The SSE layer additionally uses the tag as the SSE event name.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::models::TripItem;

/// Kind-specific payload of a trip event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event_type", content = "payload", rename_all = "snake_case")]
pub enum TripEventKind {
    /// A new item was added to the trip
    ItemAdded {
        /// The created item
        item: TripItem,
    },
    /// An existing item's quantity, notes, or store changed
    ItemUpdated {
        /// The item after the update
        item: TripItem,
    },
    /// An item was checked off or unchecked
    ItemChecked {
        /// New checked state
        is_checked: bool,
        /// When it was checked, `None` when unchecked
        checked_at: Option<DateTime<Utc>>,
    },
    /// An item was removed from the trip
    ItemRemoved {
        /// The removed item's ID
        id: Uuid,
        /// The trip it was removed from
        trip_id: Uuid,
    },
}

impl TripEventKind {
    /// Wire tag for this kind, also used as the SSE event name
    pub fn name(&self) -> &'static str {
        match self {
            TripEventKind::ItemAdded { .. } => "item_added",
            TripEventKind::ItemUpdated { .. } => "item_updated",
            TripEventKind::ItemChecked { .. } => "item_checked",
            TripEventKind::ItemRemoved { .. } => "item_removed",
        }
    }
}

/// A single real-time event on a trip's channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripEvent {
    /// Trip whose channel this event belongs to
    pub trip_id: Uuid,
    /// The affected trip item
    pub trip_item_id: Uuid,
    /// Kind tag plus kind-specific payload
    #[serde(flatten)]
    pub kind: TripEventKind,
    /// When the event was created
    pub timestamp: DateTime<Utc>,
}

impl TripEvent {
    /// Create a new event for a trip item
    pub fn new(trip_id: Uuid, trip_item_id: Uuid, kind: TripEventKind) -> Self {
        Self {
            trip_id,
            trip_item_id,
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Event for a freshly added item
    pub fn item_added(item: &TripItem) -> Self {
        Self::new(
            item.trip_id,
            item.id,
            TripEventKind::ItemAdded { item: item.clone() },
        )
    }

    /// Event for an updated item
    pub fn item_updated(item: &TripItem) -> Self {
        Self::new(
            item.trip_id,
            item.id,
            TripEventKind::ItemUpdated { item: item.clone() },
        )
    }

    /// Event for a checked or unchecked item
    pub fn item_checked(item: &TripItem) -> Self {
        Self::new(
            item.trip_id,
            item.id,
            TripEventKind::ItemChecked {
                is_checked: item.is_checked,
                checked_at: item.checked_at,
            },
        )
    }

    /// Event for a removed item (the row no longer exists, so ids only)
    pub fn item_removed(item_id: Uuid, trip_id: Uuid) -> Self {
        Self::new(
            trip_id,
            item_id,
            TripEventKind::ItemRemoved {
                id: item_id,
                trip_id,
            },
        )
    }

    /// Wire tag of this event's kind
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> TripItem {
        let now = Utc::now();
        TripItem {
            id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            inventory_item_id: Uuid::new_v4(),
            store_id: None,
            quantity: 2,
            notes: Some("ripe ones".to_string()),
            is_checked: false,
            checked_at: None,
            checked_by: None,
            added_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_item_added_carries_full_item() {
        let item = sample_item();
        let event = TripEvent::item_added(&item);

        assert_eq!(event.trip_id, item.trip_id);
        assert_eq!(event.trip_item_id, item.id);
        match event.kind {
            TripEventKind::ItemAdded { item: carried } => assert_eq!(carried, item),
            _ => panic!("Expected ItemAdded"),
        }
    }

    #[test]
    fn test_item_checked_carries_flag_and_timestamp() {
        let mut item = sample_item();
        item.is_checked = true;
        item.checked_at = Some(Utc::now());
        let event = TripEvent::item_checked(&item);

        match event.kind {
            TripEventKind::ItemChecked {
                is_checked,
                checked_at,
            } => {
                assert!(is_checked);
                assert_eq!(checked_at, item.checked_at);
            }
            _ => panic!("Expected ItemChecked"),
        }
    }

    #[test]
    fn test_item_removed_references_ids_only() {
        let item = sample_item();
        let event = TripEvent::item_removed(item.id, item.trip_id);

        assert_eq!(event.trip_item_id, item.id);
        assert_eq!(
            event.kind,
            TripEventKind::ItemRemoved {
                id: item.id,
                trip_id: item.trip_id,
            }
        );
    }

    #[test]
    fn test_wire_format_has_tag_and_payload() {
        let item = sample_item();
        let event = TripEvent::item_added(&item);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "item_added");
        assert_eq!(json["trip_id"], serde_json::json!(item.trip_id));
        assert_eq!(json["trip_item_id"], serde_json::json!(item.id));
        assert!(json["payload"]["item"].is_object());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_serde_round_trip() {
        let item = sample_item();
        let event = TripEvent::item_updated(&item);
        let json = serde_json::to_string(&event).unwrap();
        let back: TripEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(back, event);
    }

    #[test]
    fn test_kind_names() {
        let item = sample_item();
        assert_eq!(TripEvent::item_added(&item).kind_name(), "item_added");
        assert_eq!(TripEvent::item_updated(&item).kind_name(), "item_updated");
        assert_eq!(TripEvent::item_checked(&item).kind_name(), "item_checked");
        assert_eq!(
            TripEvent::item_removed(item.id, item.trip_id).kind_name(),
            "item_removed"
        );
    }
}
