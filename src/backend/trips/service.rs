/**
 * Trip Item Mutation Service
 *
 * Every checklist mutation flows through this module: authorize against
 * the collaborator gate, apply the write to the database, then publish
 * exactly one event to the trip's channel.
 *
 * # Ordering of Effects
 *
 * Publication happens strictly after the persistence write succeeds. A
 * storage failure short-circuits with the error and no event is emitted,
 * so subscribers never observe speculative mutations. Publication itself
 * is fire-and-forget: a trip nobody is watching simply drops the event,
 * and no publication problem ever surfaces to the mutator.
 *
 * # Authorization
 *
 * Operations addressed by item ID load the item first: an absent row is
 * `NotFound`, and only an existing row's trip is checked against the
 * gate. `add_item` is addressed by trip ID and checks the gate directly.
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::AppError;
use crate::backend::realtime::TripChannelRegistry;
use crate::backend::trips::{access, db};
use crate::shared::models::TripItem;
use crate::shared::TripEvent;

/// Fields for a new checklist line
#[derive(Debug, Clone)]
pub struct NewTripItem {
    pub inventory_item_id: Uuid,
    pub quantity: i32,
    pub notes: Option<String>,
    pub store_id: Option<Uuid>,
}

/// Replacement fields for an existing checklist line
#[derive(Debug, Clone)]
pub struct TripItemUpdate {
    pub quantity: i32,
    pub notes: Option<String>,
    pub store_id: Option<Uuid>,
}

/// Add an item to a trip's checklist
///
/// The item starts un-checked. Quantity is validated by the HTTP layer;
/// this service neither clamps nor defaults it. Publishes `ItemAdded`
/// carrying the created item.
pub async fn add_item(
    pool: &PgPool,
    registry: &TripChannelRegistry,
    trip_id: Uuid,
    user_id: Uuid,
    new_item: NewTripItem,
) -> Result<TripItem, AppError> {
    access::ensure_collaborator(pool, trip_id, user_id).await?;

    let now = Utc::now();
    let item = TripItem {
        id: Uuid::new_v4(),
        trip_id,
        inventory_item_id: new_item.inventory_item_id,
        store_id: new_item.store_id,
        quantity: new_item.quantity,
        notes: new_item.notes,
        is_checked: false,
        checked_at: None,
        checked_by: None,
        added_by: user_id,
        created_at: now,
        updated_at: now,
    };

    db::create_trip_item(pool, &item).await?;

    registry.publish(TripEvent::item_added(&item));
    tracing::debug!("[TripService] Item {} added to trip {}", item.id, trip_id);

    Ok(item)
}

/// Overwrite an item's quantity, notes, and store
///
/// Publishes `ItemUpdated` carrying the item after the update.
pub async fn update_item(
    pool: &PgPool,
    registry: &TripChannelRegistry,
    item_id: Uuid,
    user_id: Uuid,
    update: TripItemUpdate,
) -> Result<TripItem, AppError> {
    let mut item = db::get_trip_item_by_id(pool, item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip item"))?;

    access::ensure_collaborator(pool, item.trip_id, user_id).await?;

    item.quantity = update.quantity;
    item.notes = update.notes;
    item.store_id = update.store_id;
    item.updated_at = Utc::now();

    db::save_trip_item(pool, &item).await?;

    registry.publish(TripEvent::item_updated(&item));
    tracing::debug!("[TripService] Item {} updated", item.id);

    Ok(item)
}

/// Check an item off, or uncheck it
///
/// Checking stamps `checked_at`/`checked_by`; unchecking clears both.
/// Setting the flag to its current value is idempotent at the data level
/// but still publishes a fresh `ItemChecked` event, so subscribers must
/// tolerate duplicate-looking events.
pub async fn check_item(
    pool: &PgPool,
    registry: &TripChannelRegistry,
    item_id: Uuid,
    user_id: Uuid,
    is_checked: bool,
) -> Result<TripItem, AppError> {
    let mut item = db::get_trip_item_by_id(pool, item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip item"))?;

    access::ensure_collaborator(pool, item.trip_id, user_id).await?;

    item.is_checked = is_checked;
    if is_checked {
        item.checked_at = Some(Utc::now());
        item.checked_by = Some(user_id);
    } else {
        item.checked_at = None;
        item.checked_by = None;
    }
    item.updated_at = Utc::now();

    db::save_trip_item(pool, &item).await?;

    registry.publish(TripEvent::item_checked(&item));
    tracing::debug!(
        "[TripService] Item {} checked={} by {}",
        item.id,
        is_checked,
        user_id
    );

    Ok(item)
}

/// Remove an item from its trip
///
/// Publishes `ItemRemoved` carrying only the ids; the row is gone.
pub async fn delete_item(
    pool: &PgPool,
    registry: &TripChannelRegistry,
    item_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    let item = db::get_trip_item_by_id(pool, item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip item"))?;

    access::ensure_collaborator(pool, item.trip_id, user_id).await?;

    db::delete_trip_item(pool, item_id).await?;

    registry.publish(TripEvent::item_removed(item.id, item.trip_id));
    tracing::debug!("[TripService] Item {} removed from trip {}", item.id, item.trip_id);

    Ok(())
}
