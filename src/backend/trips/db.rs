//! Database operations for trips and trip items
//!
//! This module contains all persistence for trips, their collaborator
//! lists, and their checklist items. The mutation service builds item
//! structs and hands them to `save_trip_item`; the status column is stored
//! as text and mapped through `TripStatus`.

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::{Trip, TripCollaborator, TripItem, TripStatus};

/// Map a trips row into a `Trip`
fn map_trip_row(row: sqlx::postgres::PgRow) -> Trip {
    Trip {
        id: row.get("id"),
        household_id: row.get("household_id"),
        name: row.get("name"),
        created_by: row.get("created_by"),
        status: TripStatus::from_str(row.get::<String, _>("status").as_str()),
        created_at: row.get("created_at"),
        completed_at: row.get("completed_at"),
    }
}

/// Create a new trip in the planning state
pub async fn create_trip(
    pool: &PgPool,
    household_id: Option<Uuid>,
    name: &str,
    created_by: Uuid,
) -> Result<Trip, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        INSERT INTO trips (id, household_id, name, created_by, status, created_at, completed_at)
        VALUES ($1, $2, $3, $4, 'planning', $5, NULL)
        RETURNING id, household_id, name, created_by, status, created_at, completed_at
        "#,
    )
    .bind(id)
    .bind(household_id)
    .bind(name)
    .bind(created_by)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(map_trip_row(row))
}

/// Get a trip by ID
pub async fn get_trip_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Trip>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, household_id, name, created_by, status, created_at, completed_at
        FROM trips
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(map_trip_row))
}

/// List a household's trips, newest first
pub async fn get_trips_for_household(
    pool: &PgPool,
    household_id: Uuid,
) -> Result<Vec<Trip>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, household_id, name, created_by, status, created_at, completed_at
        FROM trips
        WHERE household_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(household_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(map_trip_row).collect())
}

/// Set a trip's lifecycle status
///
/// Stamps `completed_at` when moving to `Completed` and clears it
/// otherwise.
pub async fn set_trip_status(
    pool: &PgPool,
    trip_id: Uuid,
    status: TripStatus,
) -> Result<Trip, sqlx::Error> {
    let completed_at = match status {
        TripStatus::Completed => Some(Utc::now()),
        _ => None,
    };

    let row = sqlx::query(
        r#"
        UPDATE trips
        SET status = $2, completed_at = $3
        WHERE id = $1
        RETURNING id, household_id, name, created_by, status, created_at, completed_at
        "#,
    )
    .bind(trip_id)
    .bind(status.as_str())
    .bind(completed_at)
    .fetch_one(pool)
    .await?;

    Ok(map_trip_row(row))
}

/// Delete a trip (items and collaborators cascade)
pub async fn delete_trip(pool: &PgPool, trip_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM trips WHERE id = $1")
        .bind(trip_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Add a collaborator to a trip (idempotent)
pub async fn add_collaborator(
    pool: &PgPool,
    trip_id: Uuid,
    user_id: Uuid,
) -> Result<TripCollaborator, sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO trip_collaborators (trip_id, user_id, added_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (trip_id, user_id) DO NOTHING
        "#,
    )
    .bind(trip_id)
    .bind(user_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(TripCollaborator {
        trip_id,
        user_id,
        added_at: now,
    })
}

/// Load a trip item by ID
pub async fn get_trip_item_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<TripItem>, sqlx::Error> {
    sqlx::query_as::<_, TripItem>(
        r#"
        SELECT id, trip_id, inventory_item_id, store_id, quantity, notes,
               is_checked, checked_at, checked_by, added_by, created_at, updated_at
        FROM trip_items
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List a trip's items in the order they were added
pub async fn get_items_for_trip(pool: &PgPool, trip_id: Uuid) -> Result<Vec<TripItem>, sqlx::Error> {
    sqlx::query_as::<_, TripItem>(
        r#"
        SELECT id, trip_id, inventory_item_id, store_id, quantity, notes,
               is_checked, checked_at, checked_by, added_by, created_at, updated_at
        FROM trip_items
        WHERE trip_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(trip_id)
    .fetch_all(pool)
    .await
}

/// Insert a freshly constructed trip item
pub async fn create_trip_item(pool: &PgPool, item: &TripItem) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO trip_items (id, trip_id, inventory_item_id, store_id, quantity, notes,
                                is_checked, checked_at, checked_by, added_by, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(item.id)
    .bind(item.trip_id)
    .bind(item.inventory_item_id)
    .bind(item.store_id)
    .bind(item.quantity)
    .bind(&item.notes)
    .bind(item.is_checked)
    .bind(item.checked_at)
    .bind(item.checked_by)
    .bind(item.added_by)
    .bind(item.created_at)
    .bind(item.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist a trip item's mutable fields
pub async fn save_trip_item(pool: &PgPool, item: &TripItem) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE trip_items
        SET quantity = $2, notes = $3, store_id = $4,
            is_checked = $5, checked_at = $6, checked_by = $7, updated_at = $8
        WHERE id = $1
        "#,
    )
    .bind(item.id)
    .bind(item.quantity)
    .bind(&item.notes)
    .bind(item.store_id)
    .bind(item.is_checked)
    .bind(item.checked_at)
    .bind(item.checked_by)
    .bind(item.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a trip item
pub async fn delete_trip_item(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM trip_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
