//! Database operations for inventory items

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::models::InventoryItem;

/// Create a new inventory item in a household's catalog
pub async fn create_inventory_item(
    pool: &PgPool,
    household_id: Uuid,
    name: &str,
    category: Option<&str>,
    default_unit: Option<&str>,
) -> Result<InventoryItem, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, InventoryItem>(
        r#"
        INSERT INTO inventory_items (id, household_id, name, category, default_unit, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, household_id, name, category, default_unit, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(household_id)
    .bind(name)
    .bind(category)
    .bind(default_unit)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get an inventory item by ID
pub async fn get_inventory_item_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        r#"
        SELECT id, household_id, name, category, default_unit, created_at, updated_at
        FROM inventory_items
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List a household's inventory, alphabetically
pub async fn get_inventory_for_household(
    pool: &PgPool,
    household_id: Uuid,
) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        r#"
        SELECT id, household_id, name, category, default_unit, created_at, updated_at
        FROM inventory_items
        WHERE household_id = $1
        ORDER BY name
        "#,
    )
    .bind(household_id)
    .fetch_all(pool)
    .await
}

/// Overwrite an inventory item's mutable fields
pub async fn update_inventory_item(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    category: Option<&str>,
    default_unit: Option<&str>,
) -> Result<InventoryItem, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        r#"
        UPDATE inventory_items
        SET name = $2, category = $3, default_unit = $4, updated_at = $5
        WHERE id = $1
        RETURNING id, household_id, name, category, default_unit, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(category)
    .bind(default_unit)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Delete an inventory item
pub async fn delete_inventory_item(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM inventory_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
