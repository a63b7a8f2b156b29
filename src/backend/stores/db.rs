//! Database operations for stores

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::models::Store;

/// Create a new store for a household
pub async fn create_store(
    pool: &PgPool,
    household_id: Uuid,
    name: &str,
    location: Option<&str>,
) -> Result<Store, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, Store>(
        r#"
        INSERT INTO stores (id, household_id, name, location, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, household_id, name, location, created_at
        "#,
    )
    .bind(id)
    .bind(household_id)
    .bind(name)
    .bind(location)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Get a store by ID
pub async fn get_store_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Store>, sqlx::Error> {
    sqlx::query_as::<_, Store>(
        r#"
        SELECT id, household_id, name, location, created_at
        FROM stores
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List a household's stores, alphabetically
pub async fn get_stores_for_household(
    pool: &PgPool,
    household_id: Uuid,
) -> Result<Vec<Store>, sqlx::Error> {
    sqlx::query_as::<_, Store>(
        r#"
        SELECT id, household_id, name, location, created_at
        FROM stores
        WHERE household_id = $1
        ORDER BY name
        "#,
    )
    .bind(household_id)
    .fetch_all(pool)
    .await
}

/// Overwrite a store's mutable fields
pub async fn update_store(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    location: Option<&str>,
) -> Result<Store, sqlx::Error> {
    sqlx::query_as::<_, Store>(
        r#"
        UPDATE stores
        SET name = $2, location = $3
        WHERE id = $1
        RETURNING id, household_id, name, location, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(location)
    .fetch_one(pool)
    .await
}

/// Delete a store
pub async fn delete_store(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM stores WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
