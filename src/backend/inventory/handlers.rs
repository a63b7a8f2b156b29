//! HTTP handlers for inventory endpoints
//!
//! - `GET /api/households/{id}/inventory` - list the catalog
//! - `POST /api/households/{id}/inventory` - add an item
//! - `PUT /api/inventory/{id}` - update an item
//! - `DELETE /api/inventory/{id}` - remove an item
//!
//! All operations require household membership.

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::AppError;
use crate::backend::households;
use crate::backend::inventory::db;
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::shared::models::InventoryItem;

/// Request body for creating or updating an inventory item
#[derive(Debug, Deserialize)]
pub struct InventoryItemRequest {
    pub name: String,
    pub category: Option<String>,
    pub default_unit: Option<String>,
}

/// Require that the caller belongs to the household
async fn ensure_member(pool: &PgPool, household_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    if households::db::is_member(pool, household_id, user_id).await? {
        Ok(())
    } else {
        Err(AppError::NotAuthorized)
    }
}

/// List a household's inventory (GET /api/households/{id}/inventory)
pub async fn list_inventory(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(household_id): Path<Uuid>,
) -> Result<Json<Vec<InventoryItem>>, AppError> {
    ensure_member(&pool, household_id, user.user_id).await?;

    let items = db::get_inventory_for_household(&pool, household_id).await?;
    Ok(Json(items))
}

/// Add an inventory item (POST /api/households/{id}/inventory)
pub async fn create_inventory_item(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(household_id): Path<Uuid>,
    Json(request): Json<InventoryItemRequest>,
) -> Result<Json<InventoryItem>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name", "cannot be empty"));
    }

    ensure_member(&pool, household_id, user.user_id).await?;

    let item = db::create_inventory_item(
        &pool,
        household_id,
        name,
        request.category.as_deref(),
        request.default_unit.as_deref(),
    )
    .await?;

    Ok(Json(item))
}

/// Update an inventory item (PUT /api/inventory/{id})
pub async fn update_inventory_item(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<InventoryItemRequest>,
) -> Result<Json<InventoryItem>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name", "cannot be empty"));
    }

    let existing = db::get_inventory_item_by_id(&pool, item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Inventory item"))?;
    ensure_member(&pool, existing.household_id, user.user_id).await?;

    let item = db::update_inventory_item(
        &pool,
        item_id,
        name,
        request.category.as_deref(),
        request.default_unit.as_deref(),
    )
    .await?;

    Ok(Json(item))
}

/// Delete an inventory item (DELETE /api/inventory/{id})
pub async fn delete_inventory_item(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let existing = db::get_inventory_item_by_id(&pool, item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Inventory item"))?;
    ensure_member(&pool, existing.household_id, user.user_id).await?;

    db::delete_inventory_item(&pool, item_id).await?;

    Ok(Json(serde_json::json!({ "deleted": item_id })))
}
