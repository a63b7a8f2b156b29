//! HTTP handlers for store endpoints
//!
//! - `GET /api/households/{id}/stores` - list stores
//! - `POST /api/households/{id}/stores` - add a store
//! - `PUT /api/stores/{id}` - update a store
//! - `DELETE /api/stores/{id}` - remove a store
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
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::backend::stores::db;
use crate::shared::models::Store;

/// Request body for creating or updating a store
#[derive(Debug, Deserialize)]
pub struct StoreRequest {
    pub name: String,
    pub location: Option<String>,
}

/// Require that the caller belongs to the household
async fn ensure_member(pool: &PgPool, household_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    if households::db::is_member(pool, household_id, user_id).await? {
        Ok(())
    } else {
        Err(AppError::NotAuthorized)
    }
}

/// List a household's stores (GET /api/households/{id}/stores)
pub async fn list_stores(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(household_id): Path<Uuid>,
) -> Result<Json<Vec<Store>>, AppError> {
    ensure_member(&pool, household_id, user.user_id).await?;

    let stores = db::get_stores_for_household(&pool, household_id).await?;
    Ok(Json(stores))
}

/// Add a store (POST /api/households/{id}/stores)
pub async fn create_store(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(household_id): Path<Uuid>,
    Json(request): Json<StoreRequest>,
) -> Result<Json<Store>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name", "cannot be empty"));
    }

    ensure_member(&pool, household_id, user.user_id).await?;

    let store = db::create_store(&pool, household_id, name, request.location.as_deref()).await?;
    Ok(Json(store))
}

/// Update a store (PUT /api/stores/{id})
pub async fn update_store(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(store_id): Path<Uuid>,
    Json(request): Json<StoreRequest>,
) -> Result<Json<Store>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name", "cannot be empty"));
    }

    let existing = db::get_store_by_id(&pool, store_id)
        .await?
        .ok_or_else(|| AppError::not_found("Store"))?;
    ensure_member(&pool, existing.household_id, user.user_id).await?;

    let store = db::update_store(&pool, store_id, name, request.location.as_deref()).await?;
    Ok(Json(store))
}

/// Delete a store (DELETE /api/stores/{id})
pub async fn delete_store(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(store_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let existing = db::get_store_by_id(&pool, store_id)
        .await?
        .ok_or_else(|| AppError::not_found("Store"))?;
    ensure_member(&pool, existing.household_id, user.user_id).await?;

    db::delete_store(&pool, store_id).await?;

    Ok(Json(serde_json::json!({ "deleted": store_id })))
}
