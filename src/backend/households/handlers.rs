//! HTTP handlers for household endpoints
//!
//! - `POST /api/households` - create a household (creator auto-joins)
//! - `GET /api/households` - list the caller's households
//! - `POST /api/households/join` - join a household by invite code
//! - `GET /api/households/{id}/members` - list members (members only)

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::AppError;
use crate::backend::households::db;
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::shared::models::Household;

/// Request to create a household
#[derive(Debug, Deserialize)]
pub struct CreateHouseholdRequest {
    pub name: String,
}

/// Request to join a household by invite code
#[derive(Debug, Deserialize)]
pub struct JoinHouseholdRequest {
    pub invite_code: String,
}

/// Create a household (POST /api/households)
pub async fn create_household(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateHouseholdRequest>,
) -> Result<Json<Household>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name", "cannot be empty"));
    }

    let household = db::create_household(&pool, name, user.user_id).await?;
    tracing::info!(
        "[Households] User {} created household {}",
        user.user_id,
        household.id
    );

    Ok(Json(household))
}

/// List the caller's households (GET /api/households)
pub async fn list_households(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<Household>>, AppError> {
    let households = db::get_households_for_user(&pool, user.user_id).await?;
    Ok(Json(households))
}

/// Join a household by invite code (POST /api/households/join)
pub async fn join_household(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<JoinHouseholdRequest>,
) -> Result<Json<Household>, AppError> {
    let code = request.invite_code.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::validation("invite_code", "cannot be empty"));
    }

    let household = db::get_household_by_invite_code(&pool, &code)
        .await?
        .ok_or_else(|| AppError::not_found("Household"))?;

    db::add_member(&pool, household.id, user.user_id).await?;
    tracing::info!(
        "[Households] User {} joined household {}",
        user.user_id,
        household.id
    );

    Ok(Json(household))
}

/// List a household's members (GET /api/households/{id}/members)
///
/// Only visible to current members.
pub async fn list_members(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(household_id): Path<Uuid>,
) -> Result<Json<Vec<db::MemberInfo>>, AppError> {
    db::get_household_by_id(&pool, household_id)
        .await?
        .ok_or_else(|| AppError::not_found("Household"))?;

    if !db::is_member(&pool, household_id, user.user_id).await? {
        return Err(AppError::NotAuthorized);
    }

    let members = db::get_members(&pool, household_id).await?;
    Ok(Json(members))
}
