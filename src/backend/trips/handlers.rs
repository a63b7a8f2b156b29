//! HTTP handlers for trip endpoints
//!
//! Trip lifecycle:
//! - `POST /api/trips` - create a trip
//! - `GET /api/households/{id}/trips` - list a household's trips
//! - `GET /api/trips/{id}` - fetch a trip with its items
//! - `POST /api/trips/{id}/collaborators` - add a collaborator
//! - `POST /api/trips/{id}/start` - mark the trip as being shopped
//! - `POST /api/trips/{id}/complete` - complete the trip
//! - `DELETE /api/trips/{id}` - delete the trip
//!
//! Item mutations (all publish one event to the trip's channel):
//! - `POST /api/trips/{id}/items` - add an item
//! - `PUT /api/trip-items/{id}` - update an item
//! - `POST /api/trip-items/{id}/check` - check/uncheck an item
//! - `DELETE /api/trip-items/{id}` - remove an item
//!
//! Completing or deleting a trip closes its event channel: every open
//! subscription on the trip ends with a clean completion signal.

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::AppError;
use crate::backend::households;
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::backend::server::state::AppState;
use crate::backend::trips::service::{NewTripItem, TripItemUpdate};
use crate::backend::trips::{access, db, service};
use crate::shared::models::{Trip, TripCollaborator, TripItem, TripStatus};
use crate::shared::SharedError;

/// Request to create a trip
#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub name: String,
    /// Household to attach the trip to; personal trips omit this
    pub household_id: Option<Uuid>,
}

/// Request to add a collaborator to a trip
#[derive(Debug, Deserialize)]
pub struct AddCollaboratorRequest {
    pub user_id: Uuid,
}

/// Request to add an item to a trip
#[derive(Debug, Deserialize)]
pub struct AddTripItemRequest {
    pub inventory_item_id: Uuid,
    pub quantity: i32,
    pub notes: Option<String>,
    pub store_id: Option<Uuid>,
}

/// Request to update a trip item
#[derive(Debug, Deserialize)]
pub struct UpdateTripItemRequest {
    pub quantity: i32,
    pub notes: Option<String>,
    pub store_id: Option<Uuid>,
}

/// Request to check or uncheck a trip item
#[derive(Debug, Deserialize)]
pub struct CheckTripItemRequest {
    pub is_checked: bool,
}

/// A trip together with its checklist
#[derive(Debug, Serialize)]
pub struct TripWithItems {
    #[serde(flatten)]
    pub trip: Trip,
    pub items: Vec<TripItem>,
}

/// Reject non-positive quantities before they reach the service
fn validate_quantity(quantity: i32) -> Result<(), SharedError> {
    if quantity < 1 {
        return Err(SharedError::validation(
            "quantity",
            "must be a positive integer",
        ));
    }
    Ok(())
}

/// Create a trip (POST /api/trips)
///
/// When a household is given, the creator must be one of its members.
pub async fn create_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<Trip>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name", "cannot be empty"));
    }

    if let Some(household_id) = request.household_id {
        if !households::db::is_member(&state.db, household_id, user.user_id).await? {
            return Err(AppError::NotAuthorized);
        }
    }

    let trip = db::create_trip(&state.db, request.household_id, name, user.user_id).await?;
    tracing::info!("[Trips] User {} created trip {}", user.user_id, trip.id);

    Ok(Json(trip))
}

/// List a household's trips (GET /api/households/{id}/trips)
pub async fn list_trips(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(household_id): Path<Uuid>,
) -> Result<Json<Vec<Trip>>, AppError> {
    if !households::db::is_member(&state.db, household_id, user.user_id).await? {
        return Err(AppError::NotAuthorized);
    }

    let trips = db::get_trips_for_household(&state.db, household_id).await?;
    Ok(Json(trips))
}

/// Fetch one trip with its items (GET /api/trips/{id})
pub async fn get_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<TripWithItems>, AppError> {
    let trip = db::get_trip_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip"))?;

    access::ensure_collaborator(&state.db, trip_id, user.user_id).await?;

    let items = db::get_items_for_trip(&state.db, trip_id).await?;
    Ok(Json(TripWithItems { trip, items }))
}

/// Add a collaborator (POST /api/trips/{id}/collaborators)
///
/// Any current collaborator may add another user.
pub async fn add_collaborator(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
    Json(request): Json<AddCollaboratorRequest>,
) -> Result<Json<TripCollaborator>, AppError> {
    db::get_trip_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip"))?;

    access::ensure_collaborator(&state.db, trip_id, user.user_id).await?;

    let collaborator = db::add_collaborator(&state.db, trip_id, request.user_id).await?;
    tracing::info!(
        "[Trips] User {} added collaborator {} to trip {}",
        user.user_id,
        request.user_id,
        trip_id
    );

    Ok(Json(collaborator))
}

/// Mark a trip as being shopped (POST /api/trips/{id}/start)
pub async fn start_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    db::get_trip_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip"))?;

    access::ensure_collaborator(&state.db, trip_id, user.user_id).await?;

    let trip = db::set_trip_status(&state.db, trip_id, TripStatus::Shopping).await?;
    Ok(Json(trip))
}

/// Complete a trip (POST /api/trips/{id}/complete)
///
/// Marks the trip completed and closes its event channel; every live
/// subscriber observes a clean end of stream.
pub async fn complete_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    db::get_trip_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip"))?;

    access::ensure_collaborator(&state.db, trip_id, user.user_id).await?;

    let trip = db::set_trip_status(&state.db, trip_id, TripStatus::Completed).await?;

    state.trip_channels.close_trip(trip_id);
    tracing::info!("[Trips] Trip {} completed by {}", trip_id, user.user_id);

    Ok(Json(trip))
}

/// Delete a trip (DELETE /api/trips/{id})
///
/// Removes the trip and its items, and closes the event channel.
pub async fn delete_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::get_trip_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip"))?;

    access::ensure_collaborator(&state.db, trip_id, user.user_id).await?;

    db::delete_trip(&state.db, trip_id).await?;

    state.trip_channels.close_trip(trip_id);
    tracing::info!("[Trips] Trip {} deleted by {}", trip_id, user.user_id);

    Ok(Json(serde_json::json!({ "deleted": trip_id })))
}

/// Add an item to a trip (POST /api/trips/{id}/items)
pub async fn add_trip_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
    Json(request): Json<AddTripItemRequest>,
) -> Result<Json<TripItem>, AppError> {
    validate_quantity(request.quantity)?;

    let item = service::add_item(
        &state.db,
        &state.trip_channels,
        trip_id,
        user.user_id,
        NewTripItem {
            inventory_item_id: request.inventory_item_id,
            quantity: request.quantity,
            notes: request.notes,
            store_id: request.store_id,
        },
    )
    .await?;

    Ok(Json(item))
}

/// Update a trip item (PUT /api/trip-items/{id})
pub async fn update_trip_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<UpdateTripItemRequest>,
) -> Result<Json<TripItem>, AppError> {
    validate_quantity(request.quantity)?;

    let item = service::update_item(
        &state.db,
        &state.trip_channels,
        item_id,
        user.user_id,
        TripItemUpdate {
            quantity: request.quantity,
            notes: request.notes,
            store_id: request.store_id,
        },
    )
    .await?;

    Ok(Json(item))
}

/// Check or uncheck a trip item (POST /api/trip-items/{id}/check)
pub async fn check_trip_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<CheckTripItemRequest>,
) -> Result<Json<TripItem>, AppError> {
    let item = service::check_item(
        &state.db,
        &state.trip_channels,
        item_id,
        user.user_id,
        request.is_checked,
    )
    .await?;

    Ok(Json(item))
}

/// Remove a trip item (DELETE /api/trip-items/{id})
pub async fn delete_trip_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    service::delete_item(&state.db, &state.trip_channels, item_id, user.user_id).await?;

    Ok(Json(serde_json::json!({ "deleted": item_id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(12).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
