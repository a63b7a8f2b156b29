/**
 * API Route Table
 *
 * This module defines the protected API routes: everything behind the
 * authentication middleware. Public routes (signup, login) live in the
 * router module.
 *
 * # Routes
 *
 * ## Profile
 * - `GET /api/auth/me` - Get current user info
 *
 * ## Households
 * - `POST /api/households` - Create a household
 * - `GET /api/households` - List the caller's households
 * - `POST /api/households/join` - Join by invite code
 * - `GET /api/households/{household_id}/members` - List members
 *
 * ## Inventory & Stores
 * - `GET|POST /api/households/{household_id}/inventory`
 * - `PUT|DELETE /api/inventory/{item_id}`
 * - `GET|POST /api/households/{household_id}/stores`
 * - `PUT|DELETE /api/stores/{store_id}`
 *
 * ## Trips
 * - `POST /api/trips` - Create a trip
 * - `GET /api/households/{household_id}/trips` - List a household's trips
 * - `GET|DELETE /api/trips/{trip_id}` - Fetch / delete one trip
 * - `POST /api/trips/{trip_id}/collaborators` - Add a collaborator
 * - `POST /api/trips/{trip_id}/start` - Mark as being shopped
 * - `POST /api/trips/{trip_id}/complete` - Complete (closes the event channel)
 *
 * ## Trip Items (each mutation publishes one event)
 * - `POST /api/trips/{trip_id}/items` - Add an item
 * - `PUT /api/trip-items/{item_id}` - Update an item
 * - `POST /api/trip-items/{item_id}/check` - Check/uncheck an item
 * - `DELETE /api/trip-items/{item_id}` - Remove an item
 *
 * ## Streaming
 * - `GET /api/trips/{trip_id}/events` - SSE trip event subscription
 */

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::backend::auth::get_me;
use crate::backend::households::handlers as households;
use crate::backend::inventory::handlers as inventory;
use crate::backend::realtime::handle_trip_subscription;
use crate::backend::server::state::AppState;
use crate::backend::stores::handlers as stores;
use crate::backend::trips::handlers as trips;

/// Build the protected API route table
///
/// The caller wraps the returned router in the authentication middleware;
/// every handler here assumes an `AuthenticatedUser` extension is present.
pub fn configure_api_routes() -> Router<AppState> {
    Router::new()
        // Profile
        .route("/api/auth/me", get(get_me))
        // Households
        .route(
            "/api/households",
            post(households::create_household).get(households::list_households),
        )
        .route("/api/households/join", post(households::join_household))
        .route(
            "/api/households/{household_id}/members",
            get(households::list_members),
        )
        // Inventory
        .route(
            "/api/households/{household_id}/inventory",
            get(inventory::list_inventory).post(inventory::create_inventory_item),
        )
        .route(
            "/api/inventory/{item_id}",
            put(inventory::update_inventory_item).delete(inventory::delete_inventory_item),
        )
        // Stores
        .route(
            "/api/households/{household_id}/stores",
            get(stores::list_stores).post(stores::create_store),
        )
        .route(
            "/api/stores/{store_id}",
            put(stores::update_store).delete(stores::delete_store),
        )
        // Trips
        .route("/api/trips", post(trips::create_trip))
        .route("/api/households/{household_id}/trips", get(trips::list_trips))
        .route(
            "/api/trips/{trip_id}",
            get(trips::get_trip).delete(trips::delete_trip),
        )
        .route(
            "/api/trips/{trip_id}/collaborators",
            post(trips::add_collaborator),
        )
        .route("/api/trips/{trip_id}/start", post(trips::start_trip))
        .route("/api/trips/{trip_id}/complete", post(trips::complete_trip))
        // Trip items
        .route("/api/trips/{trip_id}/items", post(trips::add_trip_item))
        .route(
            "/api/trip-items/{item_id}",
            put(trips::update_trip_item).delete(trips::delete_trip_item),
        )
        .route(
            "/api/trip-items/{item_id}/check",
            post(trips::check_trip_item),
        )
        // Streaming
        .route("/api/trips/{trip_id}/events", get(handle_trip_subscription))
}
