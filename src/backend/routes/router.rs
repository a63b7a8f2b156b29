/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes: signup and login (no token required)
 * 2. Protected routes: everything else, behind the auth middleware,
 *    including the SSE trip event stream
 * 3. Fallback handler for unknown paths
 *
 * The authentication middleware runs before any protected handler, so an
 * unauthenticated subscription attempt is refused before a single stream
 * byte is written.
 */

use axum::{http::StatusCode, middleware, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::backend::auth::{login, signup};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool + channel registry)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    // Public authentication endpoints
    let public = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login));

    // Everything else requires a valid Bearer token
    let protected = configure_api_routes().route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_middleware,
    ));

    public
        .merge(protected)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
