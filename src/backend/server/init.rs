/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: configuration loading, state creation, and route assembly.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Create the per-trip event channel registry (empty; channels are
 *    opened lazily by the first subscriber and are rebuilt from nothing
 *    after every restart)
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::realtime::TripChannelRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is unreachable or migrations cannot run.
pub async fn create_app() -> Result<Router<()>, Box<dyn std::error::Error>> {
    tracing::info!("Initializing Cartful backend server");

    let db = load_database().await?;

    // Trip channels live purely in memory; subscribers must resubscribe
    // after a restart.
    let trip_channels = TripChannelRegistry::new();

    let app_state = AppState { db, trip_channels };

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
