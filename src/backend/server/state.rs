/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The PostgreSQL connection pool
 * - The per-trip event channel registry
 *
 * # Thread Safety
 *
 * Both fields are cheap to clone and designed for concurrent access:
 * `PgPool` is an internally shared pool, and `TripChannelRegistry`
 * clones share one underlying channel map.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. Handlers
 * that only touch the database take `State<PgPool>`; handlers that also
 * publish or close trip channels take `State<AppState>`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::realtime::TripChannelRegistry;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: PgPool,

    /// Per-trip event channel registry
    ///
    /// The only shared mutable structure of the real-time core. Mutation
    /// handlers publish through it and the streaming endpoint subscribes
    /// through it; nothing else touches the underlying map.
    pub trip_channels: TripChannelRegistry,
}

/// Allow handlers to extract the database pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the channel registry directly
impl FromRef<AppState> for TripChannelRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.trip_channels.clone()
    }
}
