//! Backend Module
//!
//! This module contains all server-side code for the Cartful application:
//! an Axum HTTP server with household/inventory/store/trip CRUD and
//! real-time trip collaboration over Server-Sent Events.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`middleware`** - Request processing middleware
//! - **`households`** - Households and memberships
//! - **`inventory`** - Per-household grocery catalog
//! - **`stores`** - Per-household stores
//! - **`trips`** - Trips, the collaborator gate, and the item mutation service
//! - **`realtime`** - Per-trip event channels and the SSE subscription endpoint
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── households/     - Households and memberships
//! ├── inventory/      - Inventory catalog
//! ├── stores/         - Stores
//! ├── trips/          - Trips and item mutations
//! ├── realtime/       - Event channels and streaming
//! └── error/          - Error types
//! ```
//!
//! # Real-time Data Flow
//!
//! A mutation request flows: handler → collaborator gate → database →
//! event published to the trip's channel → fan-out to every live SSE
//! subscriber of that trip. Events are in-process and fire-and-forget;
//! nothing is replayed to late or disconnected subscribers.
//!
//! # Thread Safety
//!
//! All backend code is designed for concurrent access:
//! - The channel registry's map is the only shared mutable structure
//! - `broadcast::Sender` fan-out is lock-free per subscriber
//! - Axum handlers are `Send + Sync`
//! - The database pool is internally shared

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Households and memberships
pub mod households;

/// Per-household inventory catalog
pub mod inventory;

/// Per-household stores
pub mod stores;

/// Trips, collaborator gate, and item mutation service
pub mod trips;

/// Real-time trip event channels and streaming
pub mod realtime;

// Re-export commonly used types
pub use error::AppError;
pub use realtime::TripChannelRegistry;
pub use server::create_app;
