//! Cartful - Main Library
//!
//! Cartful is a collaborative grocery shopping backend. Members of a
//! household share an inventory catalog, their stores, and shopping
//! trips whose checklists several people can work through at the same
//! time; every item mutation is fanned out live to everyone currently
//! streaming that trip.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared across handlers and the event stream
//!   - Domain models (households, inventory, stores, trips, trip items)
//!   - The `TripEvent` tagged union delivered to subscribers
//!   - Validation error types
//!
//! - **`backend`** - The Axum HTTP server
//!   - CRUD endpoints for households, inventory, stores, and trips
//!   - JWT authentication and the auth middleware
//!   - The per-trip event channel registry and SSE streaming endpoint
//!   - PostgreSQL persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use cartful::backend::server::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app().await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Types shared across handlers and the event stream
pub mod shared;

/// Server-side code (Axum HTTP server)
pub mod backend;
