//! Trips Module
//!
//! Shopping trips and their checklists. This module owns the trip
//! lifecycle, the collaborator authorization gate, and the item mutation
//! service that feeds the real-time event channels.
//!
//! # Module Structure
//!
//! ```text
//! trips/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Trip and trip-item persistence
//! ├── access.rs   - Collaborator authorization gate
//! ├── service.rs  - Item mutation service (persist, then publish)
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Authorization Model
//!
//! A trip has exactly one access tier: its creator and its listed
//! collaborators may read it, mutate its items, and subscribe to its event
//! stream. There is no separate read-only tier; the event stream carries
//! the same content a collaborator could already read via normal queries.

/// Trip and trip-item persistence
pub mod db;

/// Collaborator authorization gate
pub mod access;

/// Item mutation service
pub mod service;

/// HTTP handlers for trip endpoints
pub mod handlers;
