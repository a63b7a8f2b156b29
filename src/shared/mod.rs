//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the HTTP handlers, the trip mutation service, and the real-time event
//! stream. All types are designed for serialization and transmission over
//! HTTP.

/// Domain model data structures
pub mod models;

/// Real-time trip event system
pub mod event;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use models::{
    Household, HouseholdMember, InventoryItem, Store, Trip, TripCollaborator, TripItem,
    TripStatus,
};
pub use event::{TripEvent, TripEventKind};
pub use error::SharedError;
