//! Real-time Trip Collaboration Module
//!
//! This module provides the real-time fan-out path for shopping trips:
//! mutations to a trip's checklist become ordered events delivered to every
//! client currently streaming that trip.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`registry`** - Per-trip broadcast channel registry (the pub/sub hub)
//! - **`subscription`** - Server-Sent Events subscription handler
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── registry.rs     - Per-trip channel registry
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery Model
//!
//! Fire-and-forget, in-process multicast. Events are never stored: a trip
//! with no open channel silently discards its events, disconnected clients
//! get no replay, and the whole structure is rebuilt empty on restart.
//! Within one trip, events are delivered to each subscriber in publish
//! order; there is no ordering across trips.

/// Per-trip broadcast channel registry
pub mod registry;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use registry::TripChannelRegistry;
pub use subscription::handle_trip_subscription;
