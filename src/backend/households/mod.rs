//! Households Module
//!
//! Households are the sharing boundary of the application: inventory,
//! stores, and (usually) trips belong to a household, and users join one
//! via its invite code.
//!
//! # Module Structure
//!
//! ```text
//! households/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Database operations for households and memberships
pub mod db;

/// HTTP handlers for household endpoints
pub mod handlers;
