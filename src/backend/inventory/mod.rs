//! Inventory Module
//!
//! A household's inventory is its catalog of known groceries. Trip items
//! reference inventory items rather than free-text names, so the catalog
//! is shared across trips.

/// Database operations for inventory items
pub mod db;

/// HTTP handlers for inventory endpoints
pub mod handlers;
