//! Stores Module
//!
//! Stores are the places a household shops at. Trip items can optionally
//! point at a store so shoppers can split a trip by location.

/// Database operations for stores
pub mod db;

/// HTTP handlers for store endpoints
pub mod handlers;
