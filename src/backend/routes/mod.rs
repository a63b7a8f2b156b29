//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly (public + protected + middleware)
//! └── api_routes.rs - Protected API route table
//! ```

/// Router assembly
pub mod router;

/// Protected API route table
pub mod api_routes;

pub use router::create_router;
