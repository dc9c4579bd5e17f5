//! Routes Module
//!
//! HTTP route configuration:
//!
//! - **`router`** - main router assembly (health/root endpoints, middleware
//!   layers)
//! - **`api_routes`** - API endpoint wiring, including the auth middleware
//!   on post routes

pub mod api_routes;
pub mod router;

pub use router::create_router;
