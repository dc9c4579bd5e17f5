//! Postline - Main Library
//!
//! Postline is a minimal multi-user posting service: users sign up or log in
//! with email and password, receive a bearer token, and create, list, and
//! delete short text posts scoped to their own account. Listings are served
//! from a per-user in-process cache with a five-minute window.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, login, password hashing, bearer tokens, and
//!   the user store
//! - **`posts`** - post store, per-user listing cache, and the post service
//! - **`middleware`** - bearer-token authentication and request timing
//! - **`error`** - the error taxonomy and its HTTP rendering
//! - **`routes`** - route configuration
//! - **`server`** - configuration, application state, and assembly
//!
//! # Usage
//!
//! ```rust,no_run
//! use postline::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Authentication: users, passwords, tokens
pub mod auth;

/// Posts: store, cache, service
pub mod posts;

/// HTTP middleware
pub mod middleware;

/// Error taxonomy and HTTP rendering
pub mod error;

/// Route configuration
pub mod routes;

/// Server configuration and assembly
pub mod server;
