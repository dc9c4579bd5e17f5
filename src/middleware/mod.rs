//! Middleware Module
//!
//! HTTP middleware for the server:
//!
//! - **`auth`** - bearer-token authentication for protected routes, plus the
//!   request authenticator it is built on
//! - **`timing`** - `X-Process-Time` response header

pub mod auth;
pub mod timing;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser, RequestAuthenticator};
pub use timing::timing_middleware;
