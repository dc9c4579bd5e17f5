//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - **`signup`** - POST /api/signup - user registration
//! - **`login`** - POST /api/login - user authentication
//!
//! Both return `{access_token, token_type}` on success.

/// Request types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use login::login;
pub use signup::signup;
pub use types::{LoginRequest, SignupRequest};
