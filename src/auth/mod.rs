//! Authentication Module
//!
//! This module handles user registration, login, password hashing, and
//! bearer tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── password.rs - Bcrypt hashing and verification
//! ├── sessions.rs - Token issuance and validation
//! ├── users.rs    - User model and store
//! ├── service.rs  - Signup/login orchestration
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → user row created → bearer token returned
//! 2. **Login**: email + password → credentials verified → bearer token returned
//! 3. **Protected request**: bearer token → verified and resolved to a user
//!    by the request authenticator (see `crate::middleware::auth`)
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage and never returned
//! - Tokens are HS256-signed, expire after a configurable TTL (30 minutes
//!   by default), and are never persisted or revoked early
//! - Invalid credentials return one indistinguishable 401

/// Bcrypt password hashing
pub mod password;

/// Bearer token issuance and validation
pub mod sessions;

/// User model and store
pub mod users;

/// Signup/login orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, signup, LoginRequest, SignupRequest};
pub use service::{AuthService, IssuedTokens};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{PgUserStore, User, UserStore};
