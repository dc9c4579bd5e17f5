//! Error Module
//!
//! This module defines the error types used across the service and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError and StoreError definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Design
//!
//! Domain errors are ordinary return values, not panics: services return
//! `Result<_, ApiError>` and handlers propagate with `?`. The `IntoResponse`
//! implementation renders each error as a JSON body with a machine-readable
//! kind, a human message, and the mapped status code. Storage errors are
//! wrapped in `ApiError::Persistence` and surface as a generic 500 without
//! internal detail.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, StoreError};
