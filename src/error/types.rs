/**
 * API Error Types
 *
 * This module defines the error taxonomy for the service. Every failure a
 * handler can produce maps to exactly one `ApiError` variant, which carries
 * a machine-readable kind and a human-readable message.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * - `DuplicateEmail` - signup with an email that is already registered
 * - `InvalidCredentials` - login with an unknown email or a wrong password
 *   (deliberately the same variant for both, to avoid user enumeration)
 * - `InvalidToken` / `ExpiredToken` - bearer token failures
 * - `Unauthorized` - umbrella for any token failure past the authenticator
 *
 * ## Post Errors
 *
 * - `NotFoundOrForbidden` - deletion of a post that doesn't exist or belongs
 *   to another user (deliberately one variant, to avoid leaking existence)
 *
 * ## Infrastructure Errors
 *
 * - `Validation` - request body rejected before reaching a service
 * - `Persistence` - underlying storage failure, never retried internally
 * - `Internal` - uncategorized server-side failure
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Storage-level error returned by the user and post stores
///
/// Store implementations surface unique-constraint violations as a distinct
/// variant so callers can map them to domain errors (e.g. signup mapping a
/// violation on `users.email` to `DuplicateEmail`).
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("unique constraint violated on {0}")]
    UniqueViolation(&'static str),

    /// Any other database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Service-level error type
///
/// Each variant renders as a JSON error response with the status code from
/// `status_code()` and the kind string from `kind()`. Internal details
/// (database messages, source errors) never cross the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Signup with an email that already has an account
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login failed - unknown email or wrong password, indistinguishable
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Bearer token failed signature or structural validation
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Bearer token is past its expiry
    #[error("Authentication token expired")]
    ExpiredToken,

    /// Request to a protected route could not be tied to a user
    #[error("Could not validate credentials")]
    Unauthorized,

    /// Post doesn't exist or belongs to someone else
    #[error("Post not found or doesn't belong to you")]
    NotFoundOrForbidden,

    /// Request body rejected by validation
    #[error("{0}")]
    Validation(String),

    /// Underlying storage failure
    #[error("Internal server error")]
    Persistence(#[source] StoreError),

    /// Uncategorized server-side failure (hashing, token encoding)
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Machine-readable error kind, stable across releases
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidToken => "invalid_token",
            Self::ExpiredToken => "expired_token",
            Self::Unauthorized => "unauthorized",
            Self::NotFoundOrForbidden => "not_found_or_forbidden",
            Self::Validation(_) => "validation_error",
            Self::Persistence(_) => "persistence_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateEmail` - 409 Conflict
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `InvalidToken` / `ExpiredToken` / `Unauthorized` - 401 Unauthorized
    /// - `NotFoundOrForbidden` - 404 Not Found
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Persistence` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::ExpiredToken => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFoundOrForbidden => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message, safe to return to clients
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Persistence(err)
    }
}
