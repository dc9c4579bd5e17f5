/**
 * Signup Handler
 *
 * Implements user registration for POST /api/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password strength
 * 2. Delegate to the auth service (duplicate check, hash, create, token)
 * 3. Return the bearer token pair
 *
 * # Validation
 *
 * - Email must have a local part and a dotted domain
 * - Password must be 8-100 characters with at least one digit, one
 *   uppercase letter, and one special character
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::SignupRequest;
use crate::auth::service::{AuthService, IssuedTokens};
use crate::error::ApiError;

/// Validate email shape: a non-empty local part and a dotted domain
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Check password strength, returning the violated rule if any
pub(crate) fn password_strength_error(password: &str) -> Option<&'static str> {
    const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/\\";

    if password.len() < 8 {
        return Some("Password must be at least 8 characters");
    }
    if password.len() > 100 {
        return Some("Password must be at most 100 characters");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one digit");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| SPECIAL.contains(c)) {
        return Some("Password must contain at least one special character");
    }

    None
}

/// Sign up handler
///
/// # Arguments
///
/// * `State(auth)` - Auth service
/// * `Json(request)` - Signup request containing email and password
///
/// # Returns
///
/// JSON response with the access token pair, or an error
///
/// # Errors
///
/// * `422 Unprocessable Entity` - invalid email or weak password
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing, storage, or token failure
pub async fn signup(
    State(auth): State<AuthService>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<IssuedTokens>, ApiError> {
    tracing::info!("signup request for email: {}", request.email);

    if !is_valid_email(&request.email) {
        tracing::warn!("signup rejected, invalid email format: {}", request.email);
        return Err(ApiError::validation("Invalid email format"));
    }

    if let Some(reason) = password_strength_error(&request.password) {
        tracing::warn!("signup rejected, weak password for: {}", request.email);
        return Err(ApiError::validation(reason));
    }

    let tokens = auth.signup(&request.email, &request.password).await?;

    Ok(Json(tokens))
}
