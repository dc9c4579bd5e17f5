/**
 * Login Handler
 *
 * Implements user authentication for POST /api/login.
 *
 * # Security Notes
 *
 * - Unknown email and wrong password produce the identical 401 response,
 *   preventing account enumeration
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords are never logged or echoed back
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::LoginRequest;
use crate::auth::service::{AuthService, IssuedTokens};
use crate::error::ApiError;

/// Login handler
///
/// # Arguments
///
/// * `State(auth)` - Auth service
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// JSON response with the access token pair, or an error
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - storage or token failure
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<IssuedTokens>, ApiError> {
    tracing::info!("login request for email: {}", request.email);

    let tokens = auth.login(&request.email, &request.password).await?;

    Ok(Json(tokens))
}
