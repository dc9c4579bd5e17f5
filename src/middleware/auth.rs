/**
 * Authentication Middleware
 *
 * This module provides the request authenticator and the axum middleware
 * that protects routes requiring a logged-in user. The middleware extracts
 * the bearer token from the Authorization header, resolves it to a user,
 * and attaches the identity to request extensions for handlers.
 *
 * Resource-level ownership is never checked here; that belongs to the post
 * store's owner-filtered delete.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::{TokenError, TokenService};
use crate::auth::users::{User, UserStore};
use crate::error::ApiError;

/// Authenticated user identity attached to request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// Resolves bearer tokens to user records
///
/// The single choke point for protected operations: token verification
/// followed by a subject lookup. Any token failure collapses to
/// `Unauthorized` at this boundary.
#[derive(Clone)]
pub struct RequestAuthenticator {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl RequestAuthenticator {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Resolve a bearer token string to the acting user
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - the token is invalid or expired, or its subject
    ///   no longer matches a user
    /// * `Persistence` - the user lookup failed
    pub async fn resolve(&self, token: &str) -> Result<User, ApiError> {
        let claims = self.tokens.verify(token).map_err(|err| {
            match err {
                TokenError::Expired => tracing::warn!("rejected expired token"),
                TokenError::Invalid => tracing::warn!("rejected invalid token"),
            }
            ApiError::Unauthorized
        })?;

        let user = self
            .users
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!("token subject has no matching user: {}", claims.sub);
                ApiError::Unauthorized
            })?;

        Ok(user)
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Resolves it to a user via the request authenticator
/// 3. Attaches `AuthenticatedUser` to request extensions for handlers
///
/// Returns 401 Unauthorized if the token is missing, invalid, or expired.
pub async fn auth_middleware(
    State(authenticator): State<RequestAuthenticator>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::Unauthorized
    })?;

    let user = authenticator.resolve(token).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter on routes behind `auth_middleware` to get the
/// identity the middleware resolved.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })
    }
}
