/**
 * Auth Service
 *
 * Orchestrates signup and login over the user store, the password hasher,
 * and the token service. Both operations end by minting a bearer token with
 * the user's email as subject.
 *
 * # Security
 *
 * - Login returns the identical error for "unknown email" and "wrong
 *   password", so responses cannot be used to enumerate accounts.
 * - Signup pre-checks the email, and additionally maps the database
 *   unique-constraint violation to the same `DuplicateEmail` error, closing
 *   the window between check and insert.
 */

use std::sync::Arc;

use serde::Serialize;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::sessions::TokenService;
use crate::auth::users::UserStore;
use crate::error::{ApiError, StoreError};

/// Token pair returned by signup and login
#[derive(Debug, Serialize)]
pub struct IssuedTokens {
    /// Signed bearer token
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Signup and login orchestration
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and return a bearer token
    ///
    /// # Errors
    ///
    /// * `DuplicateEmail` - an account with this email already exists
    /// * `Persistence` - the store failed
    pub async fn signup(&self, email: &str, password: &str) -> Result<IssuedTokens, ApiError> {
        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("signup rejected, email already registered: {}", email);
            return Err(ApiError::DuplicateEmail);
        }

        let hashed_password = hash_password(password).map_err(|err| {
            tracing::error!("failed to hash password: {:?}", err);
            ApiError::Internal(err.to_string())
        })?;

        let user = match self.users.create(email, &hashed_password).await {
            Ok(user) => user,
            // The unique constraint caught a concurrent signup between the
            // pre-check and the insert.
            Err(StoreError::UniqueViolation(_)) => {
                tracing::warn!("signup lost uniqueness race for: {}", email);
                return Err(ApiError::DuplicateEmail);
            }
            Err(err) => return Err(ApiError::Persistence(err)),
        };

        tracing::info!("user created: {} (id {})", user.email, user.id);

        self.issue_for(&user.email)
    }

    /// Authenticate an existing user and return a bearer token
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown email or wrong password
    /// * `Persistence` - the store failed
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedTokens, ApiError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!("login failed, no such user: {}", email);
                return Err(ApiError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.hashed_password) {
            tracing::warn!("login failed, wrong password for: {}", email);
            return Err(ApiError::InvalidCredentials);
        }

        tracing::info!("user logged in: {}", user.email);

        self.issue_for(&user.email)
    }

    fn issue_for(&self, email: &str) -> Result<IssuedTokens, ApiError> {
        let access_token = self.tokens.issue(email).map_err(|err| {
            tracing::error!("failed to issue token: {:?}", err);
            ApiError::Internal(err.to_string())
        })?;

        Ok(IssuedTokens {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
