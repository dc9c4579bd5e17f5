/**
 * User Model and Store
 *
 * This module defines the user record and the persistence interface for it.
 * The `UserStore` trait keeps the relational engine behind a seam; the
 * production implementation is `PgUserStore` over a sqlx Postgres pool.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::StoreError;

/// User record as stored in the database
///
/// Users are created at signup and immutable afterwards; there is no update
/// or delete path through the service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Email address (unique, stored case-sensitively)
    pub email: String,
    /// Bcrypt password hash
    pub hashed_password: String,
}

/// Persistence interface for user records
///
/// Single-row operations only; each write is its own transaction, so a
/// failed create leaves nothing behind.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user
    ///
    /// Fails with `StoreError::UniqueViolation` when the email is already
    /// taken - the database constraint is the authoritative uniqueness check.
    async fn create(&self, email: &str, hashed_password: &str) -> Result<User, StoreError>;

    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
}

/// Postgres-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, email: &str, hashed_password: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, hashed_password)
            VALUES ($1, $2)
            RETURNING id, email, hashed_password
            "#,
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::UniqueViolation("users.email")
            }
            _ => StoreError::Database(err),
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
