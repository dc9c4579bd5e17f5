/**
 * Post Model and Store
 *
 * This module defines the post record, the listing summary shape, and the
 * persistence interface. Ownership is fixed at creation; the only mutation
 * after creation is owner-scoped deletion.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::StoreError;

/// Post record as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID
    pub id: i64,
    /// Owning user's ID, fixed at creation
    pub user_id: i64,
    /// Post content (UTF-8, size-bounded at the HTTP boundary)
    pub text: String,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Post shape returned by the listing endpoint and held in the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Materialize the listing summary for this post
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            text: self.text.clone(),
            created_at: self.created_at,
        }
    }
}

/// Persistence interface for post records
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post owned by `owner_id`
    async fn create(&self, owner_id: i64, text: &str) -> Result<Post, StoreError>;

    /// All posts owned by a user, in insertion order
    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Post>, StoreError>;

    /// Look up a post by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError>;

    /// Delete a post, but only if it exists and is owned by `owner_id`
    ///
    /// Returns `false` (not an error) when no matching row exists. This
    /// owner-filtered delete is the sole ownership check for deletion.
    async fn delete(&self, post_id: i64, owner_id: i64) -> Result<bool, StoreError>;
}

/// Postgres-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, owner_id: i64, text: &str) -> Result<Post, StoreError> {
        let now = Utc::now();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, text, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, text, created_at
            "#,
        )
        .bind(owner_id)
        .bind(text)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, text, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, text, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete(&self, post_id: i64, owner_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
