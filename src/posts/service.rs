/**
 * Post Service
 *
 * Create/list/delete orchestration over the post store and the listing
 * cache, always under an already-resolved user identity. The service owns
 * its cache instance; cache lifetime is the process lifetime.
 *
 * # Cache Discipline
 *
 * Mutations invalidate the owner's cache entry after the store write
 * returns and before the service call returns, so a caller that mutates and
 * immediately re-lists sees its own write. Listing populates the cache on a
 * miss and serves the entry unchanged on a hit for up to the TTL.
 */

use std::sync::Arc;

use crate::error::ApiError;
use crate::posts::cache::ListingCache;
use crate::posts::store::{PostStore, PostSummary};

/// Post create/list/delete under a resolved user identity
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
    cache: ListingCache,
}

impl PostService {
    /// Create a service with the standard 5-minute listing cache
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self::with_cache(store, ListingCache::new())
    }

    /// Create a service with an explicit cache (shorter TTLs in tests)
    pub fn with_cache(store: Arc<dyn PostStore>, cache: ListingCache) -> Self {
        Self { store, cache }
    }

    /// Create a post owned by `user_id` and return its ID
    pub async fn create_post(&self, user_id: i64, text: &str) -> Result<i64, ApiError> {
        let post = self.store.create(user_id, text).await?;

        // Invalidate after the write committed, before returning.
        self.cache.invalidate(user_id);

        tracing::info!("post {} created for user {}", post.id, user_id);

        Ok(post.id)
    }

    /// List the user's posts, serving from the cache when fresh
    pub async fn get_posts(&self, user_id: i64) -> Result<Vec<PostSummary>, ApiError> {
        if let Some(posts) = self.cache.get(user_id) {
            tracing::debug!("listing cache hit for user {}", user_id);
            return Ok(posts);
        }

        tracing::debug!("listing cache miss for user {}", user_id);

        let posts = self.store.find_by_owner(user_id).await?;
        let summaries: Vec<PostSummary> = posts.iter().map(|post| post.summary()).collect();

        self.cache.put(user_id, summaries.clone());

        Ok(summaries)
    }

    /// Delete a post owned by `user_id`
    ///
    /// # Errors
    ///
    /// * `NotFoundOrForbidden` - no post with that ID is owned by this user;
    ///   deliberately one error for "doesn't exist" and "not yours"
    pub async fn delete_post(&self, user_id: i64, post_id: i64) -> Result<(), ApiError> {
        let deleted = self.store.delete(post_id, user_id).await?;

        if !deleted {
            tracing::warn!(
                "delete of post {} refused for user {}: not found or not owned",
                post_id,
                user_id
            );
            return Err(ApiError::NotFoundOrForbidden);
        }

        self.cache.invalidate(user_id);

        tracing::info!("post {} deleted by user {}", post_id, user_id);

        Ok(())
    }
}
