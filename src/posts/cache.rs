/**
 * Listing Cache
 *
 * Per-user, time-expiring cache of materialized post listings. Each entry
 * holds the summaries captured at fetch time and stays valid for the TTL
 * (5 minutes); any create or delete for a user removes that user's entry
 * before the mutating call returns.
 *
 * The cache is process-local shared state behind a mutex, so every map
 * operation is atomic. Two concurrent misses for the same user may still
 * each fetch and write; whichever writes last wins, and both writes are
 * equally fresh at write time. Separate processes never see each other's
 * entries - a write on one instance does not invalidate another's cache.
 * The cache is a disposable view over the post store, rebuildable at any
 * time, never a source of truth.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::posts::store::PostSummary;

/// How long a cached listing stays valid
pub const LISTING_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    posts: Vec<PostSummary>,
    captured_at: Instant,
}

/// Per-user cache of post listings, keyed by user ID
#[derive(Clone)]
pub struct ListingCache {
    entries: Arc<Mutex<HashMap<i64, CacheEntry>>>,
    ttl: Duration,
}

impl ListingCache {
    /// Create a cache with the standard 5-minute TTL
    pub fn new() -> Self {
        Self::with_ttl(LISTING_TTL)
    }

    /// Create a cache with an explicit TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Return the cached listing for a user, if present and fresh
    ///
    /// An expired entry counts as a miss and is dropped on the way out.
    pub fn get(&self, user_id: i64) -> Option<Vec<PostSummary>> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(&user_id) {
            Some(entry) if entry.captured_at.elapsed() < self.ttl => Some(entry.posts.clone()),
            Some(_) => {
                entries.remove(&user_id);
                None
            }
            None => None,
        }
    }

    /// Store a listing for a user, overwriting any prior entry
    pub fn put(&self, user_id: i64, posts: Vec<PostSummary>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            user_id,
            CacheEntry {
                posts,
                captured_at: Instant::now(),
            },
        );
    }

    /// Remove a user's entry; no-op when absent
    pub fn invalidate(&self, user_id: i64) {
        self.entries.lock().unwrap().remove(&user_id);
    }
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary(id: i64, text: &str) -> PostSummary {
        PostSummary {
            id,
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_get_miss_on_empty() {
        let cache = ListingCache::new();
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn test_put_then_get() {
        let cache = ListingCache::new();
        cache.put(1, vec![summary(10, "hello")]);

        let posts = cache.get(1).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "hello");
    }

    #[test]
    fn test_entries_are_per_user() {
        let cache = ListingCache::new();
        cache.put(1, vec![summary(10, "mine")]);

        assert!(cache.get(2).is_none());
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = ListingCache::with_ttl(Duration::ZERO);
        cache.put(1, vec![summary(10, "stale")]);

        assert!(cache.get(1).is_none());
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = ListingCache::new();
        cache.put(1, vec![summary(10, "hello")]);

        cache.invalidate(1);
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn test_invalidate_absent_is_noop() {
        let cache = ListingCache::new();
        cache.invalidate(42);
    }

    #[test]
    fn test_put_overwrites() {
        let cache = ListingCache::new();
        cache.put(1, vec![summary(10, "old")]);
        cache.put(1, vec![summary(11, "new")]);

        let posts = cache.get(1).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "new");
    }
}
