//! Posts Module
//!
//! This module handles post creation, listing, and deletion, scoped to the
//! owning user.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports
//! ├── store.rs    - Post model and store
//! ├── cache.rs    - Per-user listing cache (5-minute TTL)
//! ├── service.rs  - Create/list/delete orchestration
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Ownership
//!
//! Every post has exactly one owner, fixed at creation. Listing only ever
//! returns the caller's posts; deletion goes through an owner-filtered
//! delete so a user cannot remove anyone else's post.

/// Post model and store
pub mod store;

/// Per-user listing cache
pub mod cache;

/// Create/list/delete orchestration
pub mod service;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use cache::{ListingCache, LISTING_TTL};
pub use handlers::{create_post, delete_post, get_posts};
pub use service::PostService;
pub use store::{PgPostStore, Post, PostStore, PostSummary};
