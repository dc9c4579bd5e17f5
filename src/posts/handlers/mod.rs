//! Post Handlers Module
//!
//! HTTP handlers for the post endpoints, all behind the auth middleware:
//!
//! - **`create_post`** - POST /api/posts - create a post
//! - **`get_posts`** - GET /api/posts - list the caller's posts
//! - **`delete_post`** - DELETE /api/posts - delete one of the caller's posts

/// Request and response types
pub mod types;

/// Create post handler
pub mod create;

/// List posts handler
pub mod list;

/// Delete post handler
pub mod delete;

pub use create::{create_post, MAX_POST_BYTES};
pub use delete::delete_post;
pub use list::get_posts;
pub use types::{CreatePostRequest, CreatePostResponse, DeletePostRequest, DeletePostResponse};
