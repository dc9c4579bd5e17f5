/**
 * Post Handler Types
 *
 * Request and response bodies for the post endpoints. The listing endpoint
 * responds with `Vec<PostSummary>` directly.
 */

use serde::{Deserialize, Serialize};

/// Create post request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    /// Post content (UTF-8, at most 1,000,000 bytes)
    pub text: String,
}

/// Create post response
#[derive(Serialize, Debug)]
pub struct CreatePostResponse {
    /// ID of the newly created post
    pub post_id: i64,
}

/// Delete post request
#[derive(Deserialize, Serialize, Debug)]
pub struct DeletePostRequest {
    /// ID of the post to delete
    pub post_id: i64,
}

/// Delete post response
#[derive(Serialize, Debug)]
pub struct DeletePostResponse {
    pub success: bool,
}
