/**
 * Delete Post Handler
 *
 * Implements post deletion for DELETE /api/posts. Requires authentication.
 *
 * Deleting a post that doesn't exist and deleting a post owned by someone
 * else return the same 404, so the endpoint leaks nothing about other
 * users' posts.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::handlers::types::{DeletePostRequest, DeletePostResponse};
use crate::posts::service::PostService;

/// Delete post handler
///
/// # Arguments
///
/// * `State(posts)` - Post service
/// * `AuthUser(user)` - Authenticated user from the auth middleware
/// * `Json(request)` - Delete request containing the post ID
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid bearer token
/// * `404 Not Found` - no such post, or not owned by this user
/// * `422 Unprocessable Entity` - non-positive post ID
/// * `500 Internal Server Error` - storage failure
pub async fn delete_post(
    State(posts): State<PostService>,
    AuthUser(user): AuthUser,
    Json(request): Json<DeletePostRequest>,
) -> Result<Json<DeletePostResponse>, ApiError> {
    if request.post_id <= 0 {
        return Err(ApiError::validation("post_id must be positive"));
    }

    posts.delete_post(user.user_id, request.post_id).await?;

    Ok(Json(DeletePostResponse { success: true }))
}
