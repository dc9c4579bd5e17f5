/**
 * Create Post Handler
 *
 * Implements post creation for POST /api/posts. Requires authentication.
 *
 * # Validation
 *
 * The body is validated here, before the post service is involved: text
 * must be non-empty and at most 1,000,000 UTF-8 bytes.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::handlers::types::{CreatePostRequest, CreatePostResponse};
use crate::posts::service::PostService;

/// Maximum post size in UTF-8 encoded bytes
pub const MAX_POST_BYTES: usize = 1_000_000;

/// Create post handler
///
/// # Arguments
///
/// * `State(posts)` - Post service
/// * `AuthUser(user)` - Authenticated user from the auth middleware
/// * `Json(request)` - Create request containing the post text
///
/// # Returns
///
/// JSON response with the new post's ID, or an error
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid bearer token
/// * `422 Unprocessable Entity` - empty text or text over the size limit
/// * `500 Internal Server Error` - storage failure
pub async fn create_post(
    State(posts): State<PostService>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::validation("Post text must not be empty"));
    }
    // str::len is the UTF-8 encoded byte length.
    if request.text.len() > MAX_POST_BYTES {
        tracing::warn!(
            "post rejected for user {}: {} bytes over limit",
            user.user_id,
            request.text.len() - MAX_POST_BYTES
        );
        return Err(ApiError::validation("Post size exceeds 1MB limit"));
    }

    let post_id = posts.create_post(user.user_id, &request.text).await?;

    Ok(Json(CreatePostResponse { post_id }))
}
