/**
 * List Posts Handler
 *
 * Implements the listing endpoint for GET /api/posts. Requires
 * authentication. Served from the per-user listing cache when the cached
 * entry is younger than the TTL.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::service::PostService;
use crate::posts::store::PostSummary;

/// List posts handler
///
/// Returns all of the authenticated user's posts as
/// `[{id, text, created_at}, ...]`.
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid bearer token
/// * `500 Internal Server Error` - storage failure
pub async fn get_posts(
    State(posts): State<PostService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let listing = posts.get_posts(user.user_id).await?;

    Ok(Json(listing))
}
