/**
 * API Route Configuration
 *
 * This module wires the API endpoints to their handlers.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/signup` - user registration
 * - `POST /api/login` - user login
 *
 * ## Posts (require a bearer token)
 * - `POST /api/posts` - create a post
 * - `GET /api/posts` - list the caller's posts
 * - `DELETE /api/posts` - delete one of the caller's posts
 */

use axum::{middleware, routing, Router};

use crate::auth::handlers::{login, signup};
use crate::middleware::auth::auth_middleware;
use crate::posts::handlers::{create_post, delete_post, get_posts};
use crate::server::state::AppState;

/// Configure API routes
///
/// Post routes are wrapped in the auth middleware; a request only reaches
/// those handlers with a resolved user identity in its extensions.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state (the authenticator is cloned into the
///   middleware layer)
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected: Router<AppState> = Router::new()
        .route(
            "/api/posts",
            routing::post(create_post)
                .get(get_posts)
                .delete(delete_post),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.authenticator.clone(),
            auth_middleware,
        ));

    router
        .route("/api/signup", routing::post(signup))
        .route("/api/login", routing::post(login))
        .merge(protected)
}
