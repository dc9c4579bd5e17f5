/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the auth service, the post
 * service (which owns the listing cache for the life of the process), and
 * the request authenticator. All three are cheap to clone; shared pieces
 * (stores, cache map) live behind `Arc`s internally.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract exactly the service
 * they need - `State<AuthService>`, `State<PostService>` - without taking
 * the entire `AppState`.
 */

use axum::extract::FromRef;

use crate::auth::service::AuthService;
use crate::middleware::auth::RequestAuthenticator;
use crate::posts::service::PostService;

/// Application state holding the wired service instances
#[derive(Clone)]
pub struct AppState {
    /// Signup/login orchestration
    pub auth: AuthService,

    /// Post create/list/delete orchestration; owns the listing cache
    pub posts: PostService,

    /// Bearer-token resolution for protected routes
    pub authenticator: RequestAuthenticator,
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for PostService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for RequestAuthenticator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.authenticator.clone()
    }
}
