/**
 * Server Initialization
 *
 * This module assembles the application: stores over the connection pool,
 * services over the stores, and the router over the services.
 *
 * # Initialization Process
 *
 * 1. Connect to Postgres and run migrations
 * 2. Build the Postgres-backed user and post stores
 * 3. Build the token service from the configured secret and TTL
 * 4. Wire the auth service, post service (with its listing cache), and
 *    request authenticator
 * 5. Create the router
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::service::AuthService;
use crate::auth::sessions::TokenService;
use crate::auth::users::{PgUserStore, UserStore};
use crate::middleware::auth::RequestAuthenticator;
use crate::posts::service::PostService;
use crate::posts::store::{PgPostStore, PostStore};
use crate::routes::router::create_router;
use crate::server::config::{connect_database, AppConfig};
use crate::server::state::AppState;

/// Wire the service instances over a connection pool
pub fn build_state(pool: PgPool, config: &AppConfig) -> AppState {
    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let posts: Arc<dyn PostStore> = Arc::new(PgPostStore::new(pool));

    let tokens = TokenService::new(
        &config.jwt_secret,
        chrono::Duration::minutes(config.token_ttl_minutes),
    );

    AppState {
        auth: AuthService::new(users.clone(), tokens.clone()),
        posts: PostService::new(posts),
        authenticator: RequestAuthenticator::new(users, tokens),
    }
}

/// Create the Axum application
///
/// # Arguments
///
/// * `config` - Application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails when the database is unreachable or migrations cannot run.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing postline server");

    let pool = connect_database(&config.database_url).await?;
    let state = build_state(pool, config);

    tracing::info!("router configured");

    Ok(create_router(state))
}
