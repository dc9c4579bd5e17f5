/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * service endpoints, the health/root endpoints, and the middleware stack.
 *
 * # Layers
 *
 * Applied to every route:
 * - request timing (`X-Process-Time` header)
 * - permissive CORS
 */

use axum::{response::Json, routing, Router};
use tower_http::cors::CorsLayer;

use crate::middleware::timing::timing_middleware;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the service instances
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", routing::get(root))
        .route("/health", routing::get(health));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(|| async { "404 Not Found" })
        .layer(axum::middleware::from_fn(timing_middleware))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Root endpoint, a welcome message
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to Postline",
    }))
}

/// Health check endpoint
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
    }))
}
