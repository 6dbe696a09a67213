/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configuration into a single Axum router.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, token configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", axum::routing::get(root_handler));

    // Add API routes
    let router = configure_api_routes(router, app_state.clone());

    // Request-level logging
    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}

async fn root_handler() -> &'static str {
    "Welcome to the Blogging Platform API"
}
