/**
 * Server Initialization
 *
 * This module assembles the application: load configuration, build the
 * shared state, and create the router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Load the token-signing configuration
 * 3. Build `AppState` and the router
 *
 * Missing configuration aborts startup; there is no degraded mode.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{load_auth, load_database, ConfigError};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the configuration
/// error that should abort startup
pub async fn create_app() -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing quillpress backend");

    let db = load_database().await?;
    let auth = load_auth()?;

    let app_state = AppState { db, auth };

    Ok(create_router(app_state))
}
