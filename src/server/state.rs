/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the single container handed to the router. It holds the
 * database pool and the token-signing configuration, both injected at
 * startup (or constructed directly by tests with a fixed secret and a test
 * pool). There is no other process-wide handle to either.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need: `State<PgPool>` for storage access, `State<AuthConfig>` for token
 * work, or `State<AppState>` for both.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AuthConfig;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Token-signing configuration
    pub auth: AuthConfig,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
