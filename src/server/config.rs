/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables:
 *
 * - `DATABASE_URL` - Postgres connection string (required)
 * - `JWT_SECRET` - token signing secret (required)
 * - `SERVER_PORT` - listen port (optional, defaults to 3000)
 *
 * Every endpoint needs storage and the token secret, so both are required
 * and startup fails fast when either is missing. The secret is carried as
 * an explicit [`AuthConfig`] value from here on; nothing else reads it
 * from the environment.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Configuration errors that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing
    #[error("{0} is not set")]
    MissingVar(&'static str),

    /// The database could not be reached
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migrations failed to apply
    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Token-signing configuration.
///
/// Held in application state and passed explicitly to the token functions.
/// If the secret changes across restarts, previously issued tokens become
/// unverifiable.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret shared by token issue and verify
    pub jwt_secret: String,
}

/// Load and initialize the database connection pool
///
/// Connects using `DATABASE_URL` and applies the schema migrations under
/// `migrations/`.
///
/// # Returns
/// A ready connection pool, or a [`ConfigError`] that should abort startup
pub async fn load_database() -> Result<PgPool, ConfigError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Load the token-signing configuration from `JWT_SECRET`
pub fn load_auth() -> Result<AuthConfig, ConfigError> {
    let jwt_secret =
        std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

    Ok(AuthConfig { jwt_secret })
}

/// Listen port from `SERVER_PORT`, defaulting to 3000
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}
