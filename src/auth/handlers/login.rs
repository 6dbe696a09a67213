/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a session token (1-hour expiration)
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 response, so the
 *   endpoint cannot be used to probe which emails are registered
 * - Password verification failures of the bcrypt machinery itself are 500s,
 *   never reported as bad credentials
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::passwords::verify_password;
use crate::auth::sessions::issue_token;
use crate::auth::users::find_user_by_email;
use crate::error::ApiError;
use crate::server::config::AuthConfig;

/// Login handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(auth)` - Token-signing configuration
/// * `Json(request)` - Login request with email and password
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password (indistinguishable)
/// * `500 Internal Server Error` - Storage, hashing, or signing failure
pub async fn login(
    State(pool): State<PgPool>,
    State(auth): State<AuthConfig>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = find_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email");
            ApiError::InvalidCredentials
        })?;

    let valid = verify_password(&request.password, &user.password_hash).await?;
    if !valid {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(&auth.jwt_secret, user.id, &user.username)?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(TokenResponse { token }))
}
