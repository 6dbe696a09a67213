/**
 * Current User Handler
 *
 * This module implements the handler for GET /me, which returns the public
 * record of the authenticated caller.
 *
 * The authorization gate verifies the token without touching storage; this
 * endpoint is where a client can confirm the account behind a token still
 * exists.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::find_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Current user handler
///
/// # Errors
///
/// * `401 / 403` - Per the authorization gate on this route
/// * `404 Not Found` - The user row behind the token no longer exists
/// * `500 Internal Server Error` - Storage failure
pub async fn me(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let record = find_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse {
        id: record.id,
        username: record.username,
        email: record.email,
    }))
}
