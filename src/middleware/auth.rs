/**
 * Authentication Middleware
 *
 * This module guards routes that require an authenticated author. It
 * extracts the bearer token from the Authorization header, verifies it,
 * and attaches the verified identity to the request for handlers to
 * consume.
 *
 * The two failure cases are distinct:
 * - no token at all (missing header, or no `Bearer ` prefix) - 401
 * - a token that fails verification or has expired - 403
 *
 * The gate trusts the signature alone. It performs no database lookup and
 * does not confirm the user still exists.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiration
/// 3. Attaches [`AuthenticatedUser`] to request extensions
///
/// Returns 401 when no token is presented and 403 when a presented token
/// is invalid or expired.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::AuthRequired
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header without bearer token");
        ApiError::AuthRequired
    })?;

    // Verify token
    let claims = verify_token(&app_state.auth.jwt_secret, token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        ApiError::InvalidToken
    })?;

    // The subject is the user id this process minted; anything else means
    // the token was not ours.
    let user_id = claims.sub.parse::<i64>().map_err(|_| {
        tracing::warn!("Token subject is not a user id");
        ApiError::InvalidToken
    })?;

    // Attach authenticated user to request extensions
    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind [`auth_middleware`] take this as a parameter to receive
/// the identity the gate verified.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::AuthRequired
            })?;

        Ok(AuthUser(user))
    }
}
