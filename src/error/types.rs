/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP surface. Every
 * handler returns `Result<_, ApiError>`; the conversion module turns each
 * variant into the matching status code and JSON body.
 *
 * # Taxonomy
 *
 * - Validation errors (malformed client input) - 400, rejected before any
 *   storage access
 * - Authentication errors (missing token, bad credentials) - 401
 * - Token errors (present but invalid or expired token) - 403
 * - Not-found errors - 404, also covering mutations of rows the caller
 *   does not own (absence and ownership mismatch are indistinguishable)
 * - Duplicate registration - 409
 * - Storage/internal errors - 500
 */

use crate::auth::passwords::PasswordError;
use crate::auth::users::UserStoreError;
use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// A single failed validation check, tied to the offending field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the request field that failed
    pub field: &'static str,
    /// Human-readable message for that field
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// API-level error type
///
/// Variants map one-to-one onto the HTTP error responses this server can
/// produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// No usable bearer token was presented
    #[error("Authentication required")]
    AuthRequired,

    /// Unknown email or wrong password. One message for both cases so a
    /// caller cannot probe which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A token was presented but failed verification or has expired
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Resource absent, or a mutation matched no row. The two are not
    /// distinguished so mutations cannot leak the existence of other
    /// users' posts.
    #[error("{0}")]
    NotFound(String),

    /// Registration collided with an existing username or email
    #[error("{0}")]
    Conflict(String),

    /// Storage failure, surfaced with the underlying driver message
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Internal failure that must not reach the client in detail
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// 404 with the given client-facing message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 409 with the given client-facing message
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 500 with the given client-facing message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The HTTP status code this error renders as
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthRequired | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::Duplicate => {
                ApiError::conflict("Username or email already registered")
            }
            UserStoreError::Database(e) => ApiError::Database(e),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        // Never forwarded verbatim: a hashing failure must stay
        // indistinguishable from any other server fault.
        tracing::error!("password hashing failure: {:?}", err);
        ApiError::internal("Server error")
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("token signing failure: {:?}", err);
        ApiError::internal("Server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let validation = ApiError::Validation(vec![FieldError::new("email", "bad")]);
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(ApiError::AuthRequired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::not_found("Post not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_user_maps_to_conflict() {
        let err: ApiError = UserStoreError::Duplicate.into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_maps_to_internal() {
        let err: ApiError = UserStoreError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_credential_errors_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
