/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses so handlers
 * can return them directly.
 *
 * # Response Format
 *
 * Validation failures list every offending field:
 * ```json
 * { "errors": [ { "field": "email", "message": "Please include a valid email" } ] }
 * ```
 *
 * Every other error is a single message:
 * ```json
 * { "error": "Post not found" }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        let body = match &self {
            ApiError::Validation(errors) => serde_json::json!({ "errors": errors }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::FieldError;

    #[test]
    fn test_validation_renders_error_list() {
        let err = ApiError::Validation(vec![
            FieldError::new("username", "Username is required"),
            FieldError::new("password", "Please enter a password with 6 or more characters"),
        ]);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_renders_message() {
        let response = ApiError::not_found("Post not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_token_and_bad_token_are_distinct() {
        assert_eq!(
            ApiError::AuthRequired.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
