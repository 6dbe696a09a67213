/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate username, email, and password, collecting every failure
 * 2. Hash the password with bcrypt
 * 3. Create the user row; a duplicate username or email is a 409
 *
 * Validation runs before any storage access, and validation failures list
 * every offending field rather than just the first.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never logged
 * - The duplicate-registration response carries a fixed message, not the
 *   raw storage error
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::passwords::hash_password;
use crate::auth::users::create_user;
use crate::error::{ApiError, FieldError};

/// Validate a registration request, returning one entry per failed field
pub fn validate(request: &RegisterRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if request.username.trim().is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    }

    // Basic shape check; real deliverability is the mail system's problem
    if !request.email.contains('@') {
        errors.push(FieldError::new("email", "Please include a valid email"));
    }

    if request.password.len() < 6 {
        errors.push(FieldError::new(
            "password",
            "Please enter a password with 6 or more characters",
        ));
    }

    errors
}

/// Registration handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Registration request with username, email, password
///
/// # Errors
///
/// * `400 Bad Request` - One or more fields failed validation
/// * `409 Conflict` - Username or email already registered
/// * `500 Internal Server Error` - Hashing or storage failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    let errors = validate(&request);
    if !errors.is_empty() {
        tracing::warn!("Registration rejected: {} invalid field(s)", errors.len());
        return Err(ApiError::Validation(errors));
    }

    let password_hash = hash_password(&request.password).await?;

    let user = create_user(&pool, &request.username, &request.email, &password_hash).await?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}
