/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration, login, and current-user handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, at least 6 characters)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Login response: the bearer token for subsequent requests
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed session token (1-hour expiration)
    pub token: String,
}

/// Confirmation message returned by registration
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients. Does not
/// include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
}
