//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! session tokens.
//!
//! # Architecture
//!
//! - **`passwords`** - bcrypt hashing and verification
//! - **`users`** - Credential store over the `users` table
//! - **`sessions`** - Token issue/verify over an explicit secret
//! - **`handlers`** - HTTP handlers for /register, /login, /me
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate input → hash password → create user row
//! 2. **Login**: look up by email → verify password → issue token
//! 3. Subsequent requests present the token; the authorization gate in
//!    `crate::middleware::auth` verifies it without storage access
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; plaintext is never
//!   stored or logged
//! - Tokens are stateless, signed with a shared secret, and expire after
//!   one hour; there is no revocation
//! - Invalid credentials produce one generic 401 regardless of cause

/// bcrypt password hashing and verification
pub mod passwords;

/// Session token issue and verify
pub mod sessions;

/// User model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::{login, me, register};
