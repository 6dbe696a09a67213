//! Middleware for request processing

/// Bearer-token authorization gate
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
