//! Quillpress - a minimal blogging platform backend
//!
//! Registration and login with bcrypt password hashing and signed bearer
//! tokens, plus CRUD on blog posts where every mutation is scoped to the
//! authenticated author.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, credential store, session tokens, and
//!   the /register, /login, /me handlers
//! - **`posts`** - Post repository and the /posts handlers
//! - **`middleware`** - Bearer-token authorization gate
//! - **`routes`** - Router assembly
//! - **`server`** - Configuration, shared state, application setup
//! - **`error`** - API error taxonomy and HTTP conversion

/// Authentication and user management
pub mod auth;

/// Post storage and handlers
pub mod posts;

/// Request-processing middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState};
