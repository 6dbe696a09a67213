//! Posts Module
//!
//! CRUD over blog posts. Storage operations live in `db`; the HTTP surface
//! lives in `handlers`. Mutations are ownership-scoped: the repository
//! conditions every UPDATE/DELETE on `(id, author_id)` so the requesting
//! author can only touch their own rows.

/// Database operations for posts
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::Post;
pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
