//! Database operations for posts
//!
//! This module contains all queries against the `posts` table. Mutations
//! are conditioned on `(id, author_id)` in a single statement, so the
//! storage layer serializes concurrent attempts and a non-owner can never
//! learn whether the row exists: zero rows affected is the only signal for
//! both "absent" and "someone else's post".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Post struct representing a blog post in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// ID of the authoring user; immutable after creation
    pub author_id: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new post for the given author
pub async fn create_post(
    pool: &PgPool,
    author_id: i64,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get all posts in insertion order
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a post by ID
pub async fn get_post_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a post's title and content, scoped to its author
///
/// Returns the updated post, or `None` when no row matched - either the
/// post does not exist or it belongs to a different author.
pub async fn update_post(
    pool: &PgPool,
    id: i64,
    author_id: i64,
    title: &str,
    content: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2, updated_at = $3
        WHERE id = $4 AND author_id = $5
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(id)
    .bind(author_id)
    .fetch_optional(pool)
    .await
}

/// Delete a post, scoped to its author
///
/// Returns `true` when a row was deleted; `false` has the same conflated
/// meaning as `None` from [`update_post`].
pub async fn delete_post(pool: &PgPool, id: i64, author_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1 AND author_id = $2
        "#,
    )
    .bind(id)
    .bind(author_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
