//! HTTP handlers for post endpoints
//!
//! Reads are public; mutations sit behind the authorization gate and are
//! scoped to the verified author. A mutation that matches no row returns
//! 404 whether the post is absent or owned by someone else.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db::{self, Post};

/// Body for creating or updating a post
#[derive(Deserialize, Serialize, Debug)]
pub struct PostBody {
    pub title: String,
    pub content: String,
}

/// Confirmation message for deletions
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a post authored by the authenticated user
///
/// `201 Created` with the stored post.
pub async fn create_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(body): Json<PostBody>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = db::create_post(&pool, user.user_id, &body.title, &body.content).await?;

    tracing::info!("Post {} created by user {}", post.id, user.user_id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts. Public, unfiltered, insertion order.
pub async fn list_posts(State(pool): State<PgPool>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = db::list_posts(&pool).await?;
    Ok(Json(posts))
}

/// Get a single post by ID. Public.
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = db::get_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    Ok(Json(post))
}

/// Update a post owned by the authenticated user
///
/// `200 OK` with the updated post, or 404 when the post is absent or
/// belongs to a different author.
pub async fn update_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<PostBody>,
) -> Result<Json<Post>, ApiError> {
    let post = db::update_post(&pool, id, user.user_id, &body.title, &body.content)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found or not authorized"))?;

    tracing::info!("Post {} updated by user {}", post.id, user.user_id);

    Ok(Json(post))
}

/// Delete a post owned by the authenticated user
///
/// Same conflated 404 semantics as [`update_post`].
pub async fn delete_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::delete_post(&pool, id, user.user_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Post not found or not authorized"));
    }

    tracing::info!("Post {} deleted by user {}", id, user.user_id);

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
