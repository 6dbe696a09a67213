/**
 * API Route Handlers
 *
 * This module wires the API endpoints onto the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - User registration
 * - `POST /login` - User login
 * - `GET /posts` - List all posts
 * - `GET /posts/{id}` - Get a single post
 *
 * ## Token-gated (Authorization: Bearer <token>)
 * - `GET /me` - Current user info
 * - `POST /posts` - Create a post
 * - `PUT /posts/{id}` - Update an owned post
 * - `DELETE /posts/{id}` - Delete an owned post
 */

use axum::{middleware, Router};

use crate::auth::{login, me, register};
use crate::middleware::auth::auth_middleware;
use crate::posts::{create_post, delete_post, get_post, list_posts, update_post};
use crate::server::state::AppState;

/// Configure API routes
///
/// Adds the public endpoints directly and merges in the token-gated group,
/// which carries the authorization gate as a route layer. The gate rejects
/// missing tokens with 401 and invalid or expired tokens with 403 before
/// any handler runs.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed by the gate for the secret
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", axum::routing::get(me))
        .route("/posts", axum::routing::post(create_post))
        .route(
            "/posts/{id}",
            axum::routing::put(update_post).delete(delete_post),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router
        .route("/register", axum::routing::post(register))
        .route("/login", axum::routing::post(login))
        .route("/posts", axum::routing::get(list_posts))
        .route("/posts/{id}", axum::routing::get(get_post))
        .merge(protected)
}
