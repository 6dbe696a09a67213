//! Authentication API integration tests
//!
//! End-to-end tests for registration, login, and the current-user endpoint,
//! run against the real router with a Postgres fixture and a fixed signing
//! secret.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::time::{SystemTime, UNIX_EPOCH};

use common::auth_helpers::{auth_header, create_test_user, TEST_JWT_SECRET};
use common::database::TestDatabase;
use quillpress::auth::sessions::{issue_token_at, verify_token};
use quillpress::routes::create_router;
use quillpress::server::config::AuthConfig;
use quillpress::server::state::AppState;

fn create_test_server(db: &TestDatabase) -> TestServer {
    let app_state = AppState {
        db: db.pool().clone(),
        auth: AuthConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
        },
    };
    TestServer::new(create_router(app_state)).unwrap()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
#[serial]
async fn test_register_then_login_round_trip() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/register")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("login returns a token");

    // The token verifies against the server's secret and names the same user
    let claims = verify_token(TEST_JWT_SECRET, token).unwrap();
    assert_eq!(claims.username, "alice");

    let me = server
        .get("/me")
        .add_header("Authorization", auth_header(token))
        .await;
    assert_eq!(me.status_code(), StatusCode::OK);
    let me_body: serde_json::Value = me.json();
    assert_eq!(me_body["username"], "alice");
    assert_eq!(me_body["email"], "alice@example.com");
    assert_eq!(me_body["id"].to_string(), claims.sub);
}

#[tokio::test]
#[serial]
async fn test_register_lists_every_invalid_field() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/register")
        .json(&serde_json::json!({
            "username": "",
            "email": "not-an-email",
            "password": "pw"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["field"], "username");
    assert_eq!(errors[1]["field"], "email");
    assert_eq!(errors[2]["field"], "password");
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_email_conflicts() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "alice", "alice@example.com", "password123").await;

    let response = server
        .post("/register")
        .json(&serde_json::json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "password456"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    // The original account is untouched
    let login = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn test_login_failures_are_indistinguishable() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "alice", "alice@example.com", "password123").await;

    let wrong_password = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": "wrongpassword"
        }))
        .await;

    let unknown_email = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

    // Identical bodies: the response must not reveal whether the email exists
    let body_a: serde_json::Value = wrong_password.json();
    let body_b: serde_json::Value = unknown_email.json();
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["error"], "Invalid credentials");
}

#[tokio::test]
#[serial]
async fn test_me_without_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_me_with_garbage_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .get("/me")
        .add_header("Authorization", auth_header("invalid.token.here"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn test_me_with_expired_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let user = create_test_user(db.pool(), "alice", "alice@example.com", "password123").await;

    // Issued 61 minutes ago: one minute past expiry
    let expired =
        issue_token_at(TEST_JWT_SECRET, user.id, &user.username, unix_now() - 61 * 60).unwrap();

    let response = server
        .get("/me")
        .add_header("Authorization", auth_header(&expired))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn test_me_with_token_near_expiry() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let user = create_test_user(db.pool(), "alice", "alice@example.com", "password123").await;

    // Issued 59 minutes ago: still valid for one more minute
    let aging =
        issue_token_at(TEST_JWT_SECRET, user.id, &user.username, unix_now() - 59 * 60).unwrap();

    let response = server
        .get("/me")
        .add_header("Authorization", auth_header(&aging))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
