//! Authentication test helpers
//!
//! Provides utilities for creating test users and tokens against a fixed
//! signing secret, so token behavior is deterministic in tests.

use sqlx::PgPool;

use quillpress::auth::passwords::hash_password;
use quillpress::auth::sessions::issue_token;
use quillpress::auth::users::create_user;

/// Signing secret used by every test server and test token.
pub const TEST_JWT_SECRET: &str = "quillpress-test-secret";

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database with a valid token
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = hash_password(password)
        .await
        .expect("Failed to hash test password");

    let user = create_user(pool, username, email, &password_hash)
        .await
        .expect("Failed to create test user");

    let token =
        issue_token(TEST_JWT_SECRET, user.id, &user.username).expect("Failed to create test token");

    TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
