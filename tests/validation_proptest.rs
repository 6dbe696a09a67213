//! Property tests for registration validation
//!
//! Validation runs before any storage access, so these properties hold for
//! arbitrary inputs without a database.

use proptest::prelude::*;

use quillpress::auth::handlers::register::validate;
use quillpress::auth::handlers::types::RegisterRequest;

fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

proptest! {
    #[test]
    fn short_passwords_are_always_rejected(password in "[!-~]{0,5}") {
        let errors = validate(&request("alice", "alice@example.com", &password));
        prop_assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn emails_without_at_sign_are_always_rejected(email in "[a-zA-Z0-9.]{1,30}") {
        let errors = validate(&request("alice", &email, "password123"));
        prop_assert!(errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn blank_usernames_are_always_rejected(username in " {0,8}") {
        let errors = validate(&request(&username, "alice@example.com", "password123"));
        prop_assert!(errors.iter().any(|e| e.field == "username"));
    }

    #[test]
    fn well_formed_requests_always_pass(
        username in "[a-z][a-z0-9_]{0,15}",
        local in "[a-z0-9]{1,12}",
        password in "[!-~]{6,40}",
    ) {
        let email = format!("{}@example.com", local);
        let errors = validate(&request(&username, &email, &password));
        prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }
}
