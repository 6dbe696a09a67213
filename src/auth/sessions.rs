/**
 * Session Tokens
 *
 * This module issues and verifies the signed JWTs that stand in for server
 * sessions. Tokens are stateless: nothing is persisted, validity is purely a
 * function of the signature and the embedded expiration. There is no
 * revocation; a token stays valid until it expires.
 *
 * The signing secret and the issue instant are explicit parameters so that
 * tests can pin both. Rotating the secret invalidates every outstanding
 * token.
 */

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Tokens expire one hour after issuance.
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID, as a decimal string
    pub sub: String,
    /// Username at issue time
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Why a presented token was rejected.
///
/// `Expired` is separated from `Invalid` because expiry is the one rejection
/// a well-behaved client will routinely hit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature checked out but the token is past its expiration
    #[error("token expired")]
    Expired,
    /// Bad signature, malformed token, or claims that don't decode
    #[error("invalid token")]
    Invalid,
}

/// Current Unix time in seconds.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs()
}

/// Issue a token for a user, expiring [`TOKEN_TTL_SECS`] from now
///
/// # Arguments
/// * `secret` - HMAC signing secret shared by issue and verify
/// * `user_id` - User ID to embed
/// * `username` - Username to embed
///
/// # Returns
/// Signed JWT string
pub fn issue_token(
    secret: &str,
    user_id: i64,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token_at(secret, user_id, username, unix_now())
}

/// Issue a token with an explicit issue instant
///
/// This is the deterministic core of [`issue_token`]; tests use it to pin
/// the clock and exercise expiration exactly.
///
/// # Arguments
/// * `secret` - HMAC signing secret
/// * `user_id` - User ID to embed
/// * `username` - Username to embed
/// * `issued_at` - Issue instant as a Unix timestamp; expiry is this plus
///   [`TOKEN_TTL_SECS`]
pub fn issue_token_at(
    secret: &str,
    user_id: i64,
    username: &str,
    issued_at: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: issued_at + TOKEN_TTL_SECS,
        iat: issued_at,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Checks the signature against `secret` and the expiration against the
/// current time with zero leeway.
///
/// # Arguments
/// * `secret` - HMAC signing secret
/// * `token` - JWT string as presented by the client
///
/// # Returns
/// Decoded claims, or [`TokenError::Expired`] / [`TokenError::Invalid`]
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let mut validation = Validation::default();
    validation.leeway = 0;

    match decode::<Claims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(TokenError::Expired),
            _ => Err(TokenError::Invalid),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_token() {
        let token = issue_token(SECRET, 42, "alice").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let token = issue_token(SECRET, 42, "alice").unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_garbage_token() {
        assert_eq!(
            verify_token(SECRET, "invalid.token.here"),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = issue_token(SECRET, 42, "alice").unwrap();
        assert_eq!(
            verify_token("other-secret", &token),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Issued 59 minutes ago: one minute of life left
        let token = issue_token_at(SECRET, 42, "alice", now - 59 * 60).unwrap();
        assert!(verify_token(SECRET, &token).is_ok());
    }

    #[test]
    fn test_token_expired_just_after_expiry() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Issued 61 minutes ago: expired one minute ago
        let token = issue_token_at(SECRET, 42, "alice", now - 61 * 60).unwrap();
        assert_eq!(verify_token(SECRET, &token), Err(TokenError::Expired));
    }
}
