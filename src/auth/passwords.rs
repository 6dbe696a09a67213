/**
 * Password Hashing
 *
 * This module wraps bcrypt hashing and verification for user passwords.
 * bcrypt is deliberately expensive; both operations run on the blocking
 * thread pool so a hash does not stall the async reactor.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};
use thiserror::Error;

/// Errors from password hashing or verification.
///
/// These are internal failures of the hashing machinery itself and are
/// distinct from a verification that completes with a non-matching password
/// (which is `Ok(false)` from [`verify_password`]).
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or failed internally
    #[error("password hashing failed: {0}")]
    Hash(#[from] BcryptError),

    /// The blocking task running bcrypt was cancelled or panicked
    #[error("password hashing task aborted")]
    TaskAborted,
}

/// Hash a plaintext password with a fresh salt
///
/// Uses bcrypt with `DEFAULT_COST`. The plaintext is moved onto a blocking
/// worker and never logged.
///
/// # Arguments
/// * `plaintext` - The raw password
///
/// # Returns
/// The salted bcrypt digest, suitable for storage
pub async fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let plaintext = plaintext.to_owned();
    tokio::task::spawn_blocking(move || hash(plaintext, DEFAULT_COST))
        .await
        .map_err(|_| PasswordError::TaskAborted)?
        .map_err(PasswordError::from)
}

/// Verify a plaintext password against a stored digest
///
/// # Arguments
/// * `plaintext` - The raw password presented at login
/// * `digest` - The stored bcrypt digest
///
/// # Returns
/// `Ok(true)` if the password matches, `Ok(false)` if it does not,
/// `Err` only if bcrypt itself fails (e.g. a malformed digest)
pub async fn verify_password(plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
    let plaintext = plaintext.to_owned();
    let digest = digest.to_owned();
    tokio::task::spawn_blocking(move || verify(plaintext, &digest))
        .await
        .map_err(|_| PasswordError::TaskAborted)?
        .map_err(PasswordError::from)
}
