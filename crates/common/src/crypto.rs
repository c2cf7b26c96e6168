//! Password hashing shared across job board crates
//!
//! bcrypt digests embed their own salt and cost, so verification needs only
//! the candidate plaintext and the stored digest.

use crate::error::{Error, Result};

/// Hash a plaintext password with the given bcrypt cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        Error::Internal(format!("Failed to hash password: {}", e))
    })
}

/// Check a candidate password against a stored digest.
///
/// A malformed digest counts as a mismatch; callers treat every `false`
/// identically so stored-data problems cannot be told apart from a wrong
/// password.
pub fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    match bcrypt::verify(candidate, stored_hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            false
        }
    }
}

/// Hash on the blocking pool so the async executor is not stalled.
pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String> {
    tokio_blocking(move || hash_password(&password, cost)).await?
}

/// Verify on the blocking pool so the async executor is not stalled.
pub async fn verify_password_blocking(candidate: String, stored_hash: String) -> Result<bool> {
    tokio_blocking(move || verify_password(&candidate, &stored_hash)).await
}

async fn tokio_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Internal(format!("Password hashing task failed: {}", e)))
}
