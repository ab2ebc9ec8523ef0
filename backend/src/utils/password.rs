//! Password hashing and verification.
//!
//! Wraps bcrypt with the application's error vocabulary. Hashing salts every
//! call, so two hashes of the same plaintext are never byte-equal.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ServiceError::internal(format!("password hashing failed: {}", e)))
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed hash and a mismatch are indistinguishable to the caller; both
/// surface as the same unauthorized error.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<()> {
    match verify(password, password_hash) {
        Ok(true) => Ok(()),
        _ => Err(ServiceError::unauthorized("password doesn't match")),
    }
}
