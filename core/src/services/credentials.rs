//! Password hashing helpers for the registration credential.
//!
//! The member service stores and returns credentials verbatim; hashing
//! and verification happen at the boundary that owns the raw password,
//! never inside the service itself. These helpers are what that
//! boundary calls to produce the pre-hashed credential.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{DomainError, DomainResult};

/// Hash a raw password for storage
pub fn hash_password(raw: &str) -> DomainResult<String> {
    hash(raw, DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Check a raw password against a stored hash
pub fn verify_password(raw: &str, hashed: &str) -> DomainResult<bool> {
    verify(raw, hashed).map_err(|e| DomainError::Internal {
        message: format!("password verification failed: {}", e),
    })
}
