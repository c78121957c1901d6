//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Registration attempted with an email already on file.
    /// User-correctable; the caller surfaces it without retrying.
    #[error("member already registered: {email}")]
    DuplicateMember { email: String },

    /// Principal lookup for an email with no matching member.
    /// The authentication collaborator translates this into an
    /// authentication failure, not a system error.
    #[error("member not found: {email}")]
    MemberNotFound { email: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Persistence-layer failure, propagated unmodified
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = DomainError::DuplicateMember {
            email: "user@shopmall.io".to_string(),
        };
        assert_eq!(err.to_string(), "member already registered: user@shopmall.io");

        let err = DomainError::MemberNotFound {
            email: "ghost@shopmall.io".to_string(),
        };
        assert!(err.to_string().contains("ghost@shopmall.io"));
    }
}
