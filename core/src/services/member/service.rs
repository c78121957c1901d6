//! Member onboarding and principal adaptation service

use std::sync::Arc;

use mall_shared::utils::validation::validators;

use crate::domain::entities::member::Member;
use crate::domain::value_objects::AuthPrincipal;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::MemberRepository;

/// Service for member registration and authentication-principal lookup
pub struct MemberService<M>
where
    M: MemberRepository,
{
    /// Member repository for database operations
    member_repository: Arc<M>,
}

impl<M> MemberService<M>
where
    M: MemberRepository,
{
    /// Create a new member service
    pub fn new(member_repository: Arc<M>) -> Self {
        Self { member_repository }
    }

    /// Register a new member.
    ///
    /// Fails with [`DomainError::DuplicateMember`] when a member with
    /// the same email is already on file, performing no write in that
    /// case. The lookup here is only a fast-fail convenience; the
    /// storage layer's unique key on email is what actually holds under
    /// concurrent registrations, and the repository maps a violation of
    /// it to the same error.
    pub async fn register(&self, member: Member) -> DomainResult<Member> {
        // Step 1: Reject candidates without a usable email
        if !validators::not_empty(&member.email) {
            return Err(DomainError::Validation {
                message: "email must not be empty".to_string(),
            });
        }
        if !validators::is_valid_email(&member.email) {
            return Err(DomainError::Validation {
                message: format!("malformed email: {}", member.email),
            });
        }

        // Step 2: Fast-fail duplicate check
        if self.member_repository.exists_by_email(&member.email).await? {
            tracing::warn!("registration rejected: email already on file");
            return Err(DomainError::DuplicateMember {
                email: member.email.clone(),
            });
        }

        // Step 3: Persist and return the stored record
        let created = self.member_repository.create(member).await?;
        tracing::info!(member_id = %created.id, "member registered");
        Ok(created)
    }

    /// Look up the authentication principal for an email.
    ///
    /// Returns the stored credential hash verbatim; credential
    /// comparison belongs to the external authentication collaborator,
    /// never to this service.
    pub async fn load_principal(&self, email: &str) -> DomainResult<AuthPrincipal> {
        match self.member_repository.find_by_email(email).await? {
            Some(member) => Ok(AuthPrincipal::from(&member)),
            None => Err(DomainError::MemberNotFound {
                email: email.to_string(),
            }),
        }
    }
}
