//! Member repository trait defining the interface for member persistence.
//!
//! Implementations handle the actual database operations while keeping
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

/// Repository trait for Member entity persistence operations
///
/// # Example
/// ```no_run
/// # use mall_core::repositories::MemberRepository;
/// # async fn example(repo: &impl MemberRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("alice@shopmall.io").await? {
///     Some(member) => println!("member found: {:?}", member.id),
///     None => println!("no such member"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by exact email match
    ///
    /// # Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - No member registered under the email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError>;

    /// Find a member by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError>;

    /// Persist a new member
    ///
    /// # Returns
    /// * `Ok(Member)` - The stored record
    /// * `Err(DomainError::DuplicateMember)` - The email is already on
    ///   file; implementations back this with a storage-level unique
    ///   constraint so the guarantee holds under concurrent writers
    async fn create(&self, member: Member) -> Result<Member, DomainError>;

    /// Check whether a member exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Delete a member (external administrative action)
    ///
    /// # Returns
    /// * `Ok(true)` - Member was deleted
    /// * `Ok(false)` - Member not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count all registered members
    async fn count(&self) -> Result<u64, DomainError>;
}
