//! In-memory implementation of MemberRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

use super::r#trait::MemberRepository;

/// Mock member repository backed by a HashMap
///
/// The duplicate-email rejection happens under the write lock, standing
/// in for the storage-level unique constraint of the real
/// implementation.
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<Uuid, Member>>>,
}

impl MockMemberRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            members: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.values().find(|m| m.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        if members.values().any(|m| m.email == member.email) {
            return Err(DomainError::DuplicateMember {
                email: member.email.clone(),
            });
        }

        members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let members = self.members.read().await;
        Ok(members.values().any(|m| m.email == email))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut members = self.members.write().await;
        Ok(members.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let members = self.members.read().await;
        Ok(members.len() as u64)
    }
}
