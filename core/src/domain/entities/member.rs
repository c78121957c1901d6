//! Member entity representing a registered member of the shop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization level granted to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// A regular shopper
    User,
    /// A store administrator
    Admin,
}

impl Role {
    /// Authority label consumed by the authentication collaborator
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// Member entity representing a registered member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address; unique across all members
    pub email: String,

    /// Stored credential, pre-hashed by the caller. Never a plaintext
    /// password.
    pub password: String,

    /// Shipping address
    pub address: String,

    /// Authorization level
    pub role: Role,

    /// Timestamp when the member was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the member was last updated
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new Member with the default User role
    pub fn new(
        name: String,
        email: String,
        password: String,
        address: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            address,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style role override, used when seeding administrators
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Grants the member administrator rights
    pub fn promote_to_admin(&mut self) {
        self.role = Role::Admin;
        self.updated_at = Utc::now();
    }

    /// Checks if the member is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_creation() {
        let member = Member::new(
            "Alice".to_string(),
            "alice@shopmall.io".to_string(),
            "$2b$12$stored.hash".to_string(),
            "12 Market St".to_string(),
        );

        assert_eq!(member.email, "alice@shopmall.io");
        assert_eq!(member.password, "$2b$12$stored.hash");
        assert_eq!(member.role, Role::User);
        assert!(!member.is_admin());
        assert_eq!(member.created_at, member.updated_at);
    }

    #[test]
    fn test_with_role() {
        let member = Member::new(
            "Root".to_string(),
            "admin@shopmall.io".to_string(),
            "hash".to_string(),
            "HQ".to_string(),
        )
        .with_role(Role::Admin);

        assert!(member.is_admin());
    }

    #[test]
    fn test_promote_to_admin() {
        let mut member = Member::new(
            "Bob".to_string(),
            "bob@shopmall.io".to_string(),
            "hash".to_string(),
            "3 Pier Rd".to_string(),
        );

        assert!(!member.is_admin());
        member.promote_to_admin();
        assert!(member.is_admin());
        assert!(member.updated_at >= member.created_at);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"USER\"");

        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
    }
}
