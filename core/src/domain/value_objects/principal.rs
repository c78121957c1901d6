//! Authentication-ready projection of a member record.

use serde::{Deserialize, Serialize};

use crate::domain::entities::member::Member;

/// Principal view handed to the external credential-verification
/// subsystem.
///
/// Carries the stored credential hash verbatim; this crate never hashes
/// or compares credentials itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPrincipal {
    /// Login identifier; always the member's email
    pub username: String,

    /// Stored password hash, untransformed
    pub password: String,

    /// Authority labels; a single role per member today
    pub authorities: Vec<String>,
}

impl From<&Member> for AuthPrincipal {
    fn from(member: &Member) -> Self {
        Self {
            username: member.email.clone(),
            password: member.password.clone(),
            authorities: vec![member.role.as_str().to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::member::Role;

    #[test]
    fn test_principal_projection() {
        let member = Member::new(
            "Alice".to_string(),
            "alice@shopmall.io".to_string(),
            "$2b$12$stored.hash".to_string(),
            "12 Market St".to_string(),
        );

        let principal = AuthPrincipal::from(&member);
        assert_eq!(principal.username, "alice@shopmall.io");
        assert_eq!(principal.password, "$2b$12$stored.hash");
        assert_eq!(principal.authorities, vec!["USER".to_string()]);
    }

    #[test]
    fn test_admin_authority_label() {
        let member = Member::new(
            "Root".to_string(),
            "admin@shopmall.io".to_string(),
            "hash".to_string(),
            "HQ".to_string(),
        )
        .with_role(Role::Admin);

        let principal = AuthPrincipal::from(&member);
        assert_eq!(principal.authorities, vec!["ADMIN".to_string()]);
    }
}
