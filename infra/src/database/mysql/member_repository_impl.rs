//! MySQL implementation of the MemberRepository trait.
//!
//! The `uk_members_email` unique key is the authoritative guard against
//! duplicate registrations; a violation on insert surfaces as
//! [`DomainError::DuplicateMember`] so concurrent writers cannot slip
//! past the service-level check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mall_core::domain::entities::member::{Member, Role};
use mall_core::errors::DomainError;
use mall_core::repositories::MemberRepository;

/// MySQL implementation of MemberRepository
pub struct MySqlMemberRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    /// Create a new MySQL member repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Member entity
    fn row_to_member(row: &sqlx::mysql::MySqlRow) -> Result<Member, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("failed to get id: {}", e),
        })?;

        let role_label: String = row.try_get("role").map_err(|e| DomainError::Database {
            message: format!("failed to get role: {}", e),
        })?;
        let role = match role_label.as_str() {
            "ADMIN" => Role::Admin,
            _ => Role::User,
        };

        Ok(Member {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("failed to get email: {}", e),
            })?,
            password: row.try_get("password").map_err(|e| DomainError::Database {
                message: format!("failed to get password: {}", e),
            })?,
            address: row.try_get("address").map_err(|e| DomainError::Database {
                message: format!("failed to get address: {}", e),
            })?,
            role,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let query = r#"
            SELECT id, name, email, password, address, role,
                   created_at, updated_at
            FROM members
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("member lookup failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        let query = r#"
            SELECT id, name, email, password, address, role,
                   created_at, updated_at
            FROM members
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("member lookup failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let query = r#"
            INSERT INTO members (
                id, name, email, password, address, role,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(member.id.to_string())
            .bind(&member.name)
            .bind(&member.email)
            .bind(&member.password)
            .bind(&member.address)
            .bind(member.role.as_str())
            .bind(member.created_at)
            .bind(member.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::DuplicateMember {
                        email: member.email.clone(),
                    }
                }
                _ => DomainError::Database {
                    message: format!("failed to create member: {}", e),
                },
            })?;

        Ok(member)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM members
                WHERE email = ?
            ) AS member_exists
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to check member existence: {}", e),
            })?;

        let exists: i64 = result
            .try_get("member_exists")
            .map_err(|e| DomainError::Database {
                message: format!("failed to get existence result: {}", e),
            })?;

        Ok(exists == 1)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM members WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to delete member: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let query = "SELECT COUNT(*) AS count FROM members";

        let row = sqlx::query(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to count members: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }
}
