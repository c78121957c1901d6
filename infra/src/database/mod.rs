//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool, the repository implementations, and
//! the embedded schema migrations.

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlItemRepository, MySqlMemberRepository};

/// Embedded schema migrations, applied by [`crate::initialize`]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
