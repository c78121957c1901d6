//! # Infrastructure Layer
//!
//! MySQL implementations of the core repository interfaces, following
//! Clean Architecture principles. This crate owns connection-pool
//! management, schema migrations, and the SQL predicate builder behind
//! the dynamic catalog search.

// Re-export core error types for convenience
pub use mall_core::errors::{DomainError, DomainResult};

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration for infrastructure services
pub mod config {
    use mall_shared::config::DatabaseConfig;
    use serde::{Deserialize, Serialize};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
    }
}

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlItemRepository, MySqlMemberRepository};

/// Ready-to-use repository set over a shared connection pool
#[cfg(feature = "mysql")]
pub struct InfrastructureServices {
    /// Connection pool, exposed for health checks
    pub pool: database::DatabasePool,
    /// Member persistence
    pub members: database::MySqlMemberRepository,
    /// Catalog persistence
    pub items: database::MySqlItemRepository,
}

/// Initialize infrastructure services
///
/// Loads configuration from the environment, builds the connection
/// pool, applies pending schema migrations (including the unique key on
/// member email that backs duplicate detection), and wires up the
/// repositories.
#[cfg(feature = "mysql")]
pub async fn initialize() -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("initializing infrastructure services");

    let config = load_config()?;
    let pool = database::DatabasePool::new(config.database).await?;

    database::MIGRATOR.run(pool.get_pool()).await?;

    let services = InfrastructureServices {
        members: database::MySqlMemberRepository::new(pool.get_pool().clone()),
        items: database::MySqlItemRepository::new(pool.get_pool().clone()),
        pool,
    };

    tracing::info!("infrastructure services initialized");
    Ok(services)
}

/// Load infrastructure configuration from environment
pub fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let database = mall_shared::config::DatabaseConfig::from_env();

    Ok(config::InfrastructureConfig { database })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
