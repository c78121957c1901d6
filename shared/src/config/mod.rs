//! Configuration module
//!
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection

pub mod database;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::Environment;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Assemble configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseConfig::default(),
        }
    }
}
