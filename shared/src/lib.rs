//! Shared utilities and common types for the Shopmall backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types for catalog queries
//! - Utility functions (validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment};
pub use types::{PaginatedResponse, Pagination};
pub use utils::validation;
