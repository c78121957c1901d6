//! # Shopmall Core
//!
//! Core business logic and domain layer for the Shopmall backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Item, ItemSellStatus, Member, Role};
pub use domain::value_objects::{AuthPrincipal, ItemSearchCriteria};
pub use errors::{DomainError, DomainResult};
pub use repositories::{ItemRepository, MemberRepository};
pub use services::{CatalogService, MemberService};
