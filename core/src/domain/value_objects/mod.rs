//! Value objects representing immutable domain concepts.

pub mod item_search;
pub mod principal;

// Re-export commonly used types
pub use item_search::ItemSearchCriteria;
pub use principal::AuthPrincipal;
