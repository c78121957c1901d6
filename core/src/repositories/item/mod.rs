//! Item repository module.

mod r#trait;
pub use r#trait::ItemRepository;

mod mock;
pub use mock::MockItemRepository;
