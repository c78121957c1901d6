//! Repository interfaces for the persistence collaborator.

pub mod item;
pub mod member;

pub use item::{ItemRepository, MockItemRepository};
pub use member::{MemberRepository, MockMemberRepository};
