//! MySQL repository implementations

mod item_repository_impl;
mod member_repository_impl;
mod predicate;

pub use item_repository_impl::MySqlItemRepository;
pub use member_repository_impl::MySqlMemberRepository;
