//! Item repository trait defining the catalog query interface.
//!
//! Fixed-shape finders cover the common lookups; `search` builds a
//! dynamic conjunctive predicate from the present criteria fields.
//! Implementations must push filtering, ordering, and pagination down
//! to the persistence collaborator rather than scanning in memory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::domain::value_objects::ItemSearchCriteria;
use crate::errors::DomainError;
use mall_shared::types::pagination::{PaginatedResponse, Pagination};

/// Repository trait for catalog queries over Item entities
///
/// # Example
/// ```no_run
/// # use mall_core::repositories::ItemRepository;
/// # use mall_core::domain::value_objects::ItemSearchCriteria;
/// # use mall_shared::types::pagination::Pagination;
/// # async fn example(repo: &impl ItemRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let criteria = ItemSearchCriteria::new().with_min_price(10000);
/// let page = repo.search(&criteria, Pagination::of(0, 5)).await?;
/// println!("{} of {} items", page.count(), page.total);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new catalog item
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// Find an item by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError>;

    /// Items whose name matches exactly, in storage order
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, DomainError>;

    /// Items whose name matches `name` or whose detail matches `detail`
    /// exactly, in storage order
    async fn find_by_name_or_detail(
        &self,
        name: &str,
        detail: &str,
    ) -> Result<Vec<Item>, DomainError>;

    /// Items priced strictly below `price`, in storage order
    async fn find_by_price_less_than(&self, price: u32) -> Result<Vec<Item>, DomainError>;

    /// Items priced strictly below `price`, price descending
    async fn find_by_price_less_than_desc(&self, price: u32) -> Result<Vec<Item>, DomainError>;

    /// Items whose detail contains `detail` as a substring, price
    /// descending
    async fn find_by_detail(&self, detail: &str) -> Result<Vec<Item>, DomainError>;

    /// Same contract as [`find_by_detail`](Self::find_by_detail) through
    /// a hand-written native query; the two are interchangeable
    async fn find_by_detail_native(&self, detail: &str) -> Result<Vec<Item>, DomainError>;

    /// Dynamic filtered search, paginated
    ///
    /// Present criteria fields combine with logical AND; absent fields
    /// impose no constraint. The response carries the requested
    /// zero-based page slice and the total count of matching rows
    /// across all pages.
    async fn search(
        &self,
        criteria: &ItemSearchCriteria,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Item>, DomainError>;
}
