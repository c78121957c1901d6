//! Catalog query service
//!
//! Thin coordination layer over the item repository: normalizes search
//! criteria and pagination, then delegates. All filtering and ordering
//! happens inside the persistence collaborator.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::domain::value_objects::ItemSearchCriteria;
use crate::errors::DomainResult;
use crate::repositories::ItemRepository;
use mall_shared::types::pagination::{PaginatedResponse, Pagination};

/// Service exposing catalog lookups and the dynamic filtered search
pub struct CatalogService<I>
where
    I: ItemRepository,
{
    /// Item repository for catalog queries
    item_repository: Arc<I>,
}

impl<I> CatalogService<I>
where
    I: ItemRepository,
{
    /// Create a new catalog service
    pub fn new(item_repository: Arc<I>) -> Self {
        Self { item_repository }
    }

    /// Dynamic filtered search, paginated.
    ///
    /// Criteria fields are each optional and combine with logical AND;
    /// a blank detail substring imposes no constraint. The response
    /// carries the zero-based page slice plus the total match count.
    pub async fn search(
        &self,
        criteria: ItemSearchCriteria,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Item>> {
        let criteria = Self::normalize(criteria);
        let pagination = pagination.validate();

        let page = self.item_repository.search(&criteria, pagination).await?;
        tracing::debug!(
            total = page.total,
            page = pagination.page,
            "catalog search executed"
        );
        Ok(page)
    }

    /// Look up a single item
    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Item>> {
        self.item_repository.find_by_id(id).await
    }

    /// Items whose name matches exactly
    pub async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Item>> {
        self.item_repository.find_by_name(name).await
    }

    /// Items matching either an exact name or an exact detail text
    pub async fn find_by_name_or_detail(
        &self,
        name: &str,
        detail: &str,
    ) -> DomainResult<Vec<Item>> {
        self.item_repository.find_by_name_or_detail(name, detail).await
    }

    /// Items cheaper than `price`
    pub async fn find_by_price_less_than(&self, price: u32) -> DomainResult<Vec<Item>> {
        self.item_repository.find_by_price_less_than(price).await
    }

    /// Items cheaper than `price`, most expensive first
    pub async fn find_by_price_less_than_desc(&self, price: u32) -> DomainResult<Vec<Item>> {
        self.item_repository.find_by_price_less_than_desc(price).await
    }

    /// Items whose detail contains the given substring, most expensive
    /// first
    pub async fn find_by_detail(&self, detail: &str) -> DomainResult<Vec<Item>> {
        self.item_repository.find_by_detail(detail).await
    }

    /// Catches criteria assembled outside the builder methods
    fn normalize(mut criteria: ItemSearchCriteria) -> ItemSearchCriteria {
        if let Some(detail) = &criteria.detail {
            if detail.trim().is_empty() {
                criteria.detail = None;
            }
        }
        criteria
    }
}
