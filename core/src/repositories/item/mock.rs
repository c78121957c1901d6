//! In-memory implementation of ItemRepository for testing
//!
//! Items are kept in a Vec so insertion order doubles as the storage
//! order the real implementation exposes for unordered queries.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::domain::value_objects::ItemSearchCriteria;
use crate::errors::DomainError;
use mall_shared::types::pagination::{PaginatedResponse, Pagination};

use super::r#trait::ItemRepository;

/// Mock item repository backed by a Vec
pub struct MockItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl MockItemRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn matches(criteria: &ItemSearchCriteria, item: &Item) -> bool {
        if let Some(detail) = &criteria.detail {
            if !item.detail.contains(detail.as_str()) {
                return false;
            }
        }
        if let Some(min_price) = criteria.min_price {
            if item.price <= min_price {
                return false;
            }
        }
        if let Some(sell_status) = criteria.sell_status {
            if item.sell_status != sell_status {
                return false;
            }
        }
        true
    }
}

impl Default for MockItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        items.push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|i| i.name == name).cloned().collect())
    }

    async fn find_by_name_or_detail(
        &self,
        name: &str,
        detail: &str,
    ) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|i| i.name == name || i.detail == detail)
            .cloned()
            .collect())
    }

    async fn find_by_price_less_than(&self, price: u32) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|i| i.price < price).cloned().collect())
    }

    async fn find_by_price_less_than_desc(&self, price: u32) -> Result<Vec<Item>, DomainError> {
        let mut matching = self.find_by_price_less_than(price).await?;
        matching.sort_by(|a, b| b.price.cmp(&a.price));
        Ok(matching)
    }

    async fn find_by_detail(&self, detail: &str) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        let mut matching: Vec<Item> = items
            .iter()
            .filter(|i| i.detail.contains(detail))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.price.cmp(&a.price));
        Ok(matching)
    }

    async fn find_by_detail_native(&self, detail: &str) -> Result<Vec<Item>, DomainError> {
        // The two detail lookups are interchangeable by contract
        self.find_by_detail(detail).await
    }

    async fn search(
        &self,
        criteria: &ItemSearchCriteria,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Item>, DomainError> {
        let items = self.items.read().await;
        let matching: Vec<Item> = items
            .iter()
            .filter(|i| Self::matches(criteria, i))
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let page_items: Vec<Item> = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok(PaginatedResponse::new(page_items, pagination, total))
    }
}
