//! MySQL implementation of the ItemRepository trait.
//!
//! Filtering, ordering, and pagination are pushed down to MySQL; no
//! result set is scanned in process. Unordered queries use creation
//! time as the storage order so pagination stays deterministic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mall_core::domain::entities::item::{Item, ItemSellStatus};
use mall_core::domain::value_objects::ItemSearchCriteria;
use mall_core::errors::DomainError;
use mall_core::repositories::ItemRepository;
use mall_shared::types::pagination::{PaginatedResponse, Pagination};

use super::predicate::SqlConditions;

/// MySQL implementation of ItemRepository
pub struct MySqlItemRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlItemRepository {
    /// Create a new MySQL item repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Item entity
    fn row_to_item(row: &sqlx::mysql::MySqlRow) -> Result<Item, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("failed to get id: {}", e),
        })?;

        let status_label: String =
            row.try_get("sell_status").map_err(|e| DomainError::Database {
                message: format!("failed to get sell_status: {}", e),
            })?;
        let sell_status =
            ItemSellStatus::from_label(&status_label).ok_or_else(|| DomainError::Database {
                message: format!("unknown sell_status stored: {}", status_label),
            })?;

        Ok(Item {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("failed to get name: {}", e),
            })?,
            price: row.try_get("price").map_err(|e| DomainError::Database {
                message: format!("failed to get price: {}", e),
            })?,
            detail: row.try_get("detail").map_err(|e| DomainError::Database {
                message: format!("failed to get detail: {}", e),
            })?,
            sell_status,
            stock: row.try_get("stock").map_err(|e| DomainError::Database {
                message: format!("failed to get stock: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Translate search criteria into an accumulated predicate; absent
    /// fields contribute nothing
    fn conditions_for(criteria: &ItemSearchCriteria) -> SqlConditions {
        let mut conditions = SqlConditions::new();
        if let Some(detail) = &criteria.detail {
            conditions.and_contains("detail", detail);
        }
        if let Some(min_price) = criteria.min_price {
            conditions.and_gt("price", min_price);
        }
        if let Some(sell_status) = criteria.sell_status {
            conditions.and_eq("sell_status", sell_status.as_str());
        }
        conditions
    }

    async fn fetch_items(
        &self,
        sql: &str,
        conditions: &SqlConditions,
    ) -> Result<Vec<Item>, DomainError> {
        let rows = conditions
            .bind_to(sqlx::query(sql))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_item).collect()
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            INSERT INTO items (
                id, name, price, detail, sell_status, stock,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(item.id.to_string())
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.detail)
            .bind(item.sell_status.as_str())
            .bind(item.stock)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to create item: {}", e),
            })?;

        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let query = r#"
            SELECT id, name, price, detail, sell_status, stock,
                   created_at, updated_at
            FROM items
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item lookup failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, DomainError> {
        let mut conditions = SqlConditions::new();
        conditions.and_eq("name", name);

        let sql = format!(
            "SELECT id, name, price, detail, sell_status, stock, \
             created_at, updated_at FROM items{} ORDER BY created_at",
            conditions.where_sql()
        );
        self.fetch_items(&sql, &conditions).await
    }

    async fn find_by_name_or_detail(
        &self,
        name: &str,
        detail: &str,
    ) -> Result<Vec<Item>, DomainError> {
        let query = r#"
            SELECT id, name, price, detail, sell_status, stock,
                   created_at, updated_at
            FROM items
            WHERE name = ? OR detail = ?
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(name)
            .bind(detail)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_by_price_less_than(&self, price: u32) -> Result<Vec<Item>, DomainError> {
        let query = r#"
            SELECT id, name, price, detail, sell_status, stock,
                   created_at, updated_at
            FROM items
            WHERE price < ?
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(price)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_by_price_less_than_desc(&self, price: u32) -> Result<Vec<Item>, DomainError> {
        let query = r#"
            SELECT id, name, price, detail, sell_status, stock,
                   created_at, updated_at
            FROM items
            WHERE price < ?
            ORDER BY price DESC
        "#;

        let rows = sqlx::query(query)
            .bind(price)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_by_detail(&self, detail: &str) -> Result<Vec<Item>, DomainError> {
        let mut conditions = SqlConditions::new();
        conditions.and_contains("detail", detail);

        let sql = format!(
            "SELECT id, name, price, detail, sell_status, stock, \
             created_at, updated_at FROM items{} ORDER BY price DESC",
            conditions.where_sql()
        );
        self.fetch_items(&sql, &conditions).await
    }

    async fn find_by_detail_native(&self, detail: &str) -> Result<Vec<Item>, DomainError> {
        // Same contract as find_by_detail, expressed as one fixed
        // statement with the wildcards assembled server-side
        let query = r#"
            SELECT id, name, price, detail, sell_status, stock,
                   created_at, updated_at
            FROM items
            WHERE detail LIKE CONCAT('%', ?, '%')
            ORDER BY price DESC
        "#;

        let rows = sqlx::query(query)
            .bind(detail)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn search(
        &self,
        criteria: &ItemSearchCriteria,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Item>, DomainError> {
        let conditions = Self::conditions_for(criteria);
        let where_sql = conditions.where_sql();

        let count_sql = format!("SELECT COUNT(*) AS total FROM items{}", where_sql);
        let count_row = conditions
            .bind_to(sqlx::query(&count_sql))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item count failed: {}", e),
            })?;
        let total: i64 = count_row.try_get("total").map_err(|e| DomainError::Database {
            message: format!("failed to get total: {}", e),
        })?;

        let page_sql = format!(
            "SELECT id, name, price, detail, sell_status, stock, \
             created_at, updated_at FROM items{} \
             ORDER BY created_at LIMIT ? OFFSET ?",
            where_sql
        );
        let rows = conditions
            .bind_to(sqlx::query(&page_sql))
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("item search failed: {}", e),
            })?;

        let items = rows
            .iter()
            .map(Self::row_to_item)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(total, page = pagination.page, "catalog search executed");
        Ok(PaginatedResponse::new(items, pagination, total as u64))
    }
}
