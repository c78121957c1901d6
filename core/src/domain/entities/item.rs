//! Item entity for the product catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an item can currently be purchased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemSellStatus {
    OnSale,
    SoldOut,
}

impl ItemSellStatus {
    /// Label as stored in the database and exchanged with callers
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSellStatus::OnSale => "ON_SALE",
            ItemSellStatus::SoldOut => "SOLD_OUT",
        }
    }

    /// Resolve a raw status label. Labels that do not name a known
    /// status yield `None`, which callers treat as "no status filter".
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ON_SALE" => Some(ItemSellStatus::OnSale),
            "SOLD_OUT" => Some(ItemSellStatus::SoldOut),
            _ => None,
        }
    }
}

/// Catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Price in the smallest currency unit
    pub price: u32,

    /// Free-text description shown on the item page
    pub detail: String,

    /// Whether the item is purchasable
    pub sell_status: ItemSellStatus,

    /// Units in stock
    pub stock: u32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new catalog item; items arriving with no stock start
    /// out sold out
    pub fn new(name: String, price: u32, detail: String, stock: u32) -> Self {
        let now = Utc::now();
        let sell_status = if stock == 0 {
            ItemSellStatus::SoldOut
        } else {
            ItemSellStatus::OnSale
        };
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            detail,
            sell_status,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the item is currently purchasable
    pub fn is_on_sale(&self) -> bool {
        matches!(self.sell_status, ItemSellStatus::OnSale)
    }

    /// Takes the item off sale
    pub fn mark_sold_out(&mut self) {
        self.sell_status = ItemSellStatus::SoldOut;
        self.updated_at = Utc::now();
    }

    /// Adds stock and puts the item back on sale
    pub fn restock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
        if self.stock > 0 {
            self.sell_status = ItemSellStatus::OnSale;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_status_follows_stock() {
        let stocked = Item::new("lamp".to_string(), 10000, "desk lamp".to_string(), 100);
        assert!(stocked.is_on_sale());

        let empty = Item::new("lamp".to_string(), 10000, "desk lamp".to_string(), 0);
        assert_eq!(empty.sell_status, ItemSellStatus::SoldOut);
    }

    #[test]
    fn test_restock_puts_item_back_on_sale() {
        let mut item = Item::new("mug".to_string(), 4500, "stoneware mug".to_string(), 0);
        assert!(!item.is_on_sale());

        item.restock(20);
        assert!(item.is_on_sale());
        assert_eq!(item.stock, 20);
    }

    #[test]
    fn test_mark_sold_out() {
        let mut item = Item::new("mug".to_string(), 4500, "stoneware mug".to_string(), 5);
        item.mark_sold_out();
        assert!(!item.is_on_sale());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ItemSellStatus::OnSale.as_str(), "ON_SALE");
        assert_eq!(ItemSellStatus::SoldOut.as_str(), "SOLD_OUT");

        assert_eq!(ItemSellStatus::from_label("ON_SALE"), Some(ItemSellStatus::OnSale));
        assert_eq!(ItemSellStatus::from_label("SOLD_OUT"), Some(ItemSellStatus::SoldOut));
        assert_eq!(ItemSellStatus::from_label("CLEARANCE"), None);
        assert_eq!(ItemSellStatus::from_label(""), None);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ItemSellStatus::OnSale).unwrap();
        assert_eq!(json, "\"ON_SALE\"");

        let json = serde_json::to_string(&ItemSellStatus::SoldOut).unwrap();
        assert_eq!(json, "\"SOLD_OUT\"");
    }
}
