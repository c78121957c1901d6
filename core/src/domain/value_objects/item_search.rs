//! Search criteria for dynamic catalog queries.

use serde::{Deserialize, Serialize};

use crate::domain::entities::item::ItemSellStatus;

/// Dynamic filter over the item catalog.
///
/// Each field is independently optional; absent fields impose no
/// constraint. Present fields combine with logical AND when the filter
/// is translated into a query predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSearchCriteria {
    /// Substring the item detail text must contain
    pub detail: Option<String>,

    /// Exclusive lower bound on price
    pub min_price: Option<u32>,

    /// Exact sell status to match
    pub sell_status: Option<ItemSellStatus>,
}

impl ItemSearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the detail text to contain `detail`. Blank strings are
    /// treated as absent.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if !detail.trim().is_empty() {
            self.detail = Some(detail);
        }
        self
    }

    /// Require price to be strictly greater than `min_price`
    pub fn with_min_price(mut self, min_price: u32) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Require the sell status to equal `sell_status`
    pub fn with_sell_status(mut self, sell_status: ItemSellStatus) -> Self {
        self.sell_status = Some(sell_status);
        self
    }

    /// Resolve a raw status label into a filter. Any label naming a
    /// known status filters on literally that status; unrecognized
    /// labels leave the criteria unconstrained.
    pub fn with_sell_status_label(mut self, label: &str) -> Self {
        if let Some(status) = ItemSellStatus::from_label(label) {
            self.sell_status = Some(status);
        }
        self
    }

    /// True when no field constrains the result set
    pub fn is_unconstrained(&self) -> bool {
        self.detail.is_none() && self.min_price.is_none() && self.sell_status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_is_unconstrained() {
        assert!(ItemSearchCriteria::new().is_unconstrained());
    }

    #[test]
    fn test_blank_detail_is_ignored() {
        let criteria = ItemSearchCriteria::new().with_detail("   ");
        assert!(criteria.detail.is_none());

        let criteria = ItemSearchCriteria::new().with_detail("lamp");
        assert_eq!(criteria.detail.as_deref(), Some("lamp"));
    }

    #[test]
    fn test_status_label_resolution() {
        let criteria = ItemSearchCriteria::new().with_sell_status_label("ON_SALE");
        assert_eq!(criteria.sell_status, Some(ItemSellStatus::OnSale));

        // An explicit sold-out request filters on literally that status
        let criteria = ItemSearchCriteria::new().with_sell_status_label("SOLD_OUT");
        assert_eq!(criteria.sell_status, Some(ItemSellStatus::SoldOut));

        // Unknown labels impose no constraint
        let criteria = ItemSearchCriteria::new().with_sell_status_label("CLEARANCE");
        assert!(criteria.sell_status.is_none());
    }

    #[test]
    fn test_combined_criteria() {
        let criteria = ItemSearchCriteria::new()
            .with_detail("desc")
            .with_min_price(10003)
            .with_sell_status(ItemSellStatus::OnSale);

        assert!(!criteria.is_unconstrained());
        assert_eq!(criteria.min_price, Some(10003));
    }
}
