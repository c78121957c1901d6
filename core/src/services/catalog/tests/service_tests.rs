//! Unit tests for the dynamic catalog search and fixed finders
//!
//! The seed mirrors a ten-item catalog: prices 10001..=10010, details
//! "desc1".."desc10", the first five on sale and the last five sold
//! out.

use std::sync::Arc;

use crate::domain::entities::item::{Item, ItemSellStatus};
use crate::domain::value_objects::ItemSearchCriteria;
use crate::repositories::{ItemRepository, MockItemRepository};
use crate::services::catalog::CatalogService;
use mall_shared::types::pagination::Pagination;

async fn seeded_service() -> CatalogService<MockItemRepository> {
    let repo = Arc::new(MockItemRepository::new());
    for i in 1..=10u32 {
        let stock = if i <= 5 { 100 } else { 0 };
        repo.create(Item::new(
            format!("test item{}", i),
            10000 + i,
            format!("desc{}", i),
            stock,
        ))
        .await
        .unwrap();
    }
    CatalogService::new(repo)
}

#[tokio::test]
async fn test_unconstrained_search_returns_all_rows_paginated() {
    let service = seeded_service().await;

    let page = service
        .search(ItemSearchCriteria::new(), Pagination::of(0, 5))
        .await
        .unwrap();

    assert_eq!(page.count(), 5);
    assert_eq!(page.total, 10);
    assert_eq!(page.total_pages, 2);
    assert!(page.has_next());
}

#[tokio::test]
async fn test_price_threshold_is_strictly_greater() {
    let service = seeded_service().await;

    // Every seeded item is priced above 10000
    let page = service
        .search(
            ItemSearchCriteria::new().with_min_price(10000),
            Pagination::of(0, 100),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 10);

    // 10005 itself is excluded by the strict comparison
    let page = service
        .search(
            ItemSearchCriteria::new().with_min_price(10005),
            Pagination::of(0, 100),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 5);
    assert!(page.items.iter().all(|i| i.price > 10005));
}

#[tokio::test]
async fn test_three_way_conjunction() {
    let service = seeded_service().await;

    let criteria = ItemSearchCriteria::new()
        .with_detail("desc")
        .with_min_price(10003)
        .with_sell_status(ItemSellStatus::OnSale);
    let page = service.search(criteria, Pagination::of(0, 5)).await.unwrap();

    // Only the on-sale items above the threshold remain
    let mut prices: Vec<u32> = page.items.iter().map(|i| i.price).collect();
    prices.sort_unstable();
    assert_eq!(prices, vec![10004, 10005]);
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn test_sold_out_request_filters_literally() {
    let service = seeded_service().await;

    let criteria = ItemSearchCriteria::new()
        .with_detail("desc")
        .with_min_price(10003)
        .with_sell_status_label("SOLD_OUT");
    let page = service.search(criteria, Pagination::of(0, 10)).await.unwrap();

    assert_eq!(page.total, 5);
    assert!(page
        .items
        .iter()
        .all(|i| i.sell_status == ItemSellStatus::SoldOut && i.price > 10003));
}

#[tokio::test]
async fn test_unknown_status_label_imposes_no_constraint() {
    let service = seeded_service().await;

    let criteria = ItemSearchCriteria::new().with_sell_status_label("CLEARANCE");
    let page = service.search(criteria, Pagination::of(0, 100)).await.unwrap();
    assert_eq!(page.total, 10);
}

#[tokio::test]
async fn test_blank_detail_is_normalized_away() {
    let service = seeded_service().await;

    let criteria = ItemSearchCriteria {
        detail: Some("  ".to_string()),
        min_price: None,
        sell_status: None,
    };
    let page = service.search(criteria, Pagination::of(0, 100)).await.unwrap();
    assert_eq!(page.total, 10);
}

#[tokio::test]
async fn test_second_page_and_overrun() {
    let service = seeded_service().await;

    let second = service
        .search(ItemSearchCriteria::new(), Pagination::of(1, 5))
        .await
        .unwrap();
    assert_eq!(second.count(), 5);
    assert_eq!(second.total, 10);
    assert!(!second.has_next());

    let beyond = service
        .search(ItemSearchCriteria::new(), Pagination::of(5, 5))
        .await
        .unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.total, 10);
}

#[tokio::test]
async fn test_find_by_name_exact_match() {
    let service = seeded_service().await;

    let found = service.find_by_name("test item1").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].price, 10001);

    // Exact match only; "test item1" must not match "test item10"
    let found = service.find_by_name("test item").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_find_by_name_or_detail() {
    let service = seeded_service().await;

    let found = service
        .find_by_name_or_detail("test item1", "desc5")
        .await
        .unwrap();
    let mut prices: Vec<u32> = found.iter().map(|i| i.price).collect();
    prices.sort_unstable();
    assert_eq!(prices, vec![10001, 10005]);
}

#[tokio::test]
async fn test_price_less_than_finders() {
    let service = seeded_service().await;

    let unordered = service.find_by_price_less_than(10006).await.unwrap();
    assert_eq!(unordered.len(), 5);

    let descending = service.find_by_price_less_than_desc(10006).await.unwrap();
    let prices: Vec<u32> = descending.iter().map(|i| i.price).collect();
    assert_eq!(prices, vec![10005, 10004, 10003, 10002, 10001]);
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_find_by_detail_orders_by_price_desc() {
    let service = seeded_service().await;

    let found = service.find_by_detail("desc").await.unwrap();
    assert_eq!(found.len(), 10);
    let prices: Vec<u32> = found.iter().map(|i| i.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(prices[0], 10010);
}
