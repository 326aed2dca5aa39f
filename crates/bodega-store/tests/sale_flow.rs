//! End-to-end sale flow against the real file store: the full path from
//! registration through pricing, persistence, and ledger accumulation.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use bodega_core::money::Money;
use bodega_core::ports::ShopStore;
use bodega_core::pricing::PricingPolicy;
use bodega_core::shop::Shop;
use bodega_core::types::{Cashier, Client, Goods, GoodsCategory};
use bodega_store::FileStore;

fn policy() -> PricingPolicy {
    PricingPolicy {
        markup_food_bps: 2000,
        markup_non_food_bps: 4000,
        discount_food_bps: 1000,
        discount_non_food_bps: 500,
        expiry_window_days_food: 7,
        expiry_window_days_non_food: 10,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 23, 14, 3, 22).unwrap()
}

fn stocked_shop(store: &FileStore) -> Shop {
    let mut shop = Shop::open(1, "GoodsShop", "BGN", policy(), store).unwrap();
    shop.register_goods(Goods::new(
        101,
        "Strawberry",
        Money::from_cents(200),
        GoodsCategory::Food,
        today() + Duration::days(4),
        300,
    ))
    .unwrap();
    shop.register_goods(Goods::new(
        102,
        "Pants",
        Money::from_cents(5000),
        GoodsCategory::NonFood,
        today() + Duration::days(30),
        4,
    ))
    .unwrap();
    shop
}

#[test]
fn full_sale_persists_all_three_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut shop = stocked_shop(&store);
    let cashier = Cashier::new(1, "Kara Clark", Money::from_cents(150_000));
    let client = Client::new(Money::from_cents(500_000));

    let basket = BTreeMap::from([(101, 100), (102, 3)]);
    let receipt = shop
        .sell_goods_at(&cashier, &basket, &client, &store, now())
        .unwrap();

    // 100 × 2.16 (near-expiry food) + 3 × 70.00 (non-food) = 426.00
    assert_eq!(receipt.receipt_id, 1);
    assert_eq!(receipt.total().cents(), 42_600);

    // Human-readable record.
    let text = store.read_receipt_text(1, 1).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "GoodsShop",
            "Receipt number: 1",
            "Cashier ID: 1, Name: Kara Clark",
            "Date: 23-08-2026 14:03:22",
            "Items:",
            "Strawberry x 100 # 2.16 BGN per piece",
            "Pants x 3 # 70.00 BGN per piece",
            "Total Price: 426.00 BGN",
        ]
    );

    // Durable snapshot round-trips identically.
    let restored = store.load_snapshot(1, 1).unwrap();
    assert_eq!(restored, receipt);

    // Ledger record carries the counter and cumulative total.
    let ledger = store.read_ledger(1).unwrap().unwrap();
    assert_eq!(ledger.shop_name, "GoodsShop");
    assert_eq!(ledger.currency, "BGN");
    assert_eq!(ledger.last_receipt_number, 1);
    assert_eq!(ledger.total_cents, 42_600);

    // Inventory reflects the sale; income came back from the ledger.
    assert_eq!(shop.quantity_of(101), Some(200));
    assert_eq!(shop.quantity_of(102), Some(1));
    assert_eq!(shop.total_income().cents(), 42_600);
}

#[test]
fn ledger_accumulates_across_shop_lifetimes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let cashier = Cashier::new(1, "Kara Clark", Money::from_cents(150_000));
    let client = Client::new(Money::from_cents(500_000));
    let basket = BTreeMap::from([(101, 10)]);

    // First shop instance sells once.
    let mut shop = stocked_shop(&store);
    let first = shop
        .sell_goods_at(&cashier, &basket, &client, &store, now())
        .unwrap();
    assert_eq!(first.receipt_id, 1);
    drop(shop);

    // A reopened shop continues the numbering and the income figure.
    let mut shop = stocked_shop(&store);
    assert_eq!(shop.total_income().cents(), first.total_cents);

    let second = shop
        .sell_goods_at(&cashier, &basket, &client, &store, now())
        .unwrap();
    assert_eq!(second.receipt_id, 2);

    let ledger = store.read_ledger(1).unwrap().unwrap();
    assert_eq!(ledger.last_receipt_number, 2);
    assert_eq!(ledger.total_cents, first.total_cents + second.total_cents);

    // Both receipts remain retrievable.
    assert_eq!(store.load_snapshot(1, 1).unwrap().receipt_id, 1);
    assert_eq!(store.load_snapshot(1, 2).unwrap().receipt_id, 2);
}

#[test]
fn failed_sale_leaves_no_trace_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut shop = stocked_shop(&store);
    let cashier = Cashier::new(1, "Kara Clark", Money::from_cents(150_000));

    // Basket costs 426.00; this client has 4.00.
    let client = Client::new(Money::from_cents(400));
    let basket = BTreeMap::from([(101, 100), (102, 3)]);

    shop.sell_goods_at(&cashier, &basket, &client, &store, now())
        .unwrap_err();

    assert!(store.read_ledger(1).unwrap().is_none());
    assert!(store.load_snapshot(1, 1).is_err());
    assert!(store.read_receipt_text(1, 1).is_err());
    assert_eq!(shop.quantity_of(101), Some(300));
}
