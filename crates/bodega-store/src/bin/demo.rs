//! # Demo Driver
//!
//! Runs one full shop day against a real file store: register cashiers and
//! goods, sell a basket, read the persisted receipt back, print the profit.
//!
//! ## Usage
//! ```bash
//! # Store data lands in ./bodega-data (pass a path to override)
//! cargo run -p bodega-store --bin demo
//!
//! cargo run -p bodega-store --bin demo -- /tmp/shop-data
//!
//! # With storage-level logging
//! RUST_LOG=debug cargo run -p bodega-store --bin demo
//! ```
//!
//! Running it twice shows the ledger carrying over: receipt numbers and
//! cumulative income continue where the previous run stopped.

use std::collections::BTreeMap;
use std::env;

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

use bodega_core::money::Money;
use bodega_core::ports::ShopStore;
use bodega_core::pricing::PricingPolicy;
use bodega_core::shop::Shop;
use bodega_core::types::{Cashier, Client, Goods, GoodsCategory};
use bodega_store::FileStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = env::args().nth(1).unwrap_or_else(|| "./bodega-data".to_string());
    let store = FileStore::new(&root);

    // 20%/40% markup, 10%/5% near-expiry discount, 7/10 day windows.
    let policy = PricingPolicy {
        markup_food_bps: 2000,
        markup_non_food_bps: 4000,
        discount_food_bps: 1000,
        discount_non_food_bps: 500,
        expiry_window_days_food: 7,
        expiry_window_days_non_food: 10,
    };

    let mut shop = Shop::open(1, "GoodsShop", "BGN", policy, &store)?;

    let cashier = Cashier::new(1, "Kara Clark", Money::from_major_minor(1500, 0));
    shop.register_cashier(cashier.clone())?;
    shop.register_cashier(Cashier::new(2, "Sara Tara", Money::from_major_minor(1000, 0)))?;

    let today = Utc::now().date_naive();
    shop.register_goods(Goods::new(
        101,
        "Strawberry",
        Money::from_major_minor(2, 0),
        GoodsCategory::Food,
        today + Duration::days(4),
        300,
    ))?;
    shop.register_goods(Goods::new(
        102,
        "Pants",
        Money::from_major_minor(50, 0),
        GoodsCategory::NonFood,
        today + Duration::days(30),
        4,
    ))?;

    let basket = BTreeMap::from([(101, 100), (102, 3)]);
    let client = Client::new(Money::from_major_minor(5000, 0));

    let receipt = shop.sell_goods(&cashier, &basket, &client, &store)?;

    println!("{}", store.read_receipt_text(shop.id(), receipt.receipt_id)?);

    let restored = store.load_snapshot(shop.id(), receipt.receipt_id)?;
    println!("Reloaded snapshot:");
    println!("Shop: {}", restored.shop_name);
    println!("Receipt ID: {}", restored.receipt_id);
    println!("Cashier: {}", restored.cashier_name);
    println!("Total Price: {} {}", restored.total(), restored.currency);

    println!();
    println!(
        "{} Total Profit: {} {}",
        shop.name(),
        shop.profit(),
        shop.currency()
    );

    Ok(())
}
