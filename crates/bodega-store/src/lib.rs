//! # bodega-store: Flat-File Storage for Bodega
//!
//! File-backed implementation of the [`bodega_core::ShopStore`] port.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Data Flow                                 │
//! │                                                                         │
//! │  Shop::sell_goods (bodega-core)                                        │
//! │       │                                                                 │
//! │       │  ShopStore trait calls                                         │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bodega-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐         ┌────────────────────────────────┐ │   │
//! │  │   │  StoreLayout  │         │          FileStore             │ │   │
//! │  │   │  (layout.rs)  │◄────────│        (file_store.rs)         │ │   │
//! │  │   │               │         │                                │ │   │
//! │  │   │ path builders │         │ receipt text, JSON snapshots,  │ │   │
//! │  │   │ per record    │         │ atomic ledger rewrites         │ │   │
//! │  │   └───────────────┘         └────────────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <root>/receipts/1_receipt_1.txt      (human-readable record)          │
//! │  <root>/snapshots/1_receipt_1.json    (durable snapshot)               │
//! │  <root>/ledger/1_shop_info.json       (per-shop ledger record)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bodega_store::FileStore;
//!
//! let store = FileStore::new("./bodega-data");
//! let mut shop = Shop::open(1, "GoodsShop", "BGN", policy, &store)?;
//! let receipt = shop.sell_goods(&cashier, &items, &client, &store)?;
//! println!("{}", store.read_receipt_text(1, receipt.receipt_id)?);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod file_store;
pub mod layout;

// =============================================================================
// Re-exports
// =============================================================================

pub use file_store::FileStore;
pub use layout::StoreLayout;
