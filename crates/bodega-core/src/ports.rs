//! # Storage Ports
//!
//! The collaborator contract between the pure core and whatever persists
//! receipts and the per-shop ledger.
//!
//! ## Port Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storage Port Explained                             │
//! │                                                                         │
//! │  Shop::sell_goods(...)                                                 │
//! │       │                                                                 │
//! │       │  store.read_ledger(shop_id)                                    │
//! │       │  store.write_receipt_text(&receipt)                            │
//! │       │  store.store_snapshot(&receipt)                                │
//! │       │  store.write_ledger(shop_id, &record)                          │
//! │       ▼                                                                 │
//! │  dyn ShopStore  ← trait defined HERE, no I/O in this crate             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bodega-store::FileStore (flat files)  /  test doubles in unit tests   │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • bodega-core stays 100% testable without a filesystem                │
//! │  • storage format can change without touching business rules           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer Assumption
//! The ledger update is a read-modify-write. There is exactly one logical
//! actor per shop, so no locking is specified here; a concurrent
//! multi-shop-instance deployment would need exclusive access per shop id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Money;
use crate::receipt::Receipt;

// =============================================================================
// Ledger Record
// =============================================================================

/// The per-shop durable ledger record: cumulative income and the last
/// receipt number handed out.
///
/// This is the authoritative source of the shop's income - `Shop` re-reads
/// it after every sale instead of trusting an in-memory accumulator.
/// Stored as a typed record (JSON on disk in `bodega-store`), replacing
/// fragile free-text scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Shop display name, kept so the record is self-describing.
    pub shop_name: String,
    /// Shop currency code (e.g. "BGN").
    pub currency: String,
    /// Receipt number of the most recent sale; 0 means no sales yet.
    pub last_receipt_number: u32,
    /// Cumulative income of the shop, in cents.
    pub total_cents: i64,
}

impl LedgerRecord {
    /// A fresh record for a shop with no recorded sales.
    pub fn empty(shop_name: impl Into<String>, currency: impl Into<String>) -> Self {
        LedgerRecord {
            shop_name: shop_name.into(),
            currency: currency.into(),
            last_receipt_number: 0,
            total_cents: 0,
        }
    }

    /// Cumulative income as a Money type.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Folds a completed receipt into the record: bumps the receipt
    /// counter and adds the receipt total to the cumulative income.
    pub fn record_sale(&mut self, receipt: &Receipt) {
        self.last_receipt_number = receipt.receipt_id;
        self.total_cents += receipt.total_cents;
    }
}

// =============================================================================
// Storage Error
// =============================================================================

/// Persistence failures surfaced through the port.
///
/// These wrap whatever went wrong below the trait (I/O, serialization)
/// with enough context to diagnose without the backend's own error types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a record failed.
    #[error("I/O failure at {path}: {message}")]
    Io { path: String, message: String },

    /// A record exists but cannot be decoded.
    ///
    /// ## When This Occurs
    /// - Hand-edited ledger file
    /// - Partial write from a crashed process (the file store's atomic
    ///   rename makes this unlikely but not impossible)
    #[error("Corrupt record at {path}: {reason}")]
    Corrupt { path: String, reason: String },

    /// No snapshot stored under the requested key.
    #[error("No receipt snapshot for shop {shop_id}, receipt {receipt_id}")]
    SnapshotMissing { shop_id: u32, receipt_id: u32 },

    /// No human-readable receipt record under the requested key.
    #[error("No receipt record for shop {shop_id}, receipt {receipt_id}")]
    ReceiptMissing { shop_id: u32, receipt_id: u32 },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Shop Store Trait
// =============================================================================

/// Storage collaborator for a shop.
///
/// Implementations persist three kinds of records, all keyed by shop id
/// (plus receipt id where applicable):
///
/// 1. the human-readable receipt record (one per sale),
/// 2. the durable receipt snapshot (round-trippable),
/// 3. the per-shop ledger record (overwritten each sale).
pub trait ShopStore {
    /// Reads the shop's ledger record. `Ok(None)` when the shop has no
    /// recorded sales yet - callers treat that as the zero record.
    fn read_ledger(&self, shop_id: u32) -> StorageResult<Option<LedgerRecord>>;

    /// Rewrites the shop's ledger record. Must be atomic: a crash mid-write
    /// leaves either the old or the new record, never a torn one.
    fn write_ledger(&self, shop_id: u32, record: &LedgerRecord) -> StorageResult<()>;

    /// Writes the human-readable receipt record.
    fn write_receipt_text(&self, receipt: &Receipt) -> StorageResult<()>;

    /// Reads back a human-readable receipt record.
    fn read_receipt_text(&self, shop_id: u32, receipt_id: u32) -> StorageResult<String>;

    /// Stores the durable receipt snapshot keyed by `(shop_id, receipt_id)`.
    fn store_snapshot(&self, receipt: &Receipt) -> StorageResult<()>;

    /// Retrieves a previously stored receipt snapshot.
    fn load_snapshot(&self, shop_id: u32, receipt_id: u32) -> StorageResult<Receipt>;
}

// =============================================================================
// Unit Tests
// =============================================================================
