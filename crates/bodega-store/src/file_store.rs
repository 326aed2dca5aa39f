//! # File Store
//!
//! The flat-file implementation of [`ShopStore`].
//!
//! ## Atomic Ledger Rewrites
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │            Why the Ledger Goes Through a Temp File                      │
//! │                                                                         │
//! │  The ledger is a read-modify-write record rewritten on every sale.     │
//! │  A crash mid-write must never leave a torn file: the ledger is the     │
//! │  shop's authoritative income figure.                                   │
//! │                                                                         │
//! │  write_ledger(record)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. serialize into ledger/.tmpXXXXXX (same directory, same fs)         │
//! │  2. rename onto ledger/{shop}_shop_info.json                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  readers see either the old record or the new one, never a mix         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipt records and snapshots get the same treatment for uniformity;
//! they are write-once, so for them it only guards against partial writes.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use bodega_core::ports::{LedgerRecord, ShopStore, StorageError, StorageResult};
use bodega_core::receipt::Receipt;

use crate::layout::StoreLayout;

// =============================================================================
// File Store
// =============================================================================

/// Flat-file [`ShopStore`] rooted at a single directory.
///
/// ## Usage
/// ```rust
/// use bodega_store::FileStore;
/// use bodega_core::ports::ShopStore;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = FileStore::new(dir.path());
///
/// // A shop with no sales yet has no ledger record.
/// assert!(store.read_ledger(1).unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    layout: StoreLayout,
}

impl FileStore {
    /// Creates a file store rooted at the given directory. The directory
    /// tree is created on first write.
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        FileStore {
            layout: StoreLayout::new(root),
        }
    }

    /// The layout in use (mainly for diagnostics and tests).
    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    // =========================================================================
    // Write/Read Primitives
    // =========================================================================

    /// Writes `bytes` to `path` atomically: temp file in the target
    /// directory, then rename over the destination.
    fn write_atomic(path: &Path, bytes: &[u8]) -> StorageResult<()> {
        let dir = path.parent().ok_or_else(|| StorageError::Io {
            path: path.display().to_string(),
            message: "record path has no parent directory".to_string(),
        })?;

        fs::create_dir_all(dir).map_err(|err| io_error(dir, &err))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| io_error(dir, &err))?;
        tmp.write_all(bytes).map_err(|err| io_error(path, &err))?;
        tmp.persist(path)
            .map_err(|err| io_error(path, &err.error))?;

        Ok(())
    }

    fn read_to_string(path: &Path) -> StorageResult<String> {
        fs::read_to_string(path).map_err(|err| io_error(path, &err))
    }
}

/// Maps an I/O error onto the port's error type, keeping the path.
fn io_error(path: &Path, err: &std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

// =============================================================================
// ShopStore Implementation
// =============================================================================

impl ShopStore for FileStore {
    fn read_ledger(&self, shop_id: u32) -> StorageResult<Option<LedgerRecord>> {
        let path = self.layout.ledger_path(shop_id);
        if !path.exists() {
            return Ok(None);
        }

        let json = Self::read_to_string(&path)?;
        let record = serde_json::from_str(&json).map_err(|err| StorageError::Corrupt {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        Ok(Some(record))
    }

    fn write_ledger(&self, shop_id: u32, record: &LedgerRecord) -> StorageResult<()> {
        let path = self.layout.ledger_path(shop_id);
        debug!(shop = shop_id, receipt = record.last_receipt_number, "Writing ledger record");

        let json = serde_json::to_vec_pretty(record).map_err(|err| StorageError::Corrupt {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::write_atomic(&path, &json)
    }

    fn write_receipt_text(&self, receipt: &Receipt) -> StorageResult<()> {
        let path = self.layout.receipt_text_path(receipt.shop_id, receipt.receipt_id);
        debug!(shop = receipt.shop_id, receipt = receipt.receipt_id, "Writing receipt record");

        Self::write_atomic(&path, receipt.render().as_bytes())
    }

    fn read_receipt_text(&self, shop_id: u32, receipt_id: u32) -> StorageResult<String> {
        let path = self.layout.receipt_text_path(shop_id, receipt_id);
        if !path.exists() {
            return Err(StorageError::ReceiptMissing { shop_id, receipt_id });
        }
        Self::read_to_string(&path)
    }

    fn store_snapshot(&self, receipt: &Receipt) -> StorageResult<()> {
        let path = self.layout.snapshot_path(receipt.shop_id, receipt.receipt_id);
        debug!(shop = receipt.shop_id, receipt = receipt.receipt_id, "Storing receipt snapshot");

        let json = serde_json::to_vec_pretty(receipt).map_err(|err| StorageError::Corrupt {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::write_atomic(&path, &json)
    }

    fn load_snapshot(&self, shop_id: u32, receipt_id: u32) -> StorageResult<Receipt> {
        let path = self.layout.snapshot_path(shop_id, receipt_id);
        if !path.exists() {
            return Err(StorageError::SnapshotMissing { shop_id, receipt_id });
        }

        let json = Self::read_to_string(&path)?;
        serde_json::from_str(&json).map_err(|err| StorageError::Corrupt {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
