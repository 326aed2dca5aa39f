//! # Store Layout
//!
//! On-disk layout of a store root: which record lives in which file.
//!
//! ```text
//! <root>/
//! ├── receipts/                 one human-readable record per sale
//! │   └── {shop}_receipt_{n}.txt
//! ├── snapshots/                durable, round-trippable receipt snapshots
//! │   └── {shop}_receipt_{n}.json
//! └── ledger/                   one record per shop, rewritten each sale
//!     └── {shop}_shop_info.json
//! ```
//!
//! Keys are `(shop_id, receipt_id)` for receipts and `shop_id` for the
//! ledger; file names encode the keys so records are addressable without
//! an index.

use std::path::{Path, PathBuf};

// =============================================================================
// Store Layout
// =============================================================================

/// Path builder for the flat-file store.
///
/// Holds only the root; directories are created lazily by the store on
/// first write, so constructing a layout never touches the disk.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    /// Creates a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreLayout { root: root.into() }
    }

    /// The store root directory.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the human-readable receipt record.
    pub fn receipt_text_path(&self, shop_id: u32, receipt_id: u32) -> PathBuf {
        self.root
            .join("receipts")
            .join(format!("{shop_id}_receipt_{receipt_id}.txt"))
    }

    /// Path of the durable receipt snapshot.
    pub fn snapshot_path(&self, shop_id: u32, receipt_id: u32) -> PathBuf {
        self.root
            .join("snapshots")
            .join(format!("{shop_id}_receipt_{receipt_id}.json"))
    }

    /// Path of the per-shop ledger record.
    pub fn ledger_path(&self, shop_id: u32) -> PathBuf {
        self.root
            .join("ledger")
            .join(format!("{shop_id}_shop_info.json"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_encode_the_keys() {
        let layout = StoreLayout::new("/tmp/bodega");

        assert_eq!(
            layout.receipt_text_path(1, 7),
            PathBuf::from("/tmp/bodega/receipts/1_receipt_7.txt")
        );
        assert_eq!(
            layout.snapshot_path(1, 7),
            PathBuf::from("/tmp/bodega/snapshots/1_receipt_7.json")
        );
        assert_eq!(
            layout.ledger_path(1),
            PathBuf::from("/tmp/bodega/ledger/1_shop_info.json")
        );
    }
}
