//! # Receipt Module
//!
//! Receipt assembly: accumulating sale lines, decrementing inventory, and
//! rendering the human-readable record.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │            Why Lines Snapshot Instead of Referencing Goods              │
//! │                                                                         │
//! │  Shop inventory arena               Receipt #7                          │
//! │  ┌──────────────────────┐           ┌──────────────────────────┐       │
//! │  │ 101 → Strawberry     │           │ goods_id: 101            │       │
//! │  │       qty: 200 (live)│           │ name: "Strawberry"       │       │
//! │  │       ...            │           │ quantity: 100            │       │
//! │  └──────────────────────┘           │ unit_price: 2.16 (frozen)│       │
//! │                                     └──────────────────────────┘       │
//! │                                                                         │
//! │  The arena stays the single owner of Goods. The receipt keeps the id   │
//! │  plus a frozen name/price, so the historical record never changes      │
//! │  even if inventory is renamed, repriced, or sold out later.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Cashier, Goods};

// =============================================================================
// Sale Line
// =============================================================================

/// One entry in a receipt: a sold good, quantity, and frozen unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Id of the goods in the shop's arena.
    pub goods_id: u32,
    /// Goods name at time of sale (frozen).
    pub name: String,
    /// Quantity sold.
    pub quantity: u32,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
}

impl SaleLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity as i64)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A sales receipt: accumulates line items during the commit pass of a
/// sale, then becomes immutable once persisted.
///
/// Holds copies of the shop/cashier display data rather than references;
/// a stored receipt must stay readable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub shop_id: u32,
    pub shop_name: String,
    /// Shop currency code, used when rendering amounts.
    pub currency: String,
    /// Monotonic per-shop receipt number (ledger counter + 1).
    pub receipt_id: u32,
    /// Cashier id at time of sale (frozen).
    pub cashier_id: u32,
    /// Cashier name at time of sale (frozen).
    pub cashier_name: String,
    /// When the sale happened.
    pub issued_at: DateTime<Utc>,
    /// Sale lines in the order they were committed.
    pub lines: Vec<SaleLine>,
    /// Total price of all lines, in cents.
    pub total_cents: i64,
}

impl Receipt {
    /// Creates an empty receipt for a sale in progress.
    pub fn new(
        shop_id: u32,
        shop_name: impl Into<String>,
        currency: impl Into<String>,
        cashier: &Cashier,
        receipt_id: u32,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Receipt {
            shop_id,
            shop_name: shop_name.into(),
            currency: currency.into(),
            receipt_id,
            cashier_id: cashier.id,
            cashier_name: cashier.name.clone(),
            issued_at,
            lines: Vec::new(),
            total_cents: 0,
        }
    }

    /// Returns the receipt total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Adds a sale line for `quantity` pieces of `goods` at `unit_price`.
    ///
    /// ## Behavior
    /// - Fails with [`CoreError::InsufficientQuantity`] when the goods'
    ///   *current* stock is short. The check runs at call time, not against
    ///   a pre-transaction snapshot, so line ordering within one sale
    ///   matters if the same goods id were committed twice.
    /// - On success, decrements the goods' quantity, appends a frozen
    ///   line, and adds `unit_price × quantity` to the running total.
    pub fn add_line(&mut self, goods: &mut Goods, quantity: u32, unit_price: Money) -> CoreResult<()> {
        if goods.quantity < quantity {
            return Err(CoreError::InsufficientQuantity {
                name: goods.name.clone(),
                available: goods.quantity,
                requested: quantity,
            });
        }

        goods.quantity -= quantity;
        self.lines.push(SaleLine {
            goods_id: goods.id,
            name: goods.name.clone(),
            quantity,
            unit_price_cents: unit_price.cents(),
        });
        self.total_cents += unit_price.multiply_quantity(quantity as i64).cents();

        Ok(())
    }

    /// The receipt timestamp formatted for the human-readable record.
    pub fn formatted_date(&self) -> String {
        self.issued_at.format("%d-%m-%Y %H:%M:%S").to_string()
    }

    /// Renders the human-readable receipt record.
    ///
    /// ## Format
    /// ```text
    /// GoodsShop
    /// Receipt number: 1
    /// Cashier ID: 1, Name: Kara Clark
    /// Date: 23-08-2026 14:03:22
    /// Items:
    /// Strawberry x 100 # 2.16 BGN per piece
    /// Total Price: 216.00 BGN
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        // fmt::Write into a String cannot fail.
        let _ = writeln!(out, "{}", self.shop_name);
        let _ = writeln!(out, "Receipt number: {}", self.receipt_id);
        let _ = writeln!(out, "Cashier ID: {}, Name: {}", self.cashier_id, self.cashier_name);
        let _ = writeln!(out, "Date: {}", self.formatted_date());
        let _ = writeln!(out, "Items:");
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{} x {} # {} {} per piece",
                line.name,
                line.quantity,
                line.unit_price(),
                self.currency
            );
        }
        let _ = writeln!(out, "Total Price: {} {}", self.total(), self.currency);
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
