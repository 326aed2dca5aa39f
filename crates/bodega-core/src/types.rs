//! # Domain Types
//!
//! Core domain types used throughout Bodega.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Goods       │   │    Cashier      │   │     Client      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (u32)       │   │  money_cents    │       │
//! │  │  name           │   │  name           │   │                 │       │
//! │  │  buying_cents   │   │  salary_cents   │   │  one afford-    │       │
//! │  │  category       │   │                 │   │  ability check  │       │
//! │  │  expires_on     │   │  immutable      │   │  per sale       │       │
//! │  │  quantity (mut) │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   Percentage    │   │  GoodsCategory  │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  Food           │                             │
//! │  │  2000 = 20%     │   │  NonFood        │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Goods::quantity` is the only mutable field in the model; it is owned by
//! the shop's inventory arena and decremented during receipt assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Percentage
// =============================================================================

/// A non-negative percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (the worked example's food markup)
///
/// Integer bps keep every pricing step in exact integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Returns the value in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percentage(0)
    }

    /// Checks if the percentage is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

// =============================================================================
// Goods Category
// =============================================================================

/// Classification driving which markup/discount/expiry-window parameters
/// apply during pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoodsCategory {
    /// Perishables: short expiry windows, typically steeper discounts.
    Food,
    /// Everything else on the shelf.
    NonFood,
}

// =============================================================================
// Goods
// =============================================================================

/// A goods entry in the shop's inventory.
///
/// Identity is the caller-assigned `id`; the shop's arena rejects
/// duplicates at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goods {
    /// Caller-assigned identifier, unique within one shop.
    pub id: u32,

    /// Display name shown on the receipt.
    pub name: String,

    /// Buying price in cents (what the shop paid per piece).
    pub buying_price_cents: i64,

    /// Category selecting the pricing parameters.
    pub category: GoodsCategory,

    /// Last day the goods may still be sold.
    pub expires_on: NaiveDate,

    /// Current stock level. Never goes negative: the receipt checks
    /// before decrementing.
    pub quantity: u32,
}

impl Goods {
    /// Creates a new goods entry.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        buying_price: Money,
        category: GoodsCategory,
        expires_on: NaiveDate,
        quantity: u32,
    ) -> Self {
        Goods {
            id,
            name: name.into(),
            buying_price_cents: buying_price.cents(),
            category,
            expires_on,
            quantity,
        }
    }

    /// Returns the buying price as a Money type.
    #[inline]
    pub fn buying_price(&self) -> Money {
        Money::from_cents(self.buying_price_cents)
    }

    /// Total acquisition cost of the current stock (buying price × quantity).
    pub fn stock_cost(&self) -> Money {
        self.buying_price().multiply_quantity(self.quantity as i64)
    }
}

// =============================================================================
// Cashier
// =============================================================================

/// A cashier on the shop's roster. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cashier {
    pub id: u32,
    pub name: String,
    /// Monthly salary in cents; charged to the shop's costs at registration.
    pub salary_cents: i64,
}

impl Cashier {
    /// Creates a new cashier.
    pub fn new(id: u32, name: impl Into<String>, salary: Money) -> Self {
        Cashier {
            id,
            name: name.into(),
            salary_cents: salary.cents(),
        }
    }

    /// Returns the salary as a Money type.
    #[inline]
    pub fn salary(&self) -> Money {
        Money::from_cents(self.salary_cents)
    }
}

// =============================================================================
// Client
// =============================================================================

/// A client at the till. Holds the money they walked in with and answers
/// exactly one question: can they afford the basket?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub money_cents: i64,
}

impl Client {
    /// Creates a client with the given funds.
    pub fn new(money: Money) -> Self {
        Client {
            money_cents: money.cents(),
        }
    }

    /// Returns the client's funds as a Money type.
    #[inline]
    pub fn money(&self) -> Money {
        Money::from_cents(self.money_cents)
    }

    /// Fails with [`CoreError::InsufficientFunds`] if the client cannot
    /// cover `total`. Pure predicate, no mutation.
    pub fn ensure_affordable(&self, total: Money) -> Result<(), CoreError> {
        if self.money() < total {
            return Err(CoreError::InsufficientFunds {
                available: self.money(),
                required: total,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
