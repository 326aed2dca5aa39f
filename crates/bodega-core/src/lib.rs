//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of Bodega, a small retail shop engine. It
//! contains all business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Driver (demo binary, future CLI)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  receipt  │  │   │
//! │  │   │   Goods   │  │   Money   │  │  Policy   │  │  Receipt  │  │   │
//! │  │   │  Cashier  │  │ Percentage│  │  markup/  │  │  SaleLine │  │   │
//! │  │   │  Client   │  │           │  │  discount │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────────────┐  ┌───────────────────────────┐ │   │
//! │  │   │          shop             │  │          ports            │ │   │
//! │  │   │  sale orchestration,      │  │  ShopStore trait,         │ │   │
//! │  │   │  roster, profit ledger    │  │  LedgerRecord             │ │   │
//! │  │   └───────────────────────────┘  └───────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ShopStore trait                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bodega-store (Storage Layer)                 │   │
//! │  │       receipt records, JSON snapshots, per-shop ledger          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Goods, Cashier, Client, Percentage)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Shop pricing policy: markup plus near-expiry discount
//! - [`receipt`] - Receipt assembly and rendering
//! - [`shop`] - The Shop aggregate and the sale transaction
//! - [`ports`] - Storage collaborator contract (`ShopStore`)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic - same input = same output
//! 2. **No I/O**: persistence happens behind the [`ports::ShopStore`] trait
//! 3. **Integer Money**: all monetary values are in cents (i64), percentages
//!    in basis points - no float errors in any price
//! 4. **Explicit Errors**: every sale failure is a typed [`CoreError`]
//!    variant, never a silent `None`
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::money::Money;
//! use bodega_core::types::Percentage;
//!
//! // Create money from cents (never from floats!)
//! let buying = Money::from_cents(200); // 2.00
//!
//! // 20% markup, then 10% near-expiry discount
//! let base = buying.apply_markup(Percentage::from_bps(2000));
//! let discounted = base.apply_discount(Percentage::from_bps(1000));
//!
//! assert_eq!(base.cents(), 240);       // 2.40
//! assert_eq!(discounted.cents(), 216); // 2.16
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod receipt;
pub mod shop;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use ports::{LedgerRecord, ShopStore, StorageError};
pub use pricing::PricingPolicy;
pub use receipt::{Receipt, SaleLine};
pub use shop::Shop;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single goods entry in one sale.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per-shop in future versions.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Maximum length of a goods or cashier name.
pub const MAX_NAME_LEN: usize = 200;
