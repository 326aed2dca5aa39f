//! # Pricing Module
//!
//! Shop pricing rules: category markup plus near-expiry discount.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   How a Selling Price is Computed                       │
//! │                                                                         │
//! │  buying price (2.00, Food)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  expired? (as_of > expires_on) ──────────► Err(ExpiredGoods)           │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  base = buying × (1 + markup(category))          2.00 → 2.40           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  days_left < expiry_window(category)?                                  │
//! │       │ yes                                    │ no                     │
//! │       ▼                                        ▼                        │
//! │  base × (1 − discount(category))          price = base                 │
//! │  2.40 → 2.16                              2.40                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure computation: no side effects, no clock access - the caller supplies
//! `as_of`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Goods, GoodsCategory, Percentage};

// =============================================================================
// Pricing Policy
// =============================================================================

/// Per-shop pricing parameters, split by goods category.
///
/// All percentages are basis points; windows are whole days before expiry
/// within which the discount kicks in.
///
/// ## Example
/// ```rust
/// use bodega_core::pricing::PricingPolicy;
///
/// // 20%/40% markup, 10%/5% near-expiry discount, 7/10 day windows
/// let policy = PricingPolicy {
///     markup_food_bps: 2000,
///     markup_non_food_bps: 4000,
///     discount_food_bps: 1000,
///     discount_non_food_bps: 500,
///     expiry_window_days_food: 7,
///     expiry_window_days_non_food: 10,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Markup over buying price for food, in bps.
    pub markup_food_bps: u32,
    /// Markup over buying price for non-food, in bps.
    pub markup_non_food_bps: u32,
    /// Near-expiry discount for food, in bps.
    pub discount_food_bps: u32,
    /// Near-expiry discount for non-food, in bps.
    pub discount_non_food_bps: u32,
    /// Days before expiry within which the food discount applies.
    pub expiry_window_days_food: i64,
    /// Days before expiry within which the non-food discount applies.
    pub expiry_window_days_non_food: i64,
}

impl PricingPolicy {
    /// Markup percentage for the given category.
    #[inline]
    pub fn markup_for(&self, category: GoodsCategory) -> Percentage {
        match category {
            GoodsCategory::Food => Percentage::from_bps(self.markup_food_bps),
            GoodsCategory::NonFood => Percentage::from_bps(self.markup_non_food_bps),
        }
    }

    /// Near-expiry discount percentage for the given category.
    #[inline]
    pub fn discount_for(&self, category: GoodsCategory) -> Percentage {
        match category {
            GoodsCategory::Food => Percentage::from_bps(self.discount_food_bps),
            GoodsCategory::NonFood => Percentage::from_bps(self.discount_non_food_bps),
        }
    }

    /// Discount window in days for the given category.
    #[inline]
    pub fn expiry_window_for(&self, category: GoodsCategory) -> i64 {
        match category {
            GoodsCategory::Food => self.expiry_window_days_food,
            GoodsCategory::NonFood => self.expiry_window_days_non_food,
        }
    }
}

// =============================================================================
// Selling Price
// =============================================================================

impl Goods {
    /// Computes the selling price of these goods under `policy` as of the
    /// given date.
    ///
    /// ## Rules
    /// - Fails with [`CoreError::ExpiredGoods`] once `as_of` is past the
    ///   expiry date.
    /// - `base = buying_price × (1 + markup(category))`
    /// - When fewer than `expiry_window(category)` whole days remain,
    ///   the category discount is applied to the base.
    ///
    /// No side effects; the same inputs always give the same price.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    /// use bodega_core::pricing::PricingPolicy;
    /// use bodega_core::types::{Goods, GoodsCategory};
    /// use chrono::NaiveDate;
    ///
    /// let policy = PricingPolicy {
    ///     markup_food_bps: 2000,
    ///     markup_non_food_bps: 4000,
    ///     discount_food_bps: 1000,
    ///     discount_non_food_bps: 500,
    ///     expiry_window_days_food: 7,
    ///     expiry_window_days_non_food: 10,
    /// };
    /// let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
    /// let goods = Goods::new(
    ///     101,
    ///     "Strawberry",
    ///     Money::from_cents(200),
    ///     GoodsCategory::Food,
    ///     today + chrono::Duration::days(4),
    ///     300,
    /// );
    ///
    /// // 4 days left < 7-day window: 2.00 × 1.20 × 0.90 = 2.16
    /// let price = goods.selling_price(&policy, today).unwrap();
    /// assert_eq!(price.cents(), 216);
    /// ```
    pub fn selling_price(&self, policy: &PricingPolicy, as_of: chrono::NaiveDate) -> CoreResult<Money> {
        if as_of > self.expires_on {
            return Err(CoreError::ExpiredGoods {
                name: self.name.clone(),
                expired_on: self.expires_on,
            });
        }

        let base = self.buying_price().apply_markup(policy.markup_for(self.category));

        let days_left = (self.expires_on - as_of).num_days();
        if days_left < policy.expiry_window_for(self.category) {
            return Ok(base.apply_discount(policy.discount_for(self.category)));
        }

        Ok(base)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
