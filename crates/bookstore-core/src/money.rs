//! # Money Module
//!
//! Provides the `Money` type for handling prices and checkout amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The checkout floor rule says "at least 60% of the subtotal".          │
//! │  With floats:  0.6 * 45 = 27.000000000000004  ❌                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer units, widened comparisons                       │
//! │    100 * candidate >= 60 * subtotal   (computed in i128)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_units(40);
//! let line_total = price.checked_multiply_quantity(3);
//! assert_eq!(line_total, Some(Money::from_units(120)));
//!
//! // 20% of 260, floor division
//! assert_eq!(Money::from_units(260).percent(20).units(), 52);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the store's single currency, as whole units.
///
/// ## Design Decisions
/// - **i64 (signed)**: a cash coupon larger than the subtotal produces a
///   negative candidate amount, which the floor rule then rejects
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer
///
/// ## Where Money is Used
/// ```text
/// Book.price ──► LineItem × quantity ──► subtotal ──► - discount ──► total
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_units(60);
    /// assert_eq!(price.units(), 60);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let unit_price = Money::from_units(30);
    /// assert_eq!(unit_price.checked_multiply_quantity(4), Some(Money::from_units(120)));
    /// assert_eq!(Money::from_units(i64::MAX / 2).checked_multiply_quantity(3), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Returns `pct` percent of this amount, rounded toward negative infinity.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// // 15% of 130 = 19.5 → 19
    /// assert_eq!(Money::from_units(130).percent(15).units(), 19);
    /// ```
    pub fn percent(&self, pct: u8) -> Money {
        // i128 keeps `amount * pct` from overflowing on huge carts
        let scaled = self.0 as i128 * pct as i128;
        Money::from_units(scaled.div_euclid(100) as i64)
    }

    /// Checks whether this amount is at least `pct` percent of `whole`.
    ///
    /// Compares `100 * self >= pct * whole` in i128 so no precision is lost.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let subtotal = Money::from_units(40);
    /// assert!(Money::from_units(24).is_at_least_percent_of(subtotal, 60));
    /// assert!(!Money::from_units(23).is_at_least_percent_of(subtotal, 60));
    /// ```
    pub fn is_at_least_percent_of(&self, whole: Money, pct: u8) -> bool {
        self.0 as i128 * 100 >= whole.0 as i128 * pct as i128
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
