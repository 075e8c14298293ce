//! # Coupons
//!
//! Discount coupons handed out by the discount service.
//!
//! ## Coupon Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Percentage { percentage: 20 }      discount = floor(amount × 20 / 100) │
//! │  Cash       { amount: 20 }          discount = 20 (never clamped)       │
//! │                                                                         │
//! │  Both carry a ValidityWindow [starts_at, ends_at] (inclusive).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whether the discount is acceptable for a checkout is decided by the cart's
//! floor rule, not by the coupon.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_cash_amount, validate_percentage, validate_window};

// =============================================================================
// Validity Window
// =============================================================================

/// The period during which a coupon may be redeemed (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl ValidityWindow {
    /// Creates a window, rejecting one that ends before it starts.
    pub fn new(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> CoreResult<Self> {
        validate_window(starts_at, ends_at)?;
        Ok(ValidityWindow { starts_at, ends_at })
    }

    /// A window opening at `starts_at` and lasting `days` days.
    ///
    /// # Errors
    /// `WindowOutOfRange` if the end falls past the latest date chrono can
    /// represent.
    pub fn days_from(starts_at: DateTime<Utc>, days: u32) -> CoreResult<Self> {
        let ends_at = starts_at
            .checked_add_signed(Duration::days(i64::from(days)))
            .ok_or(ValidationError::WindowOutOfRange)?;
        Ok(ValidityWindow { starts_at, ends_at })
    }

    /// Start of the window.
    #[inline]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// End of the window.
    #[inline]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Checks if `instant` falls inside the window.
    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.starts_at <= instant && instant <= self.ends_at
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A discount coupon.
///
/// Each variant is plain data; [`Coupon::compute_discount`] is the only
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Coupon {
    /// Takes a flat percentage off the checkout amount.
    Percentage {
        percentage: u8,
        validity: ValidityWindow,
    },

    /// Takes a flat cash amount off the checkout amount.
    Cash {
        amount: Money,
        validity: ValidityWindow,
    },
}

impl Coupon {
    /// Creates a percentage coupon (`percentage` in 0..=100).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{Coupon, Money, ValidityWindow};
    /// use chrono::Utc;
    ///
    /// let window = ValidityWindow::days_from(Utc::now(), 1).unwrap();
    /// let coupon = Coupon::percentage(20, window).unwrap();
    /// assert_eq!(coupon.compute_discount(Money::from_units(260)).units(), 52);
    ///
    /// assert!(Coupon::percentage(120, window).is_err());
    /// ```
    pub fn percentage(percentage: u8, validity: ValidityWindow) -> CoreResult<Self> {
        validate_percentage("percentage", percentage)?;
        Ok(Coupon::Percentage {
            percentage,
            validity,
        })
    }

    /// Creates a flat cash coupon (`amount` >= 0).
    pub fn cash(amount: Money, validity: ValidityWindow) -> CoreResult<Self> {
        validate_cash_amount(amount)?;
        Ok(Coupon::Cash { amount, validity })
    }

    /// The discount this coupon grants on `amount`.
    ///
    /// Cash coupons are not clamped to `amount`: the result may exceed it.
    pub fn compute_discount(&self, amount: Money) -> Money {
        match self {
            Coupon::Percentage { percentage, .. } => amount.percent(*percentage),
            Coupon::Cash { amount: flat, .. } => *flat,
        }
    }

    /// The coupon's validity window.
    pub fn validity(&self) -> &ValidityWindow {
        match self {
            Coupon::Percentage { validity, .. } | Coupon::Cash { validity, .. } => validity,
        }
    }

    /// Checks if the coupon may be redeemed at `instant`.
    #[inline]
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.validity().contains(instant)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn one_day() -> ValidityWindow {
        ValidityWindow::days_from(Utc::now(), 1).unwrap()
    }

    #[test]
    fn test_days_from_past_the_calendar_is_rejected() {
        let now = Utc::now();
        let window = ValidityWindow::days_from(now, 30).unwrap();
        assert_eq!(window.ends_at() - window.starts_at(), Duration::days(30));

        assert_eq!(
            ValidityWindow::days_from(now, u32::MAX),
            Err(CoreError::Validation(ValidationError::WindowOutOfRange))
        );
        assert_eq!(
            ValidityWindow::days_from(DateTime::<Utc>::MAX_UTC, 1),
            Err(CoreError::Validation(ValidationError::WindowOutOfRange))
        );
        assert!(ValidityWindow::days_from(now, crate::MAX_VALIDITY_DAYS).is_ok());
    }

    #[test]
    fn test_percentage_discount_floors() {
        let coupon = Coupon::percentage(15, one_day()).unwrap();
        // 15% of 130 = 19.5
        assert_eq!(coupon.compute_discount(Money::from_units(130)).units(), 19);
    }

    #[test]
    fn test_cash_discount_is_not_clamped() {
        let coupon = Coupon::cash(Money::from_units(30), one_day()).unwrap();
        assert_eq!(coupon.compute_discount(Money::from_units(10)).units(), 30);
    }

    #[test]
    fn test_invalid_coupons_rejected() {
        assert!(matches!(
            Coupon::percentage(101, one_day()),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(Coupon::cash(Money::from_units(-1), one_day()).is_err());
    }

    #[test]
    fn test_validity_window() {
        let start = Utc::now();
        let end = start + Duration::hours(24);
        let window = ValidityWindow::new(start, end).unwrap();

        assert!(window.contains(start));
        assert!(window.contains(end));
        assert!(!window.contains(start - Duration::seconds(1)));
        assert!(!window.contains(end + Duration::seconds(1)));

        assert_eq!(
            ValidityWindow::new(end, start),
            Err(CoreError::Validation(ValidationError::InvalidWindow))
        );
    }

    #[test]
    fn test_is_active_at() {
        let window = one_day();
        let coupon = Coupon::cash(Money::from_units(5), window).unwrap();
        assert!(coupon.is_active_at(window.starts_at()));
        assert!(!coupon.is_active_at(window.ends_at() + Duration::minutes(1)));
    }

    #[test]
    fn test_serde_tagging() {
        let coupon = Coupon::percentage(20, one_day()).unwrap();
        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["kind"], "percentage");
        assert_eq!(json["percentage"], 20);

        let back: Coupon = serde_json::from_value(json).unwrap();
        assert_eq!(back, coupon);
    }
}
