//! # Validation Module
//!
//! Input validation for cart requests, book records and coupons.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE                                                  │
//! │  ├── Shape checks (empty title, non-positive quantity, pct > 100)     │
//! │  └── Runs before any collaborator is consulted                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart rules (cart.rs)                                         │
//! │  ├── Book exists, enough copies in stock                               │
//! │  └── Coupon keeps the payable amount above the floor                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{validate_quantity, validate_title};
//!
//! assert!(validate_title("Clean Code").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a coupon code before it is looked up.
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "coupon code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## User Workflow
/// ```text
/// add("Clean Code", 0)
///       │
///       ▼
/// validate_quantity(0) ← THIS FUNCTION
///       │
///       └── qty <= 0? → Error: "quantity must be positive"
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free books).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock(copies: i64) -> ValidationResult<()> {
    if copies < 0 {
        return Err(ValidationError::OutOfRange {
            field: "copies".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a percentage (0 to 100 inclusive).
pub fn validate_percentage(field: &str, pct: u8) -> ValidationResult<()> {
    if pct > 100 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a flat cash discount. Zero is allowed.
pub fn validate_cash_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "cash amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Time Validators
// =============================================================================

/// Validates that a window does not end before it starts.
pub fn validate_window(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> ValidationResult<()> {
    if ends_at < starts_at {
        return Err(ValidationError::InvalidWindow);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Head First Java").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_money_values() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_units(-1)).is_err());
        assert!(validate_cash_amount(Money::from_units(20)).is_ok());
        assert!(validate_cash_amount(Money::from_units(-20)).is_err());
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("percentage", 0).is_ok());
        assert!(validate_percentage("percentage", 100).is_ok());
        assert_eq!(
            validate_percentage("percentage", 101),
            Err(ValidationError::OutOfRange {
                field: "percentage".to_string(),
                min: 0,
                max: 100,
            })
        );
    }

    #[test]
    fn test_validate_window() {
        let now = Utc::now();
        assert!(validate_window(now, now).is_ok());
        assert!(validate_window(now, now + Duration::days(1)).is_ok());
        assert!(validate_window(now, now - Duration::seconds(1)).is_err());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("abc").is_ok());
        assert!(validate_coupon_code(" ").is_err());
    }
}
