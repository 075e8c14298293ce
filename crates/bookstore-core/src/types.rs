//! # Domain Types
//!
//! Core domain types used throughout the bookstore.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │    LineItem     │   │  CheckoutQuote  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  title (key)    │◄──│  title          │   │  subtotal       │       │
//! │  │  price          │   │  quantity       │   │  discount       │       │
//! │  │  copies         │   └─────────────────┘   │  total          │       │
//! │  └─────────────────┘                         │  coupon_code    │       │
//! │   owned by Inventory    owned by Cart        └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Coupons live in [`crate::coupon`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_stock, validate_title};

// =============================================================================
// Book
// =============================================================================

/// A book record as held by the inventory.
///
/// The title is the unique key. Price and copies are never negative; the
/// constructor enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    price: Money,
    copies: i64,
}

impl Book {
    /// Creates a book record.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{Book, Money};
    ///
    /// let book = Book::new("Effective Java", Money::from_units(40), 10).unwrap();
    /// assert_eq!(book.title(), "Effective Java");
    /// assert!(Book::new("", Money::from_units(40), 10).is_err());
    /// ```
    pub fn new(title: impl Into<String>, price: Money, copies: i64) -> CoreResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        validate_price(price)?;
        validate_stock(copies)?;

        Ok(Book {
            title,
            price,
            copies,
        })
    }

    /// The unique title of this book.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Copies available in stock.
    #[inline]
    pub fn copies(&self) -> i64 {
        self.copies
    }

    /// Checks if `quantity` copies can be supplied from stock.
    #[inline]
    pub fn can_supply(&self, quantity: i64) -> bool {
        quantity <= self.copies
    }

    /// Takes `quantity` copies out of stock.
    ///
    /// Leaves the record untouched on error.
    pub fn take_copies(&mut self, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if !self.can_supply(quantity) {
            return Err(CoreError::InsufficientStock {
                title: self.title.clone(),
                available: self.copies,
                requested: quantity,
            });
        }

        self.copies -= quantity;
        Ok(())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line in the cart: a title and how many copies of it were requested.
///
/// The price is not frozen here; checkout reads the inventory's current
/// price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Title of the book (inventory key).
    pub title: String,

    /// Copies requested, always > 0.
    pub quantity: i64,
}

impl LineItem {
    /// Line total at the given unit price.
    ///
    /// # Errors
    /// `AmountOverflow` if price × quantity does not fit in [`Money`].
    #[inline]
    pub fn total_at(&self, unit_price: Money) -> CoreResult<Money> {
        unit_price
            .checked_multiply_quantity(self.quantity)
            .ok_or(CoreError::AmountOverflow)
    }
}

// =============================================================================
// Checkout Quote
// =============================================================================

/// The breakdown of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    /// Sum of unit price × quantity over all line items.
    pub subtotal: Money,

    /// Amount taken off by the coupon (zero without one).
    pub discount: Money,

    /// Amount payable.
    pub total: Money,

    /// Code of the applied coupon, if any.
    pub coupon_code: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn effective_java() -> Book {
        Book::new("Effective Java", Money::from_units(40), 10).unwrap()
    }

    #[test]
    fn test_book_rejects_bad_input() {
        assert!(matches!(
            Book::new("  ", Money::from_units(40), 1),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(Book::new("Clean Code", Money::from_units(-1), 1).is_err());
        assert!(Book::new("Clean Code", Money::from_units(60), -1).is_err());
        assert!(Book::new("Free Book", Money::zero(), 0).is_ok());
    }

    #[test]
    fn test_can_supply() {
        let book = effective_java();
        assert!(book.can_supply(10));
        assert!(!book.can_supply(11));
    }

    #[test]
    fn test_take_copies() {
        let mut book = effective_java();
        book.take_copies(4).unwrap();
        assert_eq!(book.copies(), 6);

        let err = book.take_copies(7).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                title: "Effective Java".to_string(),
                available: 6,
                requested: 7,
            }
        );
        assert_eq!(book.copies(), 6);

        assert!(book.take_copies(0).is_err());
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            title: "Clean Code".to_string(),
            quantity: 3,
        };
        assert_eq!(item.total_at(Money::from_units(60)), Ok(Money::from_units(180)));
        assert_eq!(
            item.total_at(Money::from_units(i64::MAX / 2)),
            Err(CoreError::AmountOverflow)
        );
    }
}
