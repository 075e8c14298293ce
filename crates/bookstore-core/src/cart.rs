//! # Shopping Cart
//!
//! The checkout engine: accumulates line items against an [`Inventory`] and
//! prices them at checkout, optionally with a coupon from a
//! [`DiscountService`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_copies(title, n)                                                  │
//! │       ├── validate title / quantity                                    │
//! │       ├── inventory.find_by_title ──► None ──► BookNotFound            │
//! │       ├── in_cart + n > copies ─────────────► InsufficientStock        │
//! │       └── line item += n                                               │
//! │                                                                         │
//! │  quote(coupon)                                                         │
//! │       ├── no line items ────────────────────► EmptyCart                │
//! │       ├── subtotal = Σ current price × quantity ──► AmountOverflow     │
//! │       ├── discounts.find_by_code ───────────► CouponNotFound/Expired   │
//! │       ├── candidate = subtotal - discount                              │
//! │       ├── candidate < floor% × subtotal ────► CouponNotApplicable      │
//! │       └── CheckoutQuote { subtotal, discount, total }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//! `Empty → Populated (add, self-loop) → checked out | rejected`. Checkout
//! reads the cart without changing it, so it can be repeated, e.g. without
//! the coupon after a `CouponNotApplicable`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::services::{DiscountService, Inventory};
use crate::types::{CheckoutQuote, LineItem};
use crate::validation::{validate_coupon_code, validate_percentage, validate_quantity, validate_title};
use crate::DEFAULT_MIN_PAYABLE_PERCENT;

// =============================================================================
// Checkout Policy
// =============================================================================

/// Rules applied when a coupon is redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    min_payable_percent: u8,
}

impl CheckoutPolicy {
    /// Creates a policy where the discounted amount must stay at or above
    /// `min_payable_percent` percent of the subtotal.
    pub fn new(min_payable_percent: u8) -> CoreResult<Self> {
        validate_percentage("min_payable_percent", min_payable_percent)?;
        Ok(CheckoutPolicy {
            min_payable_percent,
        })
    }

    /// The floor, as a percentage of the subtotal.
    #[inline]
    pub fn min_payable_percent(&self) -> u8 {
        self.min_payable_percent
    }

    /// Checks whether `candidate` respects the floor for `subtotal`.
    #[inline]
    pub fn allows(&self, candidate: Money, subtotal: Money) -> bool {
        candidate.is_at_least_percent_of(subtotal, self.min_payable_percent)
    }
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        CheckoutPolicy {
            min_payable_percent: DEFAULT_MIN_PAYABLE_PERCENT,
        }
    }
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// A customer's cart.
///
/// ## Invariants
/// - Line items are unique by title (adding a title again increases quantity)
/// - Quantity per line is > 0
/// - Per title, the quantity never exceeded the stock seen at the last add
/// - A failed `add` leaves the cart exactly as it was
#[derive(Debug)]
pub struct ShoppingCart<I, D> {
    inventory: Arc<I>,
    discounts: Arc<D>,
    policy: CheckoutPolicy,
    items: Vec<LineItem>,
}

impl<I, D> ShoppingCart<I, D>
where
    I: Inventory,
    D: DiscountService,
{
    /// Creates an empty cart with the default checkout policy.
    pub fn new(inventory: Arc<I>, discounts: Arc<D>) -> Self {
        Self::with_policy(inventory, discounts, CheckoutPolicy::default())
    }

    /// Creates an empty cart with a custom checkout policy.
    pub fn with_policy(inventory: Arc<I>, discounts: Arc<D>, policy: CheckoutPolicy) -> Self {
        ShoppingCart {
            inventory,
            discounts,
            policy,
            items: Vec::new(),
        }
    }

    /// Adds a single copy of `title`.
    pub fn add(&mut self, title: &str) -> CoreResult<()> {
        self.add_copies(title, 1)
    }

    /// Adds `quantity` copies of `title`.
    ///
    /// # Errors
    /// - `Validation` for a blank title or non-positive quantity
    /// - `BookNotFound` if the inventory has no such title
    /// - `InsufficientStock` if the copies already in the cart plus
    ///   `quantity` exceed the stock
    pub fn add_copies(&mut self, title: &str, quantity: i64) -> CoreResult<()> {
        validate_title(title)?;
        validate_quantity(quantity)?;

        let book = self
            .inventory
            .find_by_title(title)
            .ok_or_else(|| CoreError::BookNotFound(title.to_string()))?;

        let in_cart = self.quantity_of(title);
        let Some(requested) = in_cart
            .checked_add(quantity)
            .filter(|requested| book.can_supply(*requested))
        else {
            let requested = in_cart.saturating_add(quantity);
            debug!(title, requested, available = book.copies(), "Not enough copies");
            return Err(CoreError::InsufficientStock {
                title: title.to_string(),
                available: book.copies(),
                requested,
            });
        };

        match self.items.iter_mut().find(|i| i.title == title) {
            Some(item) => item.quantity = requested,
            None => self.items.push(LineItem {
                title: title.to_string(),
                quantity,
            }),
        }

        debug!(title, quantity, in_cart = requested, "Added to cart");
        Ok(())
    }

    /// Checks out without a coupon and returns the amount payable.
    pub fn checkout(&self) -> CoreResult<Money> {
        self.quote(None).map(|quote| quote.total)
    }

    /// Checks out with the coupon behind `code` and returns the amount
    /// payable.
    pub fn checkout_with_coupon(&self, code: &str) -> CoreResult<Money> {
        self.quote(Some(code)).map(|quote| quote.total)
    }

    /// Prices the cart, optionally applying a coupon.
    ///
    /// # Errors
    /// - `EmptyCart` when nothing was added
    /// - `BookNotFound` if a title left the inventory since it was added
    /// - `AmountOverflow` if the subtotal does not fit in [`Money`]
    /// - `CouponNotFound` / `CouponExpired` from the discount service
    /// - `CouponNotApplicable` if the discount breaks the floor rule
    pub fn quote(&self, coupon_code: Option<&str>) -> CoreResult<CheckoutQuote> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let subtotal = self.subtotal()?;

        let Some(code) = coupon_code else {
            debug!(%subtotal, "Checked out without coupon");
            return Ok(CheckoutQuote {
                subtotal,
                discount: Money::zero(),
                total: subtotal,
                coupon_code: None,
            });
        };

        validate_coupon_code(code)?;
        let coupon = self.discounts.find_by_code(code)?;
        let discount = coupon.compute_discount(subtotal);
        let candidate = subtotal - discount;

        if !self.policy.allows(candidate, subtotal) {
            warn!(
                code,
                %subtotal,
                %discount,
                min_payable_percent = self.policy.min_payable_percent(),
                "Coupon rejected by floor rule"
            );
            return Err(CoreError::CouponNotApplicable);
        }

        debug!(code, %subtotal, %discount, total = %candidate, "Checked out with coupon");
        Ok(CheckoutQuote {
            subtotal,
            discount,
            total: candidate,
            coupon_code: Some(code.to_string()),
        })
    }

    /// Sum of current unit price × quantity over all line items.
    fn subtotal(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |subtotal, item| {
            let book = self
                .inventory
                .find_by_title(&item.title)
                .ok_or_else(|| CoreError::BookNotFound(item.title.clone()))?;
            let line_total = item.total_at(book.price())?;
            subtotal.checked_add(line_total).ok_or_else(|| {
                warn!(title = %item.title, %subtotal, %line_total, "Subtotal overflow");
                CoreError::AmountOverflow
            })
        })
    }

    /// Line items in the order titles were first added.
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Copies of `title` currently in the cart.
    pub fn quantity_of(&self, title: &str) -> i64 {
        self.items
            .iter()
            .find(|i| i.title == title)
            .map_or(0, |i| i.quantity)
    }

    /// Number of distinct titles.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total copies across all titles.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |total, i| total.saturating_add(i.quantity))
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The policy applied at checkout.
    pub fn policy(&self) -> CheckoutPolicy {
        self.policy
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
