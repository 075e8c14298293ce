//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError        - Cart / checkout rule violations                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstore-store errors (separate crate)                               │
//! │  └── StoreError       - Store and configuration failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages shown to the customer are part of the contract and are
//!    asserted verbatim in tests
//! 3. Errors are enum variants, never String
//! 4. Every error is raised before any state is touched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and checkout errors.
///
/// Every variant is a non-retryable rule violation. The customer-facing
/// messages of the first four variants are fixed wording.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The requested title is not in the inventory.
    #[error("Sorry, '{0}' not in stock!!")]
    BookNotFound(String),

    /// The cumulative quantity for a title exceeds the copies in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart already holds 1 × "Clean Code", stock = 2
    ///      │
    ///      ▼
    /// add("Clean Code", 2) → requested 3 > available 2
    ///      │
    ///      ▼
    /// InsufficientStock { title: "Clean Code", available: 2, requested: 3 }
    /// ```
    #[error("There are not enough copies of '{title}' in the inventory.")]
    InsufficientStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// Checkout was attempted with no line items.
    #[error("You can't checkout an empty cart!!")]
    EmptyCart,

    /// Applying the coupon would push the payable amount below the floor.
    #[error("This coupon is not applicable for this checkout amount.")]
    CouponNotApplicable,

    /// The discount service has no coupon under this code.
    #[error("Sorry, coupon '{0}' does not exist!!")]
    CouponNotFound(String),

    /// The coupon exists but its validity window does not cover "now".
    #[error("Coupon '{0}' is not valid at this time.")]
    CouponExpired(String),

    /// The cart's prices and quantities do not fit in a [`Money`](crate::Money) amount.
    #[error("The checkout amount is too large to compute.")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any business rule runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A validity window ends before it starts.
    #[error("validity window ends before it starts")]
    InvalidWindow,

    /// A validity window would end past the latest representable date.
    #[error("validity window ends outside the supported date range")]
    WindowOutOfRange,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
