//! # Collaborator Traits
//!
//! The cart never owns inventory or coupon storage. It talks to them through
//! these two traits, so an in-memory store and a database-backed one are
//! interchangeable.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ShoppingCart ──find_by_title──► dyn Inventory                         │
//! │        │                                                                │
//! │        └───────find_by_code───► dyn DiscountService                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both traits take `&self`: implementations that mutate use interior
//! mutability so one store can be shared by many carts.

use crate::coupon::Coupon;
use crate::error::CoreResult;
use crate::types::Book;

/// Book storage keyed by title.
pub trait Inventory {
    /// Registers a book, replacing any record with the same title.
    fn add(&self, book: Book);

    /// Looks up a book by its exact title.
    fn find_by_title(&self, title: &str) -> Option<Book>;
}

/// Coupon registry keyed by generated code.
pub trait DiscountService {
    /// Stores a coupon and returns its newly generated code.
    fn create(&self, coupon: Coupon) -> String;

    /// Resolves a code to a redeemable coupon.
    ///
    /// # Errors
    /// - [`CoreError::CouponNotFound`](crate::CoreError::CouponNotFound) for
    ///   an unknown code
    /// - [`CoreError::CouponExpired`](crate::CoreError::CouponExpired) when
    ///   the implementation enforces validity windows and the coupon is
    ///   outside its window
    fn find_by_code(&self, code: &str) -> CoreResult<Coupon>;
}
