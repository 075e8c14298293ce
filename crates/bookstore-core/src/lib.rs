//! # bookstore-core: Pure Checkout Logic
//!
//! This crate is the **heart** of the bookstore. It contains the cart,
//! coupon and checkout rules as plain Rust with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Host application (e.g. the `checkout` binary)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  coupon   │  │   │
//! │  │   │   Book    │  │   Money   │  │ Shopping  │  │ Percentage│  │   │
//! │  │   │ LineItem  │  │           │  │   Cart    │  │   Cash    │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       │ services (traits)      │   │
//! │  └───────────────────────────────────────┼─────────────────────────┘   │
//! │                                          │                              │
//! │  ┌───────────────────────────────────────▼─────────────────────────┐   │
//! │  │        bookstore-store: InMemoryInventory, InMemoryDiscountService │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Book, LineItem, CheckoutQuote
//! - [`money`] - Money type with integer arithmetic
//! - [`coupon`] - Percentage and cash coupons with validity windows
//! - [`cart`] - The shopping cart / checkout engine
//! - [`services`] - Inventory and DiscountService traits
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let mut cart = ShoppingCart::new(inventory, discounts);
//! cart.add_copies("Effective Java", 2)?;
//! cart.add_copies("Clean Code", 3)?;
//!
//! let code = discounts.create(Coupon::percentage(20, window)?);
//! assert_eq!(cart.checkout_with_coupon(&code)?.units(), 208);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod error;
pub mod money;
pub mod services;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CheckoutPolicy, ShoppingCart};
pub use coupon::{Coupon, ValidityWindow};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use services::{DiscountService, Inventory};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default floor rule: after a coupon, at least this percentage of the
/// subtotal must remain payable.
pub const DEFAULT_MIN_PAYABLE_PERCENT: u8 = 60;

/// Longest validity, in days, a coupon window built with
/// [`ValidityWindow::days_from`] may be configured for.
pub const MAX_VALIDITY_DAYS: u32 = 36_500;
