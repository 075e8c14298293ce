//! # Repository Module
//!
//! In-memory implementations of the collaborator traits from bookstore-core.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ShoppingCart (bookstore-core)                                         │
//! │       │                                                                 │
//! │       │  inventory.find_by_title("Clean Code")                         │
//! │       │  discounts.find_by_code(code)                                  │
//! │       ▼                                                                 │
//! │  Inventory / DiscountService traits                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryInventory / InMemoryDiscountService (THIS MODULE)             │
//! │                                                                         │
//! │  A database-backed store only has to implement the same two traits.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`InMemoryInventory`](inventory::InMemoryInventory) - Book records by title
//! - [`InMemoryDiscountService`](coupon::InMemoryDiscountService) - Coupons by code

pub mod coupon;
pub mod inventory;
