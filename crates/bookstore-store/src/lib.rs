//! # bookstore-store: In-Memory Collaborators
//!
//! Concrete stores for the bookstore checkout engine, plus configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Data Flow                              │
//! │                                                                         │
//! │  ShoppingCart::add_copies / quote                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bookstore-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────┐  ┌───────────────────┐  ┌───────────┐  │   │
//! │  │   │ InMemoryInventory │  │ InMemoryDiscount  │  │StoreConfig│  │   │
//! │  │   │  title → Book     │  │  Service          │  │ TOML + env│  │   │
//! │  │   │                   │  │  code → Coupon    │  │           │  │   │
//! │  │   └───────────────────┘  └───────────────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - Inventory and discount service implementations
//! - [`config`] - Store configuration
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bookstore_core::{Book, Inventory, Money, ShoppingCart};
//! use bookstore_store::{InMemoryDiscountService, InMemoryInventory};
//!
//! let inventory = Arc::new(InMemoryInventory::new());
//! inventory.add(Book::new("Effective Java", Money::from_units(40), 10).unwrap());
//!
//! let mut cart = ShoppingCart::new(inventory, Arc::new(InMemoryDiscountService::new()));
//! cart.add_copies("Effective Java", 3).unwrap();
//! assert_eq!(cart.checkout().unwrap().units(), 120);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};

// Repository re-exports for convenience
pub use repository::coupon::InMemoryDiscountService;
pub use repository::inventory::InMemoryInventory;
