//! End-to-end checkout scenarios against the in-memory stores.
//!
//! Stock for every test:
//! Effective Java = 40 × 10, Clean Code = 60 × 10, Head First Java = 30 × 10.

use std::sync::Arc;

use bookstore_core::{
    Book, CoreError, Coupon, DiscountService, Inventory, Money, ShoppingCart, ValidityWindow,
};
use bookstore_store::{InMemoryDiscountService, InMemoryInventory};
use chrono::{Duration, Utc};

struct Bookstore {
    inventory: Arc<InMemoryInventory>,
    discounts: Arc<InMemoryDiscountService>,
    cart: ShoppingCart<InMemoryInventory, InMemoryDiscountService>,
}

fn book(title: &str, price: i64, copies: i64) -> Book {
    Book::new(title, Money::from_units(price), copies).unwrap()
}

fn bookstore() -> Bookstore {
    let inventory = Arc::new(InMemoryInventory::new());
    inventory.add(book("Effective Java", 40, 10));
    inventory.add(book("Clean Code", 60, 10));
    inventory.add(book("Head First Java", 30, 10));

    let discounts = Arc::new(InMemoryDiscountService::new());
    let cart = ShoppingCart::new(Arc::clone(&inventory), Arc::clone(&discounts));

    Bookstore {
        inventory,
        discounts,
        cart,
    }
}

fn next_24_hours() -> ValidityWindow {
    let start = Utc::now();
    ValidityWindow::new(start, start + Duration::hours(24)).unwrap()
}

impl Bookstore {
    fn percentage_coupon(&self, pct: u8) -> String {
        self.discounts
            .create(Coupon::percentage(pct, next_24_hours()).unwrap())
    }

    fn cash_coupon(&self, amount: i64) -> String {
        self.discounts
            .create(Coupon::cash(Money::from_units(amount), next_24_hours()).unwrap())
    }
}

// =============================================================================
// Adding books and checking out at base price
// =============================================================================

#[test]
fn test_one_book_checks_out_at_its_price() {
    let mut store = bookstore();
    store.cart.add("Effective Java").unwrap();

    assert_eq!(store.cart.checkout().unwrap().units(), 40);
}

#[test]
fn test_three_books_check_out_at_the_sum_of_prices() {
    let mut store = bookstore();
    store.cart.add("Effective Java").unwrap();
    store.cart.add("Clean Code").unwrap();
    store.cart.add("Head First Java").unwrap();

    assert_eq!(store.cart.checkout().unwrap().units(), 130);
}

#[test]
fn test_empty_cart_cannot_be_checked_out() {
    let store = bookstore();

    let err = store.cart.checkout().unwrap_err();
    assert_eq!(err.to_string(), "You can't checkout an empty cart!!");
}

// =============================================================================
// Multiple copies
// =============================================================================

#[test]
fn test_three_copies_cost_three_times_the_price() {
    let mut store = bookstore();
    store.cart.add_copies("Effective Java", 3).unwrap();

    assert_eq!(store.cart.checkout().unwrap().units(), 120);
}

#[test]
fn test_mixed_quantities_sum_per_title() {
    let mut store = bookstore();
    store.cart.add_copies("Effective Java", 2).unwrap();
    store.cart.add_copies("Clean Code", 3).unwrap();
    store.cart.add_copies("Head First Java", 4).unwrap();

    assert_eq!(store.cart.checkout().unwrap().units(), 380);
}

#[test]
fn test_adding_a_title_again_accumulates_copies() {
    let mut store = bookstore();
    store.cart.add("Effective Java").unwrap();
    store.cart.add_copies("Effective Java", 2).unwrap();

    assert_eq!(store.cart.checkout().unwrap().units(), 120);
}

// =============================================================================
// Inventory checks
// =============================================================================

#[test]
fn test_unknown_title_is_reported_as_not_in_stock() {
    let mut store = bookstore();

    let err = store.cart.add("TDD in Action").unwrap_err();
    assert_eq!(err.to_string(), "Sorry, 'TDD in Action' not in stock!!");
    assert!(store.cart.is_empty());
}

#[test]
fn test_asking_for_more_copies_than_stocked_fails() {
    let mut store = bookstore();
    store.inventory.add(book("TDD in Action", 40, 2));

    let err = store.cart.add_copies("TDD in Action", 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are not enough copies of 'TDD in Action' in the inventory."
    );
    assert_eq!(store.cart.quantity_of("TDD in Action"), 0);
}

#[test]
fn test_stock_limit_counts_copies_already_in_cart() {
    let mut store = bookstore();
    store.inventory.add(book("TDD in Action", 40, 2));

    store.cart.add_copies("TDD in Action", 2).unwrap();
    assert!(matches!(
        store.cart.add("TDD in Action"),
        Err(CoreError::InsufficientStock { available: 2, requested: 3, .. })
    ));
    assert_eq!(store.cart.checkout().unwrap().units(), 80);
}

// =============================================================================
// Coupons
// =============================================================================

#[test]
fn test_percentage_coupon_reduces_checkout_amount() {
    let mut store = bookstore();
    store.cart.add_copies("Effective Java", 2).unwrap();
    store.cart.add_copies("Clean Code", 3).unwrap();

    let code = store.percentage_coupon(20);

    assert_eq!(store.cart.checkout_with_coupon(&code).unwrap().units(), 208);
}

#[test]
fn test_cash_coupon_reduces_checkout_amount() {
    let mut store = bookstore();
    store.cart.add_copies("Effective Java", 2).unwrap();
    store.cart.add_copies("Clean Code", 3).unwrap();

    let code = store.cash_coupon(20);

    assert_eq!(store.cart.checkout_with_coupon(&code).unwrap().units(), 240);
}

#[test]
fn test_coupon_leaving_less_than_sixty_percent_is_rejected() {
    let mut store = bookstore();
    store.cart.add_copies("Effective Java", 1).unwrap();

    let code = store.cash_coupon(30);

    let err = store.cart.checkout_with_coupon(&code).unwrap_err();
    assert_eq!(
        err.to_string(),
        "This coupon is not applicable for this checkout amount."
    );
    assert_eq!(store.cart.checkout().unwrap().units(), 40);
}

#[test]
fn test_percentage_coupon_floors_the_discount() {
    let mut store = bookstore();
    store.cart.add("Effective Java").unwrap();
    store.cart.add("Clean Code").unwrap();
    store.cart.add("Head First Java").unwrap();

    // 130 × 15% = 19.5 → 19 off
    let code = store.percentage_coupon(15);
    assert_eq!(store.cart.checkout_with_coupon(&code).unwrap().units(), 111);
}

#[test]
fn test_unknown_coupon_code_is_rejected() {
    let mut store = bookstore();
    store.cart.add("Clean Code").unwrap();

    assert!(matches!(
        store.cart.checkout_with_coupon("not-a-code"),
        Err(CoreError::CouponNotFound(_))
    ));
}

#[test]
fn test_expired_coupon_is_rejected() {
    let mut store = bookstore();
    store.cart.add("Clean Code").unwrap();

    let start = Utc::now() - Duration::days(3);
    let window = ValidityWindow::new(start, start + Duration::days(1)).unwrap();
    let code = store
        .discounts
        .create(Coupon::percentage(10, window).unwrap());

    assert_eq!(
        store.cart.checkout_with_coupon(&code),
        Err(CoreError::CouponExpired(code.clone()))
    );
}

#[test]
fn test_one_coupon_serves_several_carts() {
    let store = bookstore();
    let code = store.percentage_coupon(10);

    let mut first = ShoppingCart::new(Arc::clone(&store.inventory), Arc::clone(&store.discounts));
    let mut second = ShoppingCart::new(Arc::clone(&store.inventory), Arc::clone(&store.discounts));
    first.add("Clean Code").unwrap();
    second.add_copies("Head First Java", 2).unwrap();

    assert_eq!(first.checkout_with_coupon(&code).unwrap().units(), 54);
    assert_eq!(second.checkout_with_coupon(&code).unwrap().units(), 54);
}
