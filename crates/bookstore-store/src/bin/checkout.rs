//! # Checkout Demo
//!
//! Seeds the demo catalog, fills a cart and prints the checkout quote as JSON.
//!
//! ## Usage
//! ```bash
//! # One copy of a book
//! cargo run -p bookstore-store --bin checkout -- --add "Effective Java"
//!
//! # Several titles with quantities and a 20% coupon
//! cargo run -p bookstore-store --bin checkout -- \
//!     --add "Effective Java:2" --add "Clean Code:3" --percent-coupon 20
//!
//! # Flat cash coupon, custom config
//! cargo run -p bookstore-store --bin checkout -- \
//!     --add "Effective Java" --cash-coupon 30 --config ./bookstore.toml
//! ```
//!
//! ## Seeded Catalog
//! | Title           | Price | Copies |
//! |-----------------|-------|--------|
//! | Effective Java  | 40    | 10     |
//! | Clean Code      | 60    | 10     |
//! | Head First Java | 30    | 10     |

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use bookstore_core::{Book, Coupon, DiscountService, Money, ShoppingCart, ValidityWindow};
use bookstore_store::{InMemoryDiscountService, InMemoryInventory, StoreConfig, StoreResult};
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Demo catalog: (title, price, copies)
const CATALOG: &[(&str, i64, i64)] = &[
    ("Effective Java", 40, 10),
    ("Clean Code", 60, 10),
    ("Head First Java", 30, 10),
];

/// Coupon requested on the command line.
#[derive(Debug, Clone, Copy)]
enum CouponRequest {
    Percentage(u8),
    Cash(i64),
}

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    items: Vec<(String, i64)>,
    coupon: Option<CouponRequest>,
    config_path: Option<PathBuf>,
    help: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_help();
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Checkout failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> StoreResult<()> {
    let config = StoreConfig::load(args.config_path)?;
    info!(
        min_payable_percent = config.checkout.min_payable_percent,
        enforce_validity_window = config.coupons.enforce_validity_window,
        "Configuration loaded"
    );

    let inventory = Arc::new(seed_inventory()?);
    let discounts = Arc::new(InMemoryDiscountService::from_settings(&config.coupons));
    info!(titles = inventory.len(), "Inventory seeded");

    let code = args
        .coupon
        .map(|request| -> StoreResult<String> {
            let window = ValidityWindow::days_from(Utc::now(), config.coupons.validity_days)?;
            let coupon = match request {
                CouponRequest::Percentage(pct) => Coupon::percentage(pct, window)?,
                CouponRequest::Cash(amount) => Coupon::cash(Money::from_units(amount), window)?,
            };
            Ok(discounts.create(coupon))
        })
        .transpose()?;

    let mut cart = ShoppingCart::with_policy(inventory, discounts, config.checkout_policy()?);
    for (title, quantity) in &args.items {
        cart.add_copies(title, *quantity)?;
    }

    let quote = cart.quote(code.as_deref())?;
    info!(total = %quote.total, "Checkout complete");

    let json = serde_json::to_string_pretty(&quote)?;
    println!("{json}");
    Ok(())
}

/// Builds the demo catalog.
fn seed_inventory() -> StoreResult<InMemoryInventory> {
    let books = CATALOG
        .iter()
        .map(|(title, price, copies)| Book::new(*title, Money::from_units(*price), *copies))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InMemoryInventory::with_books(books))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--add" | "-a" => {
                let value = args.next().ok_or("--add needs a value")?;
                parsed.items.push(parse_item(&value)?);
            }
            "--percent-coupon" | "-p" => {
                let value = args.next().ok_or("--percent-coupon needs a value")?;
                let pct = value
                    .parse()
                    .map_err(|_| format!("Invalid percentage: {value}"))?;
                parsed.coupon = Some(CouponRequest::Percentage(pct));
            }
            "--cash-coupon" | "-k" => {
                let value = args.next().ok_or("--cash-coupon needs a value")?;
                let amount = value
                    .parse()
                    .map_err(|_| format!("Invalid cash amount: {value}"))?;
                parsed.coupon = Some(CouponRequest::Cash(amount));
            }
            "--config" | "-c" => {
                let value = args.next().ok_or("--config needs a value")?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok(parsed)
}

/// Parses `Title` or `Title:quantity`.
fn parse_item(value: &str) -> Result<(String, i64), String> {
    match value.rsplit_once(':') {
        Some((title, qty)) => {
            let qty = qty
                .trim()
                .parse()
                .map_err(|_| format!("Invalid quantity in '{value}'"))?;
            Ok((title.trim().to_string(), qty))
        }
        None => Ok((value.trim().to_string(), 1)),
    }
}

fn print_help() {
    println!("Bookstore Checkout Demo");
    println!();
    println!("Usage: checkout [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -a, --add <TITLE[:QTY]>      Add copies of a book (repeatable)");
    println!("  -p, --percent-coupon <PCT>   Apply a flat percentage coupon");
    println!("  -k, --cash-coupon <AMOUNT>   Apply a flat cash coupon");
    println!("  -c, --config <PATH>          TOML config file");
    println!("  -h, --help                   Show this help message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_items_and_coupon() {
        let parsed = parse_args(args(&[
            "--add",
            "Effective Java:2",
            "-a",
            "Clean Code",
            "--percent-coupon",
            "20",
        ]))
        .unwrap();

        assert_eq!(
            parsed.items,
            vec![
                ("Effective Java".to_string(), 2),
                ("Clean Code".to_string(), 1)
            ]
        );
        assert!(matches!(parsed.coupon, Some(CouponRequest::Percentage(20))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--add"])).is_err());
        assert!(parse_args(args(&["--add", "Clean Code:lots"])).is_err());
        assert!(parse_args(args(&["--cash-coupon", "x"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_seed_inventory() {
        let inventory = seed_inventory().unwrap();
        assert_eq!(inventory.len(), 3);
    }
}
