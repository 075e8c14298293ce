//! # Store Configuration
//!
//! Settings for the checkout policy and the discount service.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BOOKSTORE_MIN_PAYABLE_PERCENT=60                                   │
//! │     BOOKSTORE_COUPON_VALIDITY_DAYS=1                                   │
//! │     BOOKSTORE_ENFORCE_COUPON_WINDOW=true                               │
//! │                                                                         │
//! │  2. TOML Config File (--config PATH or BOOKSTORE_CONFIG)               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [checkout]
//! min_payable_percent = 60
//!
//! [coupons]
//! validity_days = 1
//! enforce_validity_window = true
//! ```

use std::path::PathBuf;

use bookstore_core::{CheckoutPolicy, DEFAULT_MIN_PAYABLE_PERCENT, MAX_VALIDITY_DAYS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "BOOKSTORE_CONFIG";

// =============================================================================
// Checkout Settings
// =============================================================================

/// Checkout rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Percentage of the subtotal that must remain payable after a coupon.
    #[serde(default = "default_min_payable_percent")]
    pub min_payable_percent: u8,
}

fn default_min_payable_percent() -> u8 {
    DEFAULT_MIN_PAYABLE_PERCENT
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            min_payable_percent: default_min_payable_percent(),
        }
    }
}

// =============================================================================
// Coupon Settings
// =============================================================================

/// Discount service behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponSettings {
    /// Validity of coupons issued by the demo binary, in days.
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,

    /// Reject coupons looked up outside their validity window.
    #[serde(default = "default_enforce_window")]
    pub enforce_validity_window: bool,
}

fn default_validity_days() -> u32 {
    1
}

fn default_enforce_window() -> bool {
    true
}

impl Default for CouponSettings {
    fn default() -> Self {
        CouponSettings {
            validity_days: default_validity_days(),
            enforce_validity_window: default_enforce_window(),
        }
    }
}

// =============================================================================
// Store Config
// =============================================================================

/// Complete store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub checkout: CheckoutSettings,

    #[serde(default)]
    pub coupons: CouponSettings,
}

impl StoreConfig {
    /// Loads configuration: file (if any), then environment, then validation.
    ///
    /// A missing file is not an error; the defaults are used instead.
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        let path = config_path.or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));
        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.checkout.min_payable_percent > 100 {
            return Err(StoreError::InvalidConfig(format!(
                "min_payable_percent must be at most 100, got {}",
                self.checkout.min_payable_percent
            )));
        }

        if self.coupons.validity_days == 0 {
            return Err(StoreError::InvalidConfig(
                "validity_days must be greater than 0".into(),
            ));
        }

        if self.coupons.validity_days > MAX_VALIDITY_DAYS {
            return Err(StoreError::InvalidConfig(format!(
                "validity_days must be at most {MAX_VALIDITY_DAYS}, got {}",
                self.coupons.validity_days
            )));
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the process environment in [`load`](Self::load)).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(pct) = lookup("BOOKSTORE_MIN_PAYABLE_PERCENT") {
            match pct.parse::<u8>() {
                Ok(p) => {
                    debug!(min_payable_percent = p, "Overriding floor from environment");
                    self.checkout.min_payable_percent = p;
                }
                Err(_) => warn!(value = %pct, "Ignoring invalid BOOKSTORE_MIN_PAYABLE_PERCENT"),
            }
        }

        if let Some(days) = lookup("BOOKSTORE_COUPON_VALIDITY_DAYS") {
            match days.parse::<u32>() {
                Ok(d) => self.coupons.validity_days = d,
                Err(_) => warn!(value = %days, "Ignoring invalid BOOKSTORE_COUPON_VALIDITY_DAYS"),
            }
        }

        if let Some(enforce) = lookup("BOOKSTORE_ENFORCE_COUPON_WINDOW") {
            match enforce.to_lowercase().as_str() {
                "true" | "1" | "yes" => self.coupons.enforce_validity_window = true,
                "false" | "0" | "no" => self.coupons.enforce_validity_window = false,
                _ => warn!(value = %enforce, "Ignoring invalid BOOKSTORE_ENFORCE_COUPON_WINDOW"),
            }
        }
    }

    /// The checkout policy described by this config.
    pub fn checkout_policy(&self) -> StoreResult<CheckoutPolicy> {
        Ok(CheckoutPolicy::new(self.checkout.min_payable_percent)?)
    }
}
