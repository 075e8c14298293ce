//! # In-Memory Discount Service
//!
//! Coupon records keyed by a generated code.
//!
//! ## Lookup Flow
//! ```text
//! find_by_code("3f2a…")
//!      │
//!      ├── unknown code ─────────────────────► CouponNotFound
//!      │
//!      ├── enforcing windows and now ∉ window ► CouponExpired
//!      │
//!      └── Coupon
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use bookstore_core::{CoreError, CoreResult, Coupon, DiscountService};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::CouponSettings;
use crate::error::{StoreError, StoreResult};

/// Discount service held in process memory.
///
/// Coupons are immutable once created, so each record is an `Arc<Coupon>`:
/// lookups clone the handle and release the index immediately.
#[derive(Debug)]
pub struct InMemoryDiscountService {
    coupons: RwLock<HashMap<String, Arc<Coupon>>>,
    enforce_validity_window: bool,
}

impl InMemoryDiscountService {
    /// Creates an empty service that rejects coupons outside their window.
    pub fn new() -> Self {
        InMemoryDiscountService {
            coupons: RwLock::new(HashMap::new()),
            enforce_validity_window: true,
        }
    }

    /// Creates an empty service configured from `settings`.
    pub fn from_settings(settings: &CouponSettings) -> Self {
        Self::new().with_window_enforcement(settings.enforce_validity_window)
    }

    /// Turns validity-window enforcement on or off.
    pub fn with_window_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_validity_window = enforce;
        self
    }

    /// Resolves `code` as if the current time were `now`.
    pub fn find_by_code_at(&self, code: &str, now: DateTime<Utc>) -> CoreResult<Coupon> {
        let coupon = self
            .coupons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
            .cloned()
            .ok_or_else(|| CoreError::CouponNotFound(code.to_string()))?;

        if self.enforce_validity_window && !coupon.is_active_at(now) {
            debug!(
                code,
                starts_at = %coupon.validity().starts_at(),
                ends_at = %coupon.validity().ends_at(),
                "Coupon outside validity window"
            );
            return Err(CoreError::CouponExpired(code.to_string()));
        }

        Ok(Coupon::clone(&coupon))
    }

    /// Withdraws a coupon so its code can no longer be redeemed.
    pub fn revoke(&self, code: &str) -> StoreResult<Coupon> {
        let removed = self
            .coupons
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(code)
            .ok_or_else(|| StoreError::not_found("Coupon", code))?;

        info!(code, "Coupon revoked");
        Ok(Coupon::clone(&removed))
    }

    /// Number of stored coupons.
    pub fn len(&self) -> usize {
        self.coupons.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Checks if no coupon is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryDiscountService {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountService for InMemoryDiscountService {
    fn create(&self, coupon: Coupon) -> String {
        let code = Uuid::new_v4().to_string();
        info!(code = %code, ?coupon, "Coupon created");

        self.coupons
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code.clone(), Arc::new(coupon));
        code
    }

    fn find_by_code(&self, code: &str) -> CoreResult<Coupon> {
        self.find_by_code_at(code, Utc::now())
    }
}
