//! # Store Error Types
//!
//! Error types for store operations and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (bookstore-core)     io / toml errors                       │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  Host application shows the message                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookstore_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    ///
    /// ## When This Occurs
    /// - Removing copies of a title the inventory never had
    /// - Revoking an unknown coupon code
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Configuration is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`StoreConfig`](crate::StoreConfig).
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A checkout quote could not be rendered as JSON.
    #[error("Failed to render quote: {0}")]
    Json(#[from] serde_json::Error),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Book", "TDD in Action");
        assert_eq!(err.to_string(), "Book not found: TDD in Action");
    }

    #[test]
    fn test_json_errors_convert() {
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: StoreError = source.into();
        assert!(matches!(err, StoreError::Json(_)));
        assert!(err.to_string().starts_with("Failed to render quote: "));
    }

    #[test]
    fn test_core_errors_pass_through_unchanged() {
        let err: StoreError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "You can't checkout an empty cart!!");
    }
}
