//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Domain errors (bad kind, bad selection)        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cafe-cli errors (app crate)                                           │
//! │  └── CliError         - Startup failures (config, menu file, I/O)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → anyhow in main         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverable vs Fatal
//! - `InvalidSelection` and `Validation(Required)` are caught by the session
//!   loop and turned into a retry prompt.
//! - `InvalidMenuItemKind` only happens while building the catalog and
//!   aborts startup.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog population asked for an item variant that does not exist.
    ///
    /// ## When This Occurs
    /// - A menu file entry has `"kind": "dessert"`
    /// - `create_item` was called with a typo such as `"drnk"`
    #[error("Invalid menu item kind: {0}")]
    InvalidMenuItemKind(String),

    /// A menu or basket position is outside the list.
    ///
    /// ## User Workflow
    /// ```text
    /// Basket has 2 items
    ///      │
    ///      ▼
    /// remove_item(5)
    ///      │
    ///      ▼
    /// InvalidSelection { position: 5, len: 2 }
    ///      │
    ///      ▼
    /// Session prints "Invalid choice. Try again." and re-prompts
    /// ```
    #[error("Invalid selection {position}: only {len} entries available")]
    InvalidSelection { position: usize, len: usize },

    /// Registry lookup with an id it never issued.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input or catalog data doesn't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a selection that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// True for blank input, which the session answers by asking again.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ValidationError::Required { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidSelection {
            position: 5,
            len: 2,
        };
        assert_eq!(err.to_string(), "Invalid selection 5: only 2 entries available");

        let err = CoreError::InvalidMenuItemKind("dessert".to_string());
        assert_eq!(err.to_string(), "Invalid menu item kind: dessert");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
        assert!(err.is_empty_input());

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "name must be at most 50 characters");
        assert!(!err.is_empty_input());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
