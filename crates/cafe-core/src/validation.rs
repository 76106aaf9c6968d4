//! # Validation Module
//!
//! Input validation for names, prices, tax rates and numbered selections.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session loop (cafe-cli)                                      │
//! │  ├── Reads a raw line                                                  │
//! │  └── Calls THIS MODULE, re-prompts on error                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain operations                                            │
//! │  ├── Order::remove_item bounds check                                   │
//! │  └── MenuItem::create kind / name / price checks                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::validation::{parse_selection, validate_customer_name};
//!
//! assert_eq!(validate_customer_name("  Alex ").unwrap(), "Alex");
//! assert_eq!(parse_selection(" 3 ").unwrap(), 3);
//! assert!(parse_selection("three").is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CUSTOMER_NAME_LEN, MAX_ITEM_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name typed at the name prompt.
///
/// ## Rules
/// - Surrounding whitespace is dropped
/// - Must not be empty after trimming
/// - At most `MAX_CUSTOMER_NAME_LEN` characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_ITEM_NAME_LEN` characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in pence.
///
/// ## Rules
/// - Must be non-negative (free items are fine)
///
/// ## Example
/// ```rust
/// use cafe_core::validation::validate_price_pence;
///
/// assert!(validate_price_pence(390).is_ok());
/// assert!(validate_price_pence(0).is_ok());
/// assert!(validate_price_pence(-100).is_err());
/// ```
pub fn validate_price_pence(pence: i64) -> ValidationResult<()> {
    if pence < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Selection Parsing
// =============================================================================

/// Parses a numbered choice typed by the customer.
///
/// Menus and baskets are numbered from 1, with 0 meaning "back". This only
/// checks that the input is a non-negative whole number; the caller checks
/// it against the list it printed.
pub fn parse_selection(input: &str) -> ValidationResult<usize> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "selection".to_string(),
        });
    }

    input
        .parse::<usize>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "selection".to_string(),
            reason: "must be a whole number".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("Sam").unwrap(), "Sam");
        assert_eq!(validate_customer_name("\tJamie  \n").unwrap(), "Jamie");

        assert!(validate_customer_name("").unwrap_err().is_empty_input());
        assert!(validate_customer_name("    ").unwrap_err().is_empty_input());

        let long = "A".repeat(MAX_CUSTOMER_NAME_LEN + 1);
        assert!(matches!(
            validate_customer_name(&long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Chicken Sandwich").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1000).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("0").unwrap(), 0);
        assert_eq!(parse_selection(" 14\n").unwrap(), 14);

        assert!(parse_selection("").unwrap_err().is_empty_input());
        assert!(matches!(
            parse_selection("-1"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_selection("two"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
