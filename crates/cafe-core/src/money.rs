//! # Money Module
//!
//! Provides the `Money` type for handling prices and bill totals.
//!
//! ## Why Integer Pence?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    3.90 + 1.80 = 5.699999999999999  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    390 + 180 = 570 pence = £5.70                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::money::Money;
//!
//! let salad = Money::from_pence(390); // £3.90
//! let tea = Money::from_pence(180);   // £1.80
//!
//! assert_eq!((salad + tea).to_string(), "£5.70");
//! ```
//!
//! Prices and basket totals stay in whole pence. Tax can land on a fraction
//! of a penny, so bill amounts are exact [`Decimal`] pounds and only get
//! rounded by [`format_pounds`] when printed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Pence are two decimal places of a pound.
const PENCE_PLACES: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the price validation range, which rejects
///   negatives at the edge rather than in the type
/// - **Single field tuple struct**: zero-cost wrapper over i64
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► Order.calculate_total() ──► Bill.subtotal
///                                                    │
///                                       to_decimal() × tax rate
///                                                    │
///                                                    ▼
///                                  Bill.calculate_final_amount() (exact)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let price = Money::from_pence(275); // £2.75
    /// assert_eq!(price.pence(), 275);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// The exact value in pounds, for arithmetic that must not round.
    ///
    /// ```rust
    /// use cafe_core::money::Money;
    /// use cafe_core::Decimal;
    ///
    /// assert_eq!(Money::from_pence(275).to_decimal(), Decimal::new(275, 2));
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, PENCE_PLACES)
    }
}

/// Formats an exact pound amount for the receipt, rounding half away from
/// zero to the penny.
///
/// ```rust
/// use cafe_core::money::format_pounds;
/// use cafe_core::Decimal;
///
/// assert_eq!(format_pounds(Decimal::new(3025, 3)), "£3.03");
/// assert_eq!(format_pounds(Decimal::new(24, 1)), "£2.40");
/// ```
pub fn format_pounds(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(PENCE_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}£{:.2}", sign, rounded.abs())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the receipt does: `£3.90`, `-£1.20`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Lets basket totals be written as `items.iter().map(..).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pence(390).to_string(), "£3.90");
        assert_eq!(Money::from_pence(500).to_string(), "£5.00");
        assert_eq!(Money::from_pence(-120).to_string(), "-£1.20");
        assert_eq!(Money::zero().to_string(), "£0.00");
        assert_eq!(Money::from_pence(7).to_string(), "£0.07");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_pence(1000) + Money::from_pence(250);
        total += Money::from_pence(50);
        assert_eq!(total.pence(), 1300);
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        let prices = [Money::from_pence(390), Money::from_pence(180)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_pence(570));

        let dimes: Money = std::iter::repeat(Money::from_pence(10)).take(10).sum();
        assert_eq!(dimes, Money::from_pence(100));
    }

    #[test]
    fn test_to_decimal_is_exact() {
        assert_eq!(Money::from_pence(390).to_decimal(), Decimal::new(39, 1));
        assert_eq!(Money::from_pence(-5).to_decimal(), Decimal::new(-5, 2));
        assert_eq!(Money::zero().to_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_format_pounds_rounds_half_away_from_zero() {
        assert_eq!(format_pounds(Decimal::new(3025, 3)), "£3.03");
        assert_eq!(format_pounds(Decimal::new(3024, 3)), "£3.02");
        assert_eq!(format_pounds(Decimal::new(41250, 4)), "£4.13");
        assert_eq!(format_pounds(Decimal::new(-1205, 3)), "-£1.21");
    }

    #[test]
    fn test_format_pounds_pads_to_pence() {
        assert_eq!(format_pounds(Decimal::new(22, 1)), "£2.20");
        assert_eq!(format_pounds(Decimal::from(5)), "£5.00");
        assert_eq!(format_pounds(Decimal::ZERO), "£0.00");
        assert_eq!(format_pounds(Decimal::new(-1, 3)), "£0.00");
    }
}
