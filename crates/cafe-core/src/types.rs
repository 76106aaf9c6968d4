//! # Domain Types
//!
//! Value types shared by the catalog, orders and bills.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────┐                 │
//! │  │          MenuItem           │   │    TaxRate      │                 │
//! │  │  ─────────────────────────  │   │  ─────────────  │                 │
//! │  │  Food  { name, price,       │   │  bps (u32)      │                 │
//! │  │          cuisine }          │   │  1000 = 10%     │                 │
//! │  │  Drink { name, price,       │   └─────────────────┘                 │
//! │  │          size }             │                                        │
//! │  └─────────────────────────────┘   ┌─────────────────┐                 │
//! │                                    │    ItemKind     │                 │
//! │                                    │  Food | Drink   │                 │
//! │                                    └─────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price_pence};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10%.
/// Keeps the rate an integer, like every other number that touches money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as an exact multiplier: 1000 bps is `0.1000`.
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::DEFAULT_TAX_RATE
    }
}

/// One decimal place, as printed on the bill: `10.0%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage())
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// The two things a café sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Food,
    Drink,
}

impl ItemKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Food => "food",
            ItemKind::Drink => "drink",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `food` / `drink` in any case, surrounding whitespace ignored.
impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(ItemKind::Food),
            "drink" => Ok(ItemKind::Drink),
            _ => Err(CoreError::InvalidMenuItemKind(s.to_string())),
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// Something on the menu.
///
/// Closed set of variants: both share name and price, and differ only in
/// the descriptive attribute. Nothing mutates an item once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Food {
        name: String,
        price: Money,
        /// Cuisine type, e.g. "Healthy", "Breakfast".
        cuisine: String,
    },
    Drink {
        name: String,
        price: Money,
        /// Serving size, e.g. "Large", "330ml".
        size: String,
    },
}

impl MenuItem {
    /// Builds a food item.
    pub fn food(name: impl Into<String>, price: Money, cuisine: impl Into<String>) -> Self {
        MenuItem::Food {
            name: name.into(),
            price,
            cuisine: cuisine.into(),
        }
    }

    /// Builds a drink item.
    pub fn drink(name: impl Into<String>, price: Money, size: impl Into<String>) -> Self {
        MenuItem::Drink {
            name: name.into(),
            price,
            size: size.into(),
        }
    }

    /// Builds a validated item of the given kind.
    ///
    /// ## Errors
    /// - `InvalidMenuItemKind` if `kind` is not `food` or `drink`
    /// - `Validation` if the name is blank / too long or the price negative
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::{ItemKind, MenuItem, Money};
    ///
    /// let tea = MenuItem::create("drink", "Tea", Money::from_pence(180), "Medium").unwrap();
    /// assert_eq!(tea.kind(), ItemKind::Drink);
    ///
    /// assert!(MenuItem::create("dessert", "Cake", Money::from_pence(300), "Slice").is_err());
    /// ```
    pub fn create(kind: &str, name: &str, price: Money, attribute: &str) -> CoreResult<Self> {
        let kind: ItemKind = kind.parse()?;
        validate_item_name(name)?;
        validate_price_pence(price.pence())?;

        let name = name.trim();
        Ok(match kind {
            ItemKind::Food => MenuItem::food(name, price, attribute),
            ItemKind::Drink => MenuItem::drink(name, price, attribute),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            MenuItem::Food { name, .. } | MenuItem::Drink { name, .. } => name,
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        match self {
            MenuItem::Food { price, .. } | MenuItem::Drink { price, .. } => *price,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            MenuItem::Food { .. } => ItemKind::Food,
            MenuItem::Drink { .. } => ItemKind::Drink,
        }
    }

    /// The variant-specific attribute: cuisine for food, size for drinks.
    pub fn attribute(&self) -> &str {
        match self {
            MenuItem::Food { cuisine, .. } => cuisine,
            MenuItem::Drink { size, .. } => size,
        }
    }

    /// One-line description used in menus, baskets and bills.
    ///
    /// ```rust
    /// use cafe_core::{MenuItem, Money};
    ///
    /// let salad = MenuItem::food("Salad", Money::from_pence(390), "Healthy");
    /// assert_eq!(salad.details(), "Food: Salad - £3.90");
    ///
    /// let latte = MenuItem::drink("Latte", Money::from_pence(350), "Large");
    /// assert_eq!(latte.details(), "Drink: Latte (Large) - £3.50");
    /// ```
    pub fn details(&self) -> String {
        match self {
            MenuItem::Food { name, price, .. } => format!("Food: {} - {}", name, price),
            MenuItem::Drink { name, price, size } => format!("Drink: {} ({}) - {}", name, size, price),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(10.0).bps(), 1000);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_tax_rate_as_fraction() {
        assert_eq!(TaxRate::from_bps(1000).as_fraction(), Decimal::new(1, 1));
        assert_eq!(TaxRate::from_bps(825).as_fraction(), Decimal::new(825, 4));
        assert!(TaxRate::zero().as_fraction().is_zero());
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1000).to_string(), "10.0%");
        assert_eq!(TaxRate::from_bps(1750).to_string(), "17.5%");
        assert_eq!(TaxRate::zero().to_string(), "0.0%");
    }

    #[test]
    fn test_default_tax_rate_is_ten_percent() {
        assert_eq!(TaxRate::default().bps(), 1000);
    }

    #[test]
    fn test_item_kind_parsing() {
        assert_eq!("food".parse::<ItemKind>().unwrap(), ItemKind::Food);
        assert_eq!(" Drink ".parse::<ItemKind>().unwrap(), ItemKind::Drink);

        let err = "snack".parse::<ItemKind>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidMenuItemKind(ref k) if k == "snack"));
    }

    #[test]
    fn test_menu_item_accessors() {
        let sandwich = MenuItem::food("Fish Sandwich", Money::from_pence(500), "Carbs");
        assert_eq!(sandwich.name(), "Fish Sandwich");
        assert_eq!(sandwich.price(), Money::from_pence(500));
        assert_eq!(sandwich.kind(), ItemKind::Food);
        assert_eq!(sandwich.attribute(), "Carbs");

        let coke = MenuItem::drink("Coke", Money::from_pence(100), "330ml");
        assert_eq!(coke.kind(), ItemKind::Drink);
        assert_eq!(coke.attribute(), "330ml");
    }

    #[test]
    fn test_create_validates_input() {
        let item = MenuItem::create("food", "  Croissant ", Money::from_pence(275), "Breakfast")
            .unwrap();
        assert_eq!(item.name(), "Croissant");

        let err = MenuItem::create("food", "   ", Money::from_pence(100), "Carbs").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = MenuItem::create("drink", "Tea", Money::from_pence(-1), "Small").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = MenuItem::create("pastry", "Tea", Money::from_pence(1), "Small").unwrap_err();
        assert!(matches!(err, CoreError::InvalidMenuItemKind(_)));
    }

    #[test]
    fn test_menu_item_serializes_with_kind_tag() {
        let tea = MenuItem::drink("Tea", Money::from_pence(180), "Medium");
        let json = serde_json::to_value(&tea).unwrap();
        assert_eq!(json["kind"], "drink");
        assert_eq!(json["size"], "Medium");
        assert_eq!(json["price"], 180);
    }
}
