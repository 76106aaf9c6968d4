//! # Menu Catalog
//!
//! The ordered list of items shown to customers. Populated once at startup,
//! then only read. Positions stay stable for the life of the catalog, so a
//! number printed next to an item always selects that item.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;

/// The house menu: (kind, name, price in pence, attribute).
const DEFAULT_MENU: &[(&str, &str, i64, &str)] = &[
    // Drinks
    ("drink", "Latte", 350, "Large"),
    ("drink", "Espresso", 200, "Small"),
    ("drink", "Cappuccino", 300, "Medium"),
    ("drink", "Tea", 180, "Medium"),
    ("drink", "Coke", 100, "330ml"),
    ("drink", "Fanta", 100, "330ml"),
    ("drink", "Sprite", 100, "330ml"),
    // Food
    ("food", "Chicken Sandwich", 500, "Carbs"),
    ("food", "Turkey Sandwich", 800, "Carbs"),
    ("food", "Fish Sandwich", 500, "Carbs"),
    ("food", "Flafel Sandwich", 400, "Carbs"),
    ("food", "Vegan Sandwich", 500, "Carbs"),
    ("food", "Croissant", 275, "Breakfast"),
    ("food", "Salad", 390, "Healthy"),
];

// =============================================================================
// Menu Entry
// =============================================================================

/// One row of a menu file.
///
/// `kind` stays a plain string so an unknown variant is reported as
/// `InvalidMenuItemKind` rather than a generic parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    pub kind: String,
    pub name: String,
    pub price_pence: i64,
    /// Cuisine for food, size for drinks.
    pub attribute: String,
}

impl MenuEntry {
    pub fn into_item(self) -> CoreResult<MenuItem> {
        MenuItem::create(
            &self.kind,
            &self.name,
            Money::from_pence(self.price_pence),
            &self.attribute,
        )
    }
}

// =============================================================================
// Menu Catalog
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MenuCatalog { items: Vec::new() }
    }

    /// Builds the house menu: seven drinks followed by seven food items.
    ///
    /// ## Errors
    /// Only fails if the built-in table itself is broken, which the tests
    /// below rule out.
    pub fn populate_default() -> CoreResult<Self> {
        let mut catalog = MenuCatalog::new();
        for (kind, name, pence, attribute) in DEFAULT_MENU {
            catalog.add(MenuItem::create(
                kind,
                name,
                Money::from_pence(*pence),
                attribute,
            )?);
        }
        Ok(catalog)
    }

    /// Builds a catalog from menu file rows, keeping their order.
    ///
    /// Stops at the first bad row: an unknown kind is a configuration
    /// mistake and should stop the till from starting.
    pub fn from_entries(entries: impl IntoIterator<Item = MenuEntry>) -> CoreResult<Self> {
        let items = entries
            .into_iter()
            .map(MenuEntry::into_item)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(MenuCatalog { items })
    }

    /// Appends an item; existing positions are unaffected.
    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Item at a 0-based position.
    pub fn get(&self, position: usize) -> Option<&MenuItem> {
        self.items.get(position)
    }

    /// Item for a 1-based number as printed by [`MenuCatalog::render`].
    ///
    /// ```rust
    /// use cafe_core::MenuCatalog;
    ///
    /// let menu = MenuCatalog::populate_default().unwrap();
    /// assert_eq!(menu.select(1).unwrap().name(), "Latte");
    /// assert!(menu.select(0).is_err());
    /// assert!(menu.select(15).is_err());
    /// ```
    pub fn select(&self, number: usize) -> CoreResult<&MenuItem> {
        number
            .checked_sub(1)
            .and_then(|position| self.items.get(position))
            .ok_or(CoreError::InvalidSelection {
                position: number,
                len: self.items.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Numbered listing, one item per line.
    pub fn render(&self) -> String {
        let mut out = String::from("--- Menu ---\n");
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, item.details()));
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    #[test]
    fn test_default_menu_contents() {
        let menu = MenuCatalog::populate_default().unwrap();
        assert_eq!(menu.len(), 14);

        let drinks = menu
            .list()
            .iter()
            .filter(|i| i.kind() == ItemKind::Drink)
            .count();
        assert_eq!(drinks, 7);

        assert_eq!(menu.get(0).unwrap().details(), "Drink: Latte (Large) - £3.50");
        assert_eq!(menu.get(13).unwrap().details(), "Food: Salad - £3.90");
        assert_eq!(menu.get(12).unwrap().price(), Money::from_pence(275));
    }

    #[test]
    fn test_positions_are_stable_after_add() {
        let mut menu = MenuCatalog::populate_default().unwrap();
        let before: Vec<String> = menu.list().iter().map(|i| i.name().to_string()).collect();

        menu.add(MenuItem::food("Muffin", Money::from_pence(225), "Breakfast"));

        assert_eq!(menu.len(), 15);
        for (i, name) in before.iter().enumerate() {
            assert_eq!(menu.get(i).unwrap().name(), name);
        }
        assert_eq!(menu.select(15).unwrap().name(), "Muffin");
    }

    #[test]
    fn test_select_out_of_range() {
        let menu = MenuCatalog::new();
        assert!(menu.is_empty());

        let err = menu.select(1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidSelection {
                position: 1,
                len: 0
            }
        ));
    }

    #[test]
    fn test_from_entries() {
        let json = r#"[
            {"kind": "drink", "name": "Flat White", "price_pence": 320, "attribute": "Regular"},
            {"kind": "food", "name": "Bagel", "price_pence": 250, "attribute": "Breakfast"}
        ]"#;
        let entries: Vec<MenuEntry> = serde_json::from_str(json).unwrap();
        let menu = MenuCatalog::from_entries(entries).unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.select(1).unwrap().details(), "Drink: Flat White (Regular) - £3.20");
        assert_eq!(menu.select(2).unwrap().kind(), ItemKind::Food);
    }

    #[test]
    fn test_from_entries_rejects_unknown_kind() {
        let entries = vec![MenuEntry {
            kind: "dessert".to_string(),
            name: "Cake".to_string(),
            price_pence: 300,
            attribute: "Slice".to_string(),
        }];

        let err = MenuCatalog::from_entries(entries).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMenuItemKind(ref k) if k == "dessert"));
    }

    #[test]
    fn test_render_numbers_from_one() {
        let mut menu = MenuCatalog::new();
        menu.add(MenuItem::drink("Tea", Money::from_pence(180), "Medium"));
        menu.add(MenuItem::food("Salad", Money::from_pence(390), "Healthy"));

        assert_eq!(
            menu.render(),
            "--- Menu ---\n1. Drink: Tea (Medium) - £1.80\n2. Food: Salad - £3.90\n"
        );
    }
}
