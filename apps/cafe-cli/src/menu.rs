//! Loads the catalog: the built-in menu, or a JSON file of [`MenuEntry`] rows.
//!
//! ```json
//! [
//!   {"kind": "drink", "name": "Latte", "price_pence": 350, "attribute": "Large"},
//!   {"kind": "food", "name": "Salad", "price_pence": 390, "attribute": "Healthy"}
//! ]
//! ```

use std::fs;
use std::path::Path;

use cafe_core::{MenuCatalog, MenuEntry};
use tracing::info;

use crate::error::CliError;

/// Builds the catalog for this run.
pub fn load_catalog(path: Option<&Path>) -> Result<MenuCatalog, CliError> {
    let Some(path) = path else {
        let catalog = MenuCatalog::populate_default()?;
        info!(items = catalog.len(), "Built-in menu loaded");
        return Ok(catalog);
    };

    let json = fs::read_to_string(path).map_err(|source| CliError::MenuRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_menu(&json, path)?;

    info!(path = %path.display(), items = catalog.len(), "Menu file loaded");
    Ok(catalog)
}

/// Parses menu file contents. `path` is only used in error messages.
pub fn parse_menu(json: &str, path: &Path) -> Result<MenuCatalog, CliError> {
    let entries: Vec<MenuEntry> =
        serde_json::from_str(json).map_err(|source| CliError::MenuParse {
            path: path.to_path_buf(),
            source,
        })?;

    if entries.is_empty() {
        return Err(CliError::EmptyMenu(path.to_path_buf()));
    }

    Ok(MenuCatalog::from_entries(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{CoreError, ItemKind};

    fn path() -> &'static Path {
        Path::new("menu.json")
    }

    #[test]
    fn test_builtin_menu() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_parse_menu() {
        let json = r#"[
            {"kind": "drink", "name": "Mocha", "price_pence": 340, "attribute": "Large"},
            {"kind": "FOOD", "name": "Scone", "price_pence": 225, "attribute": "Baked"}
        ]"#;

        let catalog = parse_menu(json, path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.select(2).unwrap().kind(), ItemKind::Food);
        assert_eq!(catalog.select(1).unwrap().details(), "Drink: Mocha (Large) - £3.40");
    }

    #[test]
    fn test_unknown_kind_fails_fast() {
        let json = r#"[{"kind": "cake", "name": "Sponge", "price_pence": 300, "attribute": "Slice"}]"#;
        let err = parse_menu(json, path()).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::InvalidMenuItemKind(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[{"kind": "food", "name": "Toast", "price_pence": -10, "attribute": "Breakfast"}]"#;
        let err = parse_menu(json, path()).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_malformed_and_empty_files() {
        assert!(matches!(
            parse_menu("{not json", path()),
            Err(CliError::MenuParse { .. })
        ));
        assert!(matches!(parse_menu("[]", path()), Err(CliError::EmptyMenu(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Some(Path::new("/definitely/not/here/menu.json"))).unwrap_err();
        assert!(matches!(err, CliError::MenuRead { .. }));
    }
}
