//! # CLI Error Type
//!
//! Everything that can stop the till. Bad selections and blank names never
//! end up here: the session loop answers those with a retry prompt.
//!
//! ```text
//! ConfigError ─────────────┐
//! io::Error ───────────────┤
//! menu file read / parse ──┼──► CliError ──► anyhow::Error in main
//! CoreError ───────────────┘
//! ```

use std::path::PathBuf;

use cafe_core::CoreError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not read menu file {path}: {source}")]
    MenuRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Menu file {path} is not valid JSON: {source}")]
    MenuParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Menu file {0} has no items")]
    EmptyMenu(PathBuf),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::EmptyMenu(PathBuf::from("menu.json"));
        assert_eq!(err.to_string(), "Menu file menu.json has no items");

        let err: CliError = CoreError::InvalidMenuItemKind("cake".to_string()).into();
        assert_eq!(err.to_string(), "Invalid menu item kind: cake");

        let err: CliError = ConfigError::InvalidValue("CAFE_TAX_RATE".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for CAFE_TAX_RATE");
    }
}
