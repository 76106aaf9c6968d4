//! # Configuration State
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--tax-rate`, ...)
//! 2. Environment variables (`CAFE_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;

use cafe_core::validation::validate_tax_rate_bps;
use cafe_core::{TaxRate, DEFAULT_TAX_RATE};

use crate::args::Args;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Shown in the welcome banner
    pub store_name: String,

    /// Applied to every bill
    pub tax_rate: TaxRate,

    /// Menu file replacing the built-in catalog
    pub menu_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "the Café"
    /// - Tax: 10%
    /// - Menu: built-in
    fn default() -> Self {
        ConfigState {
            store_name: "the Café".to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            menu_path: None,
        }
    }
}

impl ConfigState {
    /// Defaults overlaid with the process environment.
    ///
    /// ## Environment Variables
    /// - `CAFE_STORE_NAME`: store name
    /// - `CAFE_TAX_RATE`: tax percentage (e.g., "10")
    /// - `CAFE_MENU_PATH`: JSON menu file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("CAFE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(rate) = lookup("CAFE_TAX_RATE") {
            let pct = rate
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidValue("CAFE_TAX_RATE".to_string()))?;
            config.tax_rate = tax_rate_from_percentage("CAFE_TAX_RATE", pct)?;
        }

        if let Some(path) = lookup("CAFE_MENU_PATH") {
            config.menu_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Applies command line flags on top of this configuration.
    pub fn with_args(mut self, args: &Args) -> Result<Self, ConfigError> {
        if let Some(store_name) = &args.store_name {
            self.store_name = store_name.clone();
        }

        if let Some(pct) = args.tax_rate {
            self.tax_rate = tax_rate_from_percentage("--tax-rate", pct)?;
        }

        if let Some(menu) = &args.menu {
            self.menu_path = Some(menu.clone());
        }

        Ok(self)
    }
}

/// Converts a user-supplied percentage, accepting 0% to 100%.
fn tax_rate_from_percentage(source: &str, pct: f64) -> Result<TaxRate, ConfigError> {
    if !pct.is_finite() || pct < 0.0 {
        return Err(ConfigError::InvalidValue(source.to_string()));
    }

    let rate = TaxRate::from_percentage(pct);
    validate_tax_rate_bps(rate.bps()).map_err(|_| ConfigError::InvalidValue(source.to_string()))?;
    Ok(rate)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config.store_name, "the Café");
        assert_eq!(config.tax_rate, TaxRate::from_bps(1000));
        assert!(config.menu_path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("CAFE_STORE_NAME", "Bean There"),
            ("CAFE_TAX_RATE", " 12.5 "),
            ("CAFE_MENU_PATH", "/etc/cafe/menu.json"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Bean There");
        assert_eq!(config.tax_rate.bps(), 1250);
        assert_eq!(config.menu_path, Some(PathBuf::from("/etc/cafe/menu.json")));
    }

    #[test]
    fn test_bad_env_tax_rate() {
        for value in ["ten", "-5", "101", "NaN"] {
            let result = ConfigState::from_lookup(lookup_from(&[("CAFE_TAX_RATE", value)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidValue(ref v)) if v == "CAFE_TAX_RATE"),
                "accepted {value}"
            );
        }
    }

    #[test]
    fn test_args_win_over_env() {
        let env = ConfigState::from_lookup(lookup_from(&[
            ("CAFE_STORE_NAME", "Bean There"),
            ("CAFE_TAX_RATE", "5"),
        ]))
        .unwrap();

        let args = Args {
            store_name: None,
            tax_rate: Some(20.0),
            menu: Some(PathBuf::from("menu.json")),
        };
        let config = env.with_args(&args).unwrap();

        assert_eq!(config.store_name, "Bean There");
        assert_eq!(config.tax_rate.bps(), 2000);
        assert_eq!(config.menu_path, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_bad_flag_tax_rate() {
        let args = Args {
            tax_rate: Some(250.0),
            ..Args::default()
        };
        let err = ConfigState::default().with_args(&args).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for --tax-rate");
    }
}
