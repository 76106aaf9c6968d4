//! # Café Till Entry Point
//!
//! ```text
//! cafe [--store-name NAME] [--tax-rate PERCENT] [--menu FILE]
//! ```
//!
//! The actual setup is in lib.rs so the session can be tested.

fn main() -> anyhow::Result<()> {
    cafe_cli::run()
}
