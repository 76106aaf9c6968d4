use std::path::PathBuf;

use clap::Parser;

/// Command line flags. Each one overrides the matching `CAFE_*` variable.
#[derive(Parser, Debug, Default)]
#[command(name = "cafe")]
#[command(about = "Order food and drinks at the café counter.")]
pub struct Args {
    /// Name shown in the welcome banner
    #[arg(long, value_name = "NAME")]
    pub store_name: Option<String>,

    /// Tax percentage applied at checkout, e.g. 10 or 12.5
    #[arg(long, value_name = "PERCENT")]
    pub tax_rate: Option<f64>,

    /// JSON menu file used instead of the built-in menu
    #[arg(long, value_name = "FILE")]
    pub menu: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
