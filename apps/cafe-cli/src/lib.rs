//! # cafe-cli: Console Till
//!
//! Wires configuration, the menu and the session loop around `cafe-core`.
//!
//! ## Module Structure
//! ```text
//! cafe_cli/
//! ├── args.rs      - Command line flags (clap)
//! ├── config.rs    - ConfigState: defaults, CAFE_* variables, flags
//! ├── error.rs     - CliError
//! ├── menu.rs      - Built-in or JSON menu loading
//! └── session.rs   - Interactive prompt loop
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod menu;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use config::ConfigState;
use session::Session;

/// Runs the till on the current terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                          Till Startup                                   │
/// │                                                                         │
/// │  1. Parse Flags ──────────────────────────────────────────────────────► │
/// │     • --store-name, --tax-rate, --menu                                  │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  3. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults < CAFE_* variables < flags                               │
/// │                                                                         │
/// │  4. Load Menu ────────────────────────────────────────────────────────► │
/// │     • built-in menu unless a menu file is configured                    │
/// │                                                                         │
/// │  5. Serve Customers until stdin closes                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse_args();

    init_tracing();

    let config = ConfigState::from_env()?.with_args(&args)?;
    info!(
        store_name = %config.store_name,
        tax_rate = %config.tax_rate,
        menu_path = ?config.menu_path,
        "Starting café till"
    );

    let catalog = menu::load_catalog(config.menu_path.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let registry = Session::new(stdin.lock(), stdout.lock(), catalog, &config).run()?;

    info!(orders = registry.len(), "Till closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the prompts on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show rejected inputs
/// - `RUST_LOG=cafe_core=warn` - Silence per-item order updates
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
