//! # Mart Console Library
//!
//! Everything behind the `mart` binary.
//!
//! ## Module Organization
//! ```text
//! mart_console_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared store (Arc<Mutex<Store>>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog commands
//! │   ├── employee.rs ◄─── Roster commands
//! │   ├── sale.rs     ◄─── Sale/transaction commands
//! │   └── report.rs   ◄─── Report commands
//! ├── menu.rs         ◄─── Interactive menus
//! ├── render.rs       ◄─── Tables and JSON
//! ├── seed.rs         ◄─── Demo data
//! └── error.rs        ◄─── ApiError / AppError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod menu;
pub mod render;
pub mod seed;
pub mod state;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{ApiError, AppResult};
use menu::Console;
use state::{ConfigState, StoreState};

/// Runs the console.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse flags                                                         │
/// │  2. Initialize logging (stderr, RUST_LOG or -v)                         │
/// │  3. Resolve configuration: defaults → MART_* env → flags                │
/// │  4. Build the store (empty, or demo data with --demo)                   │
/// │  5. `mart report <kind>` → print and exit                               │
/// │     otherwise           → interactive menu until Exit                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("Starting Mart console");

    let config =
        ConfigState::from_env().with_overrides(cli.store_name, cli.currency_symbol, cli.json);
    info!(store_name = %config.store_name, json = config.json_output, "Configuration resolved");

    let store = if cli.demo {
        StoreState::from_store(seed::demo_store().map_err(ApiError::from)?)
    } else {
        StoreState::new()
    };

    match cli.command {
        Some(Commands::Report { kind }) => {
            let text = menu::render_report(&store, &config, kind)?;
            println!("{}", text.trim_end());
            Ok(())
        }
        None => Console::new(store, config).run(),
    }
}

/// Default filter for a verbosity count.
///
/// ## Log Levels
/// - no flag: warnings only, so log lines do not interleave with the menus
/// - `-v`: `info`, plus `debug` for the mart crates
/// - `-vv`: everything
///
/// `RUST_LOG` wins over all of these.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,mart=debug",
        _ => "trace",
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout carries
/// only menus, tables and JSON.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_by_verbosity() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info,mart=debug");
        assert_eq!(default_filter(2), "trace");
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn test_default_filters_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }
}
