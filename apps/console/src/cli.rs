//! Command-line flags.
//!
//! With no subcommand `mart` opens the interactive menu. `mart report <kind>`
//! prints one report and exits, which is handy together with `--demo` and
//! `--json`.

use clap::{Parser, Subcommand, ValueEnum};

/// Mart - store inventory, staff and sales console
#[derive(Parser, Debug)]
#[command(name = "mart")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'mart' without arguments for the interactive menu.")]
pub struct Cli {
    /// Store name shown in the menu banner (overrides MART_STORE_NAME)
    #[arg(long, global = true)]
    pub store_name: Option<String>,

    /// Currency symbol used when printing amounts (overrides MART_CURRENCY_SYMBOL)
    #[arg(long, global = true)]
    pub currency_symbol: Option<String>,

    /// Render reports as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Start with a demo catalog and roster
    #[arg(long, global = true)]
    pub demo: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a single report and exit
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Inventory,
    Sales,
    Employees,
}
