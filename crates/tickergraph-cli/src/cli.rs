//! CLI argument definitions for tickergraph.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Resolve live quotes for symbols plus the major indexes |
//! | `trend` | Render an ASCII closing-price trend chart per symbol |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Resolve a quote
//! tickergraph quote AAPL
//!
//! # Resolve several symbols, append them to a CSV file, skip the indexes
//! tickergraph quote AAPL MSFT --export quotes.csv --hide-index
//!
//! # Chart the last quarter at 100 columns
//! tickergraph trend AAPL --days 90 --width 100
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Tickergraph - market-state-aware quote resolver and trend charting CLI
///
/// Resolves quotes by scraping the public quote pages of the data provider,
/// selecting locators that match whether the market is currently open or
/// closed, and renders historical closing prices as fixed-width ASCII charts.
#[derive(Debug, Parser)]
#[command(
    name = "tickergraph",
    author,
    version,
    about = "Market-state-aware stock quotes and ASCII trend charts"
)]
pub struct Cli {
    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve latest quote(s) for one or more symbols.
    ///
    /// Prints a table of price, change, day and 52-week ranges, and
    /// performance fields, followed by the DOW, NASDAQ and S&P500 indexes.
    /// Fields that cannot be read degrade to `---` instead of failing the
    /// record.
    ///
    /// # Examples
    ///
    ///   tickergraph quote AAPL
    ///   tickergraph quote AAPL MSFT GOOG --hide-index
    ///   tickergraph quote AAPL --export quotes.csv
    Quote(QuoteArgs),

    /// Render closing-price trend chart(s).
    ///
    /// Fetches up to a year of daily bars and plots closes as one marker per
    /// trading day between the low and high of the day, scaled to the
    /// requested terminal width.
    ///
    /// # Examples
    ///
    ///   tickergraph trend AAPL
    ///   tickergraph trend AAPL MSFT --days 30 --width 100
    Trend(TrendArgs),
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// One or more market symbols (e.g. AAPL, MSFT, BRK.A).
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Skip the market index section after the symbol table.
    #[arg(long, default_value_t = false)]
    pub hide_index: bool,

    /// Append the resolved records to a CSV file.
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `trend` command.
#[derive(Debug, Args)]
pub struct TrendArgs {
    /// One or more market symbols to chart.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Trading-day lookback window (1-365).
    #[arg(long, default_value_t = 90)]
    pub days: u16,

    /// Total terminal width of each chart row in columns.
    #[arg(long, default_value_t = 120)]
    pub width: usize,
}
