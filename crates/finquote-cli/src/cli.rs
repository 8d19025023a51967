//! CLI argument definitions for finquote.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch the latest quote for one or more symbols |
//! | `name` | Resolve company names, falling back to "Unknown Stock" |
//! | `lookup` | Resolve a company name, reporting not-found and errors separately |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--token` | `$FINQUOTE_API_TOKEN` | Finnhub API token |
//! | `--base-url` | `$FINQUOTE_BASE_URL` or Finnhub | API base URL |
//! | `--timeout-ms` | `$FINQUOTE_TIMEOUT_MS` or `5000` | Request timeout in ms |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--verbose` | `false` | Debug-level logging on stderr |

use clap::{Args, Parser, Subcommand};

/// Stock quotes and company names from Finnhub.
#[derive(Debug, Parser)]
#[command(
    name = "finquote",
    author,
    version,
    about = "Stock quotes and company names from Finnhub"
)]
pub struct Cli {
    /// Finnhub API token. Overrides FINQUOTE_API_TOKEN.
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL. Overrides FINQUOTE_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds. Overrides FINQUOTE_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log request decisions at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the latest quote for one or more symbols.
    ///
    /// # Examples
    ///
    ///   finquote quote AAPL
    ///   finquote quote AAPL MSFT --pretty
    Quote(SymbolsArgs),

    /// Resolve company names; unknown or failed lookups print "Unknown Stock".
    ///
    /// # Examples
    ///
    ///   finquote name AAPL MSFT
    Name(SymbolsArgs),

    /// Resolve one company name, reporting not-found and errors separately.
    ///
    /// # Examples
    ///
    ///   finquote lookup AAPL
    Lookup(SymbolArgs),
}

#[derive(Debug, Args)]
pub struct SymbolsArgs {
    /// Ticker symbols, sent exactly as typed.
    #[arg(required = true)]
    pub symbols: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Ticker symbol, sent exactly as typed.
    pub symbol: String,
}
