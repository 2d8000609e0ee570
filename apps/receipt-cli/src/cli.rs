//! Command-line flags.
//!
//! Every flag is optional; anything left unset comes from the environment,
//! the config file, or the defaults in [`crate::config`].

use std::path::PathBuf;

use clap::Parser;
use receipt_core::{OutputFormat, QuantityPolicy, SummaryLayout};

/// Sort a receipt record by line total and write a summary report.
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-report", version, about)]
pub struct Cli {
    /// Receipt record to read [default: INPUT.TXT]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Report destination, `-` for stdout [default: OUTPUT.TXT]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML config file [default: receipt.toml if present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// lenient: keep items with unreadable quantities at P0.00; strict: drop them
    #[arg(long, value_name = "POLICY")]
    pub quantity_policy: Option<QuantityPolicy>,

    /// labeled: `Total:` line + count line; legacy: historical one-line summary
    #[arg(long, value_name = "LAYOUT")]
    pub summary_layout: Option<SummaryLayout>,

    /// text or json
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Log filter used when RUST_LOG is unset (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
