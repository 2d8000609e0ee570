//! # Receipt Report CLI
//!
//! Reads a receipt record, sorts its items by line total and writes the
//! report.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         receipt-report                                  │
//! │                                                                         │
//! │  ┌──────────┐   ┌──────────────┐   ┌───────────┐   ┌────────────────┐  │
//! │  │   cli    │──►│    config    │──►│  logging  │──►│      app       │  │
//! │  │  flags   │   │ file+env+cli │   │ subscriber│   │ read→core→write│  │
//! │  └──────────┘   └──────────────┘   └───────────┘   └────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_INPUT_PATH` - Receipt record (default: INPUT.TXT)
//! - `RECEIPT_OUTPUT_PATH` - Report destination, `-` for stdout (default: OUTPUT.TXT)
//! - `RECEIPT_QUANTITY_POLICY` - `lenient` or `strict` (default: lenient)
//! - `RECEIPT_SUMMARY_LAYOUT` - `labeled` or `legacy` (default: labeled)
//! - `RECEIPT_OUTPUT_FORMAT` - `text` or `json` (default: text)
//! - `RECEIPT_LOG_LEVEL` - default log filter (default: info)
//! - `RUST_LOG` - full tracing filter, overrides the log level

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

// Re-exports
pub use app::{run, RunOutcome};
pub use cli::Cli;
pub use config::{ConfigError, ReportConfig};
