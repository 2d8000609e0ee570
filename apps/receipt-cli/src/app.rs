//! # Report Run
//!
//! One complete, synchronous pass:
//!
//! ```text
//! read input ──► parse ──► sort ──► render ──► write output
//!    │             │                              │
//!    │             └─ header error: stop here,    │
//!    │                nothing is written          │
//!    └─ handle closed before parsing starts       └─ single write call
//! ```
//!
//! The whole report is rendered in memory before the output is opened, so a
//! fatal error never leaves a half-written file behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use receipt_core::{Diagnostic, ParseOutcome, ReceiptParser, ReportFormatter};
use tracing::info;

use crate::config::ReportConfig;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Items written to the report.
    pub items: usize,
    /// Recoverable problems, in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// The rendered report.
    pub report: String,
}

/// Reads, processes and writes one receipt.
///
/// `now` is the processing instant for the future-timestamp check.
pub fn run(config: &ReportConfig, now: NaiveDateTime) -> Result<RunOutcome> {
    let input = read_input(&config.input_path)?;

    let ParseOutcome {
        mut receipt,
        diagnostics,
    } = ReceiptParser::new(config.quantity_policy)
        .parse(&input, now)
        .context("Receipt header rejected, no report written")?;

    receipt.sort_by_total_desc();

    let report = ReportFormatter::new(config.output_format, config.summary_layout)
        .render(&receipt)
        .context("Failed to render report")?;

    write_output(config, &report)?;

    info!(
        items = receipt.len(),
        diagnostics = diagnostics.len(),
        output = %config.output_path.display(),
        "Report written"
    );

    Ok(RunOutcome {
        items: receipt.len(),
        diagnostics,
        report,
    })
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

fn write_output(config: &ReportConfig, report: &str) -> Result<()> {
    if config.writes_to_stdout() {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(report.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write report to stdout")
    } else {
        let path = &config.output_path;
        fs::write(path, report)
            .with_context(|| format!("Failed to write output file {}", path.display()))
    }
}
