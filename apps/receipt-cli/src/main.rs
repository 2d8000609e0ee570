//! # receipt-report
//!
//! Exit status: 0 on success (even with skipped lines), 1 when the run is
//! aborted (bad header, unreadable input, failed write), 2 for configuration
//! errors.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::info;

use receipt_cli::logging::init_tracing;
use receipt_cli::{run, Cli, ReportConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ReportConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("receipt-report: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config.log_level);
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        policy = %config.quantity_policy,
        "Configuration loaded"
    );

    match run(&config, Local::now().naive_local()) {
        Ok(outcome) => {
            if !outcome.diagnostics.is_empty() {
                info!(count = outcome.diagnostics.len(), "Completed with skipped or defaulted lines");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("receipt-report: {e:#}");
            ExitCode::FAILURE
        }
    }
}
