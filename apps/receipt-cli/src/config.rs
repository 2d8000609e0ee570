//! Receipt CLI configuration module.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`RECEIPT_*`, e.g. `RECEIPT_QUANTITY_POLICY=strict`)
//! 3. Config file (`--config <path>`, or `receipt.toml` if it exists)
//! 4. Defaults (this file)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use receipt_core::{OutputFormat, QuantityPolicy, SummaryLayout};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "receipt.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RECEIPT";

/// Input file used when nothing else is configured.
pub const DEFAULT_INPUT_PATH: &str = "INPUT.TXT";

/// Output file used when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "OUTPUT.TXT";

/// Output path that means "write to stdout".
pub const STDOUT_PATH: &str = "-";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Receipt CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Receipt record to read
    pub input_path: PathBuf,

    /// Where the report goes (`-` for stdout)
    pub output_path: PathBuf,

    /// Handling of unreadable quantities
    pub quantity_policy: QuantityPolicy,

    /// Trailing summary layout (text output only)
    pub summary_layout: SummaryLayout,

    /// Text or JSON report
    pub output_format: OutputFormat,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ReportConfig {
    /// Matches the historical tool: `INPUT.TXT` in, `OUTPUT.TXT` out.
    fn default() -> Self {
        ReportConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            quantity_policy: QuantityPolicy::Lenient,
            summary_layout: SummaryLayout::Labeled,
            output_format: OutputFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads defaults, then the config file, then `RECEIPT_*` variables, then
    /// applies command-line overrides and validates the result.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(cli.config.as_deref(), None)?;
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Loads from an explicit file and environment, without validating.
    ///
    /// `file = None` falls back to an optional [`DEFAULT_CONFIG_FILE`];
    /// `env = None` reads the process environment.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE)
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .set_default("input_path", DEFAULT_INPUT_PATH)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("quantity_policy", "lenient")?
            .set_default("summary_layout", "labeled")?
            .set_default("output_format", "text")?
            .set_default("log_level", "info")?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Command-line flags win over every other source.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.input {
            self.input_path = path.clone();
        }
        if let Some(path) = &cli.output {
            self.output_path = path.clone();
        }
        if let Some(policy) = cli.quantity_policy {
            self.quantity_policy = policy;
        }
        if let Some(layout) = cli.summary_layout {
            self.summary_layout = layout;
        }
        if let Some(format) = cli.format {
            self.output_format = format;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("input_path".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("output_path".to_string()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "log_level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// `true` if the report should go to stdout instead of a file.
    pub fn writes_to_stdout(&self) -> bool {
        self.output_path == Path::new(STDOUT_PATH)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = ReportConfig::load_from(Some(&path), env(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert!(!config.writes_to_stdout());
    }

    #[test]
    fn test_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.toml");
        fs::write(
            &path,
            "input_path = \"in.txt\"\n\
             quantity_policy = \"strict\"\n\
             summary_layout = \"legacy\"\n",
        )
        .unwrap();

        let config = ReportConfig::load_from(Some(&path), env(&[])).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from("OUTPUT.TXT"));
        assert_eq!(config.quantity_policy, QuantityPolicy::Strict);
        assert_eq!(config.summary_layout, SummaryLayout::Legacy);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.toml");
        fs::write(&path, "output_format = \"text\"\nlog_level = \"debug\"\n").unwrap();

        let config = ReportConfig::load_from(
            Some(&path),
            env(&[("RECEIPT_OUTPUT_FORMAT", "json"), ("RECEIPT_OUTPUT_PATH", "-")]),
        )
        .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert!(config.writes_to_stdout());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = ReportConfig::load_from(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_bad_enum_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.toml");
        fs::write(&path, "quantity_policy = \"sloppy\"\n").unwrap();
        assert!(ReportConfig::load_from(Some(&path), env(&[])).is_err());
    }

    #[test]
    fn test_bad_log_level() {
        let config = ReportConfig {
            log_level: "loud".to_string(),
            ..ReportConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::parse_from([
            "receipt-report",
            "--input",
            "a.txt",
            "--output",
            "-",
            "--quantity-policy",
            "strict",
            "--summary-layout",
            "legacy",
            "--format",
            "json",
            "--log-level",
            "warn",
        ]);
        let mut config = ReportConfig::default();
        config.apply_overrides(&cli);

        assert_eq!(config.input_path, PathBuf::from("a.txt"));
        assert!(config.writes_to_stdout());
        assert_eq!(config.quantity_policy, QuantityPolicy::Strict);
        assert_eq!(config.summary_layout, SummaryLayout::Legacy);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
    }
}
