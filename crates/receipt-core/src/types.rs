//! # Pipeline Option Types
//!
//! Small enums that select how the pipeline behaves. They are plain data so
//! the CLI can load them from TOML, environment variables, or flags.
//!
//! ```text
//! ┌───────────────────┬──────────────────────┬─────────────────────────────┐
//! │ Type              │ Default              │ Affects                     │
//! ├───────────────────┼──────────────────────┼─────────────────────────────┤
//! │ QuantityPolicy    │ Lenient              │ line_item (bad quantities)  │
//! │ SummaryLayout     │ Labeled              │ report (trailing summary)   │
//! │ OutputFormat      │ Text                 │ report (text vs JSON)       │
//! └───────────────────┴──────────────────────┴─────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with an item whose quantity token cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    /// Keep the item, total it at zero, and record a diagnostic.
    ///
    /// One bad quantity should not throw away an otherwise valid receipt.
    #[default]
    Lenient,

    /// Drop the item and record a diagnostic.
    Strict,
}

/// Layout of the trailing grand-total / item-count block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLayout {
    /// ```text
    /// Total: P150.00
    /// 502 items
    /// ```
    #[default]
    Labeled,

    /// `P150.00502 items`, no separator, no trailing newline.
    ///
    /// Byte-compatible with consumers of the historical output file.
    Legacy,
}

/// Report encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// =============================================================================
// String Conversions
// =============================================================================
// Used by CLI flags and environment overrides. Matching is case-insensitive.

impl FromStr for QuantityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(QuantityPolicy::Lenient),
            "strict" => Ok(QuantityPolicy::Strict),
            other => Err(format!("unknown quantity policy '{other}' (expected lenient|strict)")),
        }
    }
}

impl FromStr for SummaryLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "labeled" => Ok(SummaryLayout::Labeled),
            "legacy" => Ok(SummaryLayout::Legacy),
            other => Err(format!("unknown summary layout '{other}' (expected labeled|legacy)")),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text|json)")),
        }
    }
}

impl fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuantityPolicy::Lenient => "lenient",
            QuantityPolicy::Strict => "strict",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(QuantityPolicy::default(), QuantityPolicy::Lenient);
        assert_eq!(SummaryLayout::default(), SummaryLayout::Labeled);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("STRICT".parse::<QuantityPolicy>(), Ok(QuantityPolicy::Strict));
        assert_eq!("Legacy".parse::<SummaryLayout>(), Ok(SummaryLayout::Legacy));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("loose".parse::<QuantityPolicy>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let policy: QuantityPolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, QuantityPolicy::Strict);
        assert_eq!(serde_json::to_string(&SummaryLayout::Legacy).unwrap(), "\"legacy\"");
    }
}
