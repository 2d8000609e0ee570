//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ParseError                                                         │
//! │  │   ├── header-level  → FATAL, abort the run, no output               │
//! │  │   ├── line-level    → skip the line, keep going                     │
//! │  │   └── item-level    → keep the item at total 0 (lenient policy)     │
//! │  └── ReportError       - rendering failures                          │
//! │                                                                         │
//! │  receipt-cli errors (binary crate)                                     │
//! │  ├── ConfigError      - bad configuration values                       │
//! │  └── anyhow::Error    - file I/O with context                          │
//! │                                                                         │
//! │  Flow: ParseError → Diagnostic (recoverable) or anyhow (fatal) → stderr │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending token in every message
//! 3. Errors are enum variants, never String
//! 4. Recoverable errors travel inside a [`Diagnostic`] with the line verbatim

use std::fmt;

use chrono::NaiveDateTime;
use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Everything that can go wrong while reading a receipt record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first line is missing or has fewer than three tokens.
    #[error("Malformed header: expected `<record_id> <MM/DD/YYYY> <HH:MM:SS>`, got {found:?}")]
    MalformedHeader { found: String },

    /// Record id is not 12 digits/hyphens (see [`crate::RECORD_ID_LEN`]).
    #[error("Invalid record id {record_id:?}: must be 12 characters of digits and hyphens")]
    InvalidRecordId { record_id: String },

    /// Date or time token does not form a real calendar date-time.
    #[error("Invalid date/time {date:?} {time:?}: expected MM/DD/YYYY HH:MM:SS")]
    InvalidDateTime { date: String, time: String },

    /// Header timestamp is later than the processing instant.
    #[error("Receipt timestamp {timestamp} is in the future (now: {now})")]
    FutureDateTime {
        timestamp: NaiveDateTime,
        now: NaiveDateTime,
    },

    /// Item line does not have exactly three tokens.
    #[error("Malformed line: expected 3 tokens `<name> <quantity> P<price>`, found {tokens}")]
    MalformedLine { tokens: usize },

    /// Price token is missing its prefix or is not a non-negative number.
    #[error("Invalid price {token:?}")]
    InvalidPrice { token: String },

    /// No unit-suffix rule produced a number from the quantity token.
    #[error("Invalid quantity format {token:?}")]
    InvalidQuantityFormat { token: String },
}

impl ParseError {
    /// Returns `true` for header-level errors, which abort the whole run.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::ParseError;
    ///
    /// let err = ParseError::MalformedLine { tokens: 1 };
    /// assert!(!err.is_fatal());
    /// ```
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParseError::MalformedHeader { .. }
                | ParseError::InvalidRecordId { .. }
                | ParseError::InvalidDateTime { .. }
                | ParseError::FutureDateTime { .. }
        )
    }
}

// =============================================================================
// Report Error
// =============================================================================

/// Failures while rendering a report to text.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing into the output buffer failed.
    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),

    /// JSON encoding failed.
    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A recoverable problem tied to one input line.
///
/// `line` is the raw text exactly as read, so a reader can grep the input
/// for it; `line_number` is 1-based and counts the header as line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

impl Diagnostic {
    pub fn new(line_number: usize, line: impl Into<String>, error: ParseError) -> Self {
        Diagnostic {
            line_number,
            line: line.into(),
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} in {:?}", self.line_number, self.error, self.line)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ParseError.
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

// =============================================================================
// Unit Tests
// =============================================================================
