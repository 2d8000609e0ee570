//! # receipt-core: Pure Receipt Logic
//!
//! This crate is the **heart** of the receipt report tool. It turns a
//! receipt record that is already in memory into a sorted, totalled report,
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Report Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-cli (binary)                         │   │
//! │  │   flags + config ──► read INPUT.TXT ──► ... ──► write OUTPUT.TXT │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &str in, String out                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ receipt-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │   │
//! │  │   │  header  │  │ line_item │  │  receipt  │  │  report   │    │   │
//! │  │   │ RecordId │  │ quantity  │  │ sort, sum │  │ text/json │    │   │
//! │  │   └──────────┘  └───────────┘  └───────────┘  └───────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO CLOCK • NO SUBSCRIBER • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Decimal money, rounded only for display
//! - [`quantity`] - Unit-suffix stripping (`2kg` → 2)
//! - [`header`] - First-line parsing and validation
//! - [`line_item`] - Item-line parsing
//! - [`receipt`] - The item collection: stable sort and totals
//! - [`parser`] - Whole-document driver with diagnostics
//! - [`report`] - Text / JSON rendering
//! - [`validation`] - Shared token checks
//! - [`error`] - Error and diagnostic types
//! - [`types`] - Pipeline option enums
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use receipt_core::{ReceiptParser, ReportFormatter};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let input = "123456789012 01/15/2024 14:30:00\nMilk 500mL P0.10\nRice 2kg P50.00\n";
//!
//! let mut receipt = ReceiptParser::default().parse(input, now).unwrap().receipt;
//! receipt.sort_by_total_desc();
//!
//! let report = ReportFormatter::default().render(&receipt).unwrap();
//! assert!(report.starts_with("123456789012 15/01/2024 2:30:00 PM\nRice 2kg"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod header;
pub mod line_item;
pub mod money;
pub mod parser;
pub mod quantity;
pub mod receipt;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{Diagnostic, ParseError, ParseResult, ReportError, ReportResult};
pub use header::{ReceiptHeader, RecordId};
pub use line_item::LineItem;
pub use money::Money;
pub use parser::{ParseOutcome, ReceiptParser};
pub use receipt::{Receipt, ReceiptSummary, SortState};
pub use report::ReportFormatter;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol in front of every price, in the input and the report.
pub const CURRENCY_PREFIX: char = 'P';

/// Exact length of a receipt record id.
pub const RECORD_ID_LEN: usize = 12;
