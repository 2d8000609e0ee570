//! # Document Parser
//!
//! Drives the whole pipeline over an in-memory receipt record.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw text                                                               │
//! │     │                                                                   │
//! │     ├── line 1 ──► ReceiptHeader::parse ──► Err? ABORT (fatal)          │
//! │     │                                                                   │
//! │     └── line 2..n                                                       │
//! │           │                                                             │
//! │           └── LineItem::parse_line                                      │
//! │                 ├── Ok ──────────────────► Receipt::push                │
//! │                 │     └── bad quantity? ─► + Diagnostic (lenient)       │
//! │                 └── Err ─────────────────► Diagnostic, line skipped     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::error::{Diagnostic, ParseResult};
use crate::header::ReceiptHeader;
use crate::line_item::LineItem;
use crate::receipt::Receipt;
use crate::types::QuantityPolicy;

/// A parsed receipt plus every recoverable problem met along the way.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub receipt: Receipt,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses receipt records with a fixed quantity policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptParser {
    policy: QuantityPolicy,
}

impl ReceiptParser {
    pub fn new(policy: QuantityPolicy) -> Self {
        ReceiptParser { policy }
    }

    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// Parses a whole document.
    ///
    /// `now` is the processing instant used for the future-timestamp check.
    ///
    /// ## Errors
    /// Only header failures are returned as `Err`; every line-level problem
    /// ends up in [`ParseOutcome::diagnostics`] and is logged at `warn`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use receipt_core::ReceiptParser;
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let input = "123456789012 01/15/2024 14:30:00\nRice 2kg P50.00\nBadItem\n";
    ///
    /// let outcome = ReceiptParser::default().parse(input, now).unwrap();
    /// assert_eq!(outcome.receipt.len(), 1);
    /// assert_eq!(outcome.diagnostics.len(), 1);
    /// ```
    pub fn parse(&self, input: &str, now: NaiveDateTime) -> ParseResult<ParseOutcome> {
        let mut lines = input.lines();
        let header = ReceiptHeader::parse(lines.next().unwrap_or_default(), now)?;

        let mut receipt = Receipt::new(header);
        let mut diagnostics = Vec::new();
        let mut skipped = 0usize;

        // Header is line 1
        for (line_number, line) in (2..).zip(lines) {
            match LineItem::parse_line(line, self.policy) {
                Ok(parsed) => {
                    if let Some(error) = parsed.quantity_error {
                        let diagnostic = Diagnostic::new(line_number, line, error);
                        warn!(line_number, line, "{}; item kept at P0.00", diagnostic.error);
                        diagnostics.push(diagnostic);
                    }
                    debug!(line_number, name = parsed.item.name(), "Parsed line item");
                    receipt.push(parsed.item);
                }
                Err(error) => {
                    debug_assert!(!error.is_fatal(), "item lines never abort the run");
                    warn!(line_number, line, "{error}; line skipped");
                    skipped += 1;
                    diagnostics.push(Diagnostic::new(line_number, line, error));
                }
            }
        }

        info!(
            record_id = %receipt.header().record_id,
            items = receipt.len(),
            skipped,
            diagnostics = diagnostics.len(),
            "Parsed receipt"
        );

        Ok(ParseOutcome {
            receipt,
            diagnostics,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use chrono::NaiveDate;

    const HEADER: &str = "123456789012 01/15/2024 14:30:00";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn parse(input: &str) -> ParseResult<ParseOutcome> {
        ReceiptParser::default().parse(input, now())
    }

    #[test]
    fn test_parse_document() {
        let input = format!("{HEADER}\nRice 2kg P50.00\nMilk 500mL P0.10\n");
        let outcome = parse(&input).unwrap();

        assert_eq!(outcome.receipt.header().record_id.as_str(), "123456789012");
        assert_eq!(outcome.receipt.len(), 2);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.receipt.items()[0].name(), "Rice");
    }

    #[test]
    fn test_empty_document_is_malformed_header() {
        assert!(matches!(parse(""), Err(ParseError::MalformedHeader { .. })));
    }

    #[test]
    fn test_header_errors_abort() {
        let input = "12345678901 01/15/2024 14:30:00\nRice 2kg P50.00\n";
        assert!(matches!(parse(input), Err(ParseError::InvalidRecordId { .. })));
    }

    #[test]
    fn test_header_only() {
        let outcome = parse(HEADER).unwrap();
        assert!(outcome.receipt.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped_with_diagnostics() {
        let input = format!(
            "{HEADER}\nBadItem\nRice 2kg P50.00\nRice 2kg 50.00\nBrown Rice 2kg P50.00\nSalt 1 P5.00\n"
        );
        let outcome = parse(&input).unwrap();

        let names: Vec<&str> = outcome.receipt.items().iter().map(LineItem::name).collect();
        assert_eq!(names, ["Rice", "Salt"]);

        let lines: Vec<(usize, &str)> = outcome
            .diagnostics
            .iter()
            .map(|d| (d.line_number, d.line.as_str()))
            .collect();
        assert_eq!(
            lines,
            [
                (2, "BadItem"),
                (4, "Rice 2kg 50.00"),
                (5, "Brown Rice 2kg P50.00"),
            ]
        );
        assert_eq!(outcome.diagnostics[0].error, ParseError::MalformedLine { tokens: 1 });
        assert!(matches!(outcome.diagnostics[1].error, ParseError::InvalidPrice { .. }));
    }

    #[test]
    fn test_blank_lines_are_malformed() {
        let input = format!("{HEADER}\n   \nRice 2kg P50.00\n\nSalt 1 P5.00\n");
        let outcome = parse(&input).unwrap();
        assert_eq!(outcome.receipt.len(), 2);

        let lines: Vec<(usize, &str)> = outcome
            .diagnostics
            .iter()
            .map(|d| (d.line_number, d.line.as_str()))
            .collect();
        assert_eq!(lines, [(2, "   "), (4, "")]);
        for diagnostic in &outcome.diagnostics {
            assert_eq!(diagnostic.error, ParseError::MalformedLine { tokens: 0 });
        }
    }

    #[test]
    fn test_trailing_newline_is_not_a_line() {
        let input = format!("{HEADER}\nRice 2kg P50.00\n");
        let outcome = parse(&input).unwrap();
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let input = format!("{HEADER}\n\nBadItem\n");
        let outcome = parse(&input).unwrap();
        assert_eq!(outcome.diagnostics.len(), 2);
        assert_eq!(outcome.diagnostics[1].line_number, 3);
        assert_eq!(outcome.diagnostics[1].line, "BadItem");
    }

    #[test]
    fn test_crlf_input() {
        let input = format!("{HEADER}\r\nRice 2kg P50.00\r\n");
        let outcome = parse(&input).unwrap();
        assert_eq!(outcome.receipt.len(), 1);
        assert_eq!(outcome.receipt.items()[0].unit_price().to_string(), "P50.00");
    }

    #[test]
    fn test_lenient_policy_keeps_item_with_diagnostic() {
        let input = format!("{HEADER}\nRice lots P50.00\n");
        let outcome = parse(&input).unwrap();
        assert_eq!(outcome.receipt.len(), 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line, "Rice lots P50.00");
        assert!(matches!(
            outcome.diagnostics[0].error,
            ParseError::InvalidQuantityFormat { .. }
        ));
    }

    #[test]
    fn test_strict_policy_drops_item() {
        let input = format!("{HEADER}\nRice lots P50.00\nSalt 1 P5.00\n");
        let outcome = ReceiptParser::new(QuantityPolicy::Strict)
            .parse(&input, now())
            .unwrap();
        assert_eq!(outcome.receipt.len(), 1);
        assert_eq!(outcome.receipt.items()[0].name(), "Salt");
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn test_item_count_never_exceeds_input_lines() {
        let body = ["A 1 P1.00", "B", "C 2 P2.00 x", "D 3 P3.00", "E q P1.00", "F 1 1.00"];
        let input = format!("{HEADER}\n{}\n", body.join("\n"));
        let outcome = parse(&input).unwrap();
        assert!(outcome.receipt.len() <= body.len());
        assert_eq!(outcome.receipt.len(), 3);
    }
}
