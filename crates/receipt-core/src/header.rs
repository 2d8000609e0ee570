//! # Header Module
//!
//! Parses and validates the first line of a receipt record:
//!
//! ```text
//! 123456789012 01/15/2024 14:30:00
//! ──────┬───── ────┬───── ───┬────
//!   record_id   MM/DD/YYYY  HH:MM:SS
//! ```
//!
//! A receipt without a valid header cannot be processed, so every error
//! raised here is fatal for the run.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::validation::is_valid_record_id;

/// Input date layout (`01/15/2024`).
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";
/// Input time layout (`14:30:00`).
pub const INPUT_TIME_FORMAT: &str = "%H:%M:%S";
/// Report date layout (`15/01/2024`).
pub const OUTPUT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Report time layout (`2:30:00 PM`): 12-hour clock, unpadded hour.
pub const OUTPUT_TIME_FORMAT: &str = "%-I:%M:%S %p";

// =============================================================================
// Record Id
// =============================================================================

/// A validated receipt record id: 12 characters of digits and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Validates and wraps a record id token.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::header::RecordId;
    ///
    /// assert!(RecordId::parse("123456789012").is_ok());
    /// assert!(RecordId::parse("12345678901").is_err());
    /// ```
    pub fn parse(token: &str) -> ParseResult<Self> {
        if !is_valid_record_id(token) {
            return Err(ParseError::InvalidRecordId {
                record_id: token.to_string(),
            });
        }
        Ok(RecordId(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Receipt Header
// =============================================================================

/// The validated first line of a receipt.
///
/// ## Invariants
/// - `record_id` is exactly 12 digits/hyphens
/// - `date` + `time` is not after the instant the header was parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptHeader {
    pub record_id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ReceiptHeader {
    /// Parses a header line, checking the timestamp against `now`.
    ///
    /// `now` is the processing instant in the same (local) clock as the
    /// receipt. A timestamp equal to `now` is accepted; one strictly after it
    /// is rejected. Tokens after the third are ignored.
    ///
    /// ## Validation Order
    /// ```text
    /// tokens < 3? ──────────────► MalformedHeader
    ///      │
    /// record id 12 × [0-9-]? ───► InvalidRecordId
    ///      │
    /// MM/DD/YYYY HH:MM:SS? ─────► InvalidDateTime
    ///      │
    /// timestamp > now? ─────────► FutureDateTime
    ///      │
    ///      ▼
    ///   Ok(header)
    /// ```
    pub fn parse(line: &str, now: NaiveDateTime) -> ParseResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[record_id, date, time, ..] = tokens.as_slice() else {
            return Err(ParseError::MalformedHeader {
                found: line.to_string(),
            });
        };

        let record_id = RecordId::parse(record_id)?;

        let invalid = || ParseError::InvalidDateTime {
            date: date.to_string(),
            time: time.to_string(),
        };
        let date = NaiveDate::parse_from_str(date, INPUT_DATE_FORMAT).map_err(|_| invalid())?;
        let time = NaiveTime::parse_from_str(time, INPUT_TIME_FORMAT)
            .ok()
            // chrono reads `:60` as a leap second
            .filter(|time| time.nanosecond() < 1_000_000_000)
            .ok_or_else(invalid)?;

        let timestamp = date.and_time(time);
        if timestamp > now {
            return Err(ParseError::FutureDateTime { timestamp, now });
        }

        debug!(record_id = %record_id, %timestamp, "Parsed receipt header");

        Ok(ReceiptHeader {
            record_id,
            date,
            time,
        })
    }

    /// Combined date and time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Date in report form, `DD/MM/YYYY`.
    pub fn display_date(&self) -> String {
        self.date.format(OUTPUT_DATE_FORMAT).to_string()
    }

    /// Time in report form, `h:mm:ss AM|PM` (midnight is `12:00:00 AM`).
    pub fn display_time(&self) -> String {
        self.time.format(OUTPUT_TIME_FORMAT).to_string()
    }
}

impl fmt::Display for ReceiptHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.record_id,
            self.display_date(),
            self.display_time()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn parse(line: &str) -> ParseResult<ReceiptHeader> {
        ReceiptHeader::parse(line, now())
    }

    #[test]
    fn test_parse_valid_header() {
        let header = parse("123456789012 01/15/2024 14:30:00").unwrap();
        assert_eq!(header.record_id.as_str(), "123456789012");
        assert_eq!(header.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(header.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn test_display_reformats_date_and_time() {
        let header = parse("123456789012 01/15/2024 14:30:00").unwrap();
        assert_eq!(header.to_string(), "123456789012 15/01/2024 2:30:00 PM");
    }

    #[test]
    fn test_display_time_edges() {
        let cases = [
            ("00:00:00", "12:00:00 AM"),
            ("00:05:09", "12:05:09 AM"),
            ("09:07:03", "9:07:03 AM"),
            ("11:59:59", "11:59:59 AM"),
            ("12:00:00", "12:00:00 PM"),
            ("13:01:02", "1:01:02 PM"),
            ("23:59:59", "11:59:59 PM"),
        ];
        for (input, expected) in cases {
            let header = parse(&format!("123456789012 01/15/2024 {input}")).unwrap();
            assert_eq!(header.display_time(), expected, "input {input}");
        }
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert!(parse("123456789012 01/15/2024 14:30:00 extra").is_ok());
    }

    #[test]
    fn test_malformed_header() {
        for line in ["", "   ", "123456789012", "123456789012 01/15/2024"] {
            assert!(
                matches!(parse(line), Err(ParseError::MalformedHeader { .. })),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn test_invalid_record_id() {
        let err = parse("12345678901 01/15/2024 14:30:00").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidRecordId {
                record_id: "12345678901".to_string()
            }
        );
        assert!(parse("12345678901X 01/15/2024 14:30:00").is_err());
        assert!(parse("1234-5678-90 01/15/2024 14:30:00").is_ok());
    }

    #[test]
    fn test_record_id_checked_before_date() {
        let err = parse("short 99/99/9999 14:30:00").unwrap_err();
        assert!(matches!(err, ParseError::InvalidRecordId { .. }));
    }

    #[test]
    fn test_invalid_date_time() {
        for line in [
            "123456789012 02/30/2024 14:30:00", // no Feb 30th
            "123456789012 13/01/2024 14:30:00", // month 13
            "123456789012 2024-01-15 14:30:00", // wrong separators
            "123456789012 01/15/2024 25:00:00", // hour 25
            "123456789012 01/15/2024 14:30:60", // leap second
            "123456789012 01/15/2024 14.30.00",
            "123456789012 01/15/2024 2:30PM",
        ] {
            assert!(
                matches!(parse(line), Err(ParseError::InvalidDateTime { .. })),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert!(parse("123456789012 02/29/2024 08:00:00").is_ok());
        assert!(parse("123456789012 02/29/2023 08:00:00").is_err());
    }

    #[test]
    fn test_future_date_time() {
        let err = parse("123456789012 06/01/2024 12:00:01").unwrap_err();
        assert!(matches!(err, ParseError::FutureDateTime { .. }));
        assert!(err.is_fatal());

        assert!(parse("123456789012 12/31/2030 00:00:00").is_err());
    }

    #[test]
    fn test_exactly_now_is_accepted() {
        let header = parse("123456789012 06/01/2024 12:00:00").unwrap();
        assert_eq!(header.timestamp(), now());
    }
}
