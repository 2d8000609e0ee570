//! # Quantity Module
//!
//! Turns a quantity token such as `2kg`, `500mL` or `3` into its numeric
//! magnitude. Units are stripped, never converted: `500mL` is 500, not 0.5.
//!
//! ## Suffix Table
//! ```text
//! ┌──────────┬────────┬────────────────────────────────────────────────────┐
//! │ Priority │ Suffix │ Example                                            │
//! ├──────────┼────────┼────────────────────────────────────────────────────┤
//! │    1     │  kg    │ "2kg"    → 2                                       │
//! │    2     │  mL    │ "500mL"  → 500                                     │
//! │    3     │  g     │ "250g"   → 250                                     │
//! │    4     │  L     │ "1.5L"   → 1.5                                     │
//! │    5     │ (none) │ "3"      → 3                                       │
//! └──────────┴────────┴────────────────────────────────────────────────────┘
//! ```
//!
//! Two-character suffixes go first so that `2kg` is never read as `2k` + `g`.
//! `L` stays a one-character rule even though `mL` ends with it; the table is
//! deliberately asymmetric and matching is case-sensitive.

use rust_decimal::Decimal;

use crate::error::{ParseError, ParseResult};
use crate::validation::parse_numeric_literal;

/// Unit suffixes in the order they are tried.
pub const UNIT_SUFFIXES: [&str; 4] = ["kg", "mL", "g", "L"];

/// Parses a quantity token into its magnitude.
///
/// Every suffix the token ends with is tried in priority order, then the bare
/// token; the first rule whose leftover prefix is a plain numeric literal
/// wins.
///
/// ## Errors
/// [`ParseError::InvalidQuantityFormat`] if no rule yields a number.
///
/// ## Example
/// ```rust
/// use receipt_core::quantity::parse_magnitude;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_magnitude("2kg").unwrap(), Decimal::from(2));
/// assert_eq!(parse_magnitude("500mL").unwrap(), Decimal::from(500));
/// assert!(parse_magnitude("kg").is_err());
/// ```
pub fn parse_magnitude(token: &str) -> ParseResult<Decimal> {
    UNIT_SUFFIXES
        .iter()
        .filter_map(|suffix| token.strip_suffix(suffix))
        .chain(std::iter::once(token))
        .find_map(parse_numeric_literal)
        .ok_or_else(|| ParseError::InvalidQuantityFormat {
            token: token.to_string(),
        })
}

/// Truncates a magnitude toward zero for the item count.
///
/// `2.9kg` counts as 2 items; magnitudes beyond `i64` saturate.
pub fn whole_units(magnitude: Decimal) -> i64 {
    use rust_decimal::prelude::ToPrimitive;

    magnitude.trunc().to_i64().unwrap_or(i64::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_each_suffix() {
        assert_eq!(parse_magnitude("2kg").unwrap(), dec("2"));
        assert_eq!(parse_magnitude("500mL").unwrap(), dec("500"));
        assert_eq!(parse_magnitude("250g").unwrap(), dec("250"));
        assert_eq!(parse_magnitude("1.5L").unwrap(), dec("1.5"));
        assert_eq!(parse_magnitude("3").unwrap(), dec("3"));
        assert_eq!(parse_magnitude("0.75").unwrap(), dec("0.75"));
    }

    #[test]
    fn test_two_char_suffix_wins() {
        // "kg" strips to "2"; a naive "g" rule would leave "2k"
        assert_eq!(parse_magnitude("2kg").unwrap(), dec("2"));
        // "mL" strips to "5"; the "L" rule would leave "5m"
        assert_eq!(parse_magnitude("5mL").unwrap(), dec("5"));
    }

    #[test]
    fn test_suffix_matching_is_case_sensitive() {
        assert!(parse_magnitude("2KG").is_err());
        assert!(parse_magnitude("500ml").is_err());
        assert!(parse_magnitude("500ML").is_err());
        assert!(parse_magnitude("1l").is_err());
    }

    #[test]
    fn test_unparseable_tokens() {
        for token in ["", "kg", "g", "abc", "2x", "2 kg", "-2kg", "2kgg", "1e3", "2pcs"] {
            let err = parse_magnitude(token).unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidQuantityFormat {
                    token: token.to_string()
                },
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_whole_units_truncates() {
        assert_eq!(whole_units(dec("2")), 2);
        assert_eq!(whole_units(dec("2.9")), 2);
        assert_eq!(whole_units(dec("0.5")), 0);
        assert_eq!(whole_units(dec("500")), 500);
    }
}
