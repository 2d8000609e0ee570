//! # Validation Module
//!
//! Token-level checks shared by the header, line-item and quantity parsers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Token shape (THIS MODULE)                                    │
//! │  ├── Is this a plain numeric literal?                                  │
//! │  └── Is this a well-formed record id?                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Field parsers (header, line_item, quantity)                  │
//! │  ├── Map a failed check onto a ParseError variant                      │
//! │  └── Attach the token / line context                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Document parser                                              │
//! │  └── Fatal (header) vs recoverable (line) handling                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::RECORD_ID_LEN;

// =============================================================================
// Numeric Literals
// =============================================================================

/// Returns `true` if `s` is a plain, unsigned decimal literal.
///
/// ## Rules
/// - Only ASCII digits and at most one `.`
/// - At least one digit
/// - No sign, exponent, underscore, or whitespace
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_numeric_literal;
///
/// assert!(is_numeric_literal("2"));
/// assert!(is_numeric_literal("0.75"));
/// assert!(!is_numeric_literal("1e3"));
/// assert!(!is_numeric_literal("-2"));
/// ```
pub fn is_numeric_literal(s: &str) -> bool {
    let mut seen_dot = false;
    let mut seen_digit = false;

    for c in s.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }

    seen_digit
}

/// Parses a plain, unsigned decimal literal into an exact [`Decimal`].
///
/// Returns `None` if the literal is not plain (see [`is_numeric_literal`]) or
/// does not fit in a `Decimal`. A bare leading or trailing point is accepted
/// (`.5`, `5.`).
pub fn parse_numeric_literal(s: &str) -> Option<Decimal> {
    if !is_numeric_literal(s) {
        return None;
    }

    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    let normalized = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    Decimal::from_str(&normalized).ok()
}

// =============================================================================
// Record Id
// =============================================================================

/// Returns `true` if `id` is a valid receipt record id.
///
/// ## Rules
/// - Exactly [`RECORD_ID_LEN`] (12) characters
/// - Only ASCII digits and hyphens
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_valid_record_id;
///
/// assert!(is_valid_record_id("123456789012"));
/// assert!(is_valid_record_id("1234-5678-90"));
/// assert!(!is_valid_record_id("12345678901"));
/// ```
pub fn is_valid_record_id(id: &str) -> bool {
    id.len() == RECORD_ID_LEN && id.chars().all(|c| c.is_ascii_digit() || c == '-')
}

// =============================================================================
// Unit Tests
// =============================================================================
