//! # Line Item Module
//!
//! Parses one data line (`Rice 2kg P50.00`) into a [`LineItem`].
//!
//! ## Line Outcomes
//! ```text
//! ┌──────────────────────────┬────────────────────────────────────────────┐
//! │ Input                    │ Outcome                                    │
//! ├──────────────────────────┼────────────────────────────────────────────┤
//! │ Rice 2kg P50.00          │ Item, total P100.00                        │
//! │ BadItem                  │ MalformedLine (skipped)                    │
//! │ Rice 2kg P50.00 extra    │ MalformedLine (skipped, extra column)      │
//! │ Rice 2kg 50.00           │ InvalidPrice (skipped)                     │
//! │ Rice lots P50.00         │ Lenient: item at P0.00 + diagnostic        │
//! │                          │ Strict:  InvalidQuantityFormat (skipped)   │
//! └──────────────────────────┴────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ParseError, ParseResult};
use crate::money::Money;
use crate::quantity::{parse_magnitude, whole_units};
use crate::types::QuantityPolicy;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry on a receipt.
///
/// ## Design Notes
/// - `quantity` keeps the token exactly as written (`2kg`) for the report
/// - `magnitude` is the parsed number, `None` if the token was unreadable
/// - There is no total field: [`LineItem::total_price`] always derives it
///   from `magnitude × unit_price`, so the two can never disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    quantity: String,
    unit_price: Money,
    magnitude: Option<Decimal>,
}

/// Result of parsing a single line.
///
/// A lenient parse can succeed while still carrying a quantity error; the
/// caller turns that into a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub item: LineItem,
    pub quantity_error: Option<ParseError>,
}

impl LineItem {
    /// Builds an item, parsing the quantity token for its magnitude.
    ///
    /// Never fails: an unreadable quantity leaves `magnitude` empty, which
    /// totals to zero. A magnitude whose total would not fit in a `Decimal`
    /// counts as unreadable. Use [`LineItem::parse_line`] for policy handling.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit_price: Money) -> Self {
        let quantity = quantity.into();
        let magnitude = parse_magnitude(&quantity)
            .ok()
            .filter(|magnitude| unit_price.amount().checked_mul(*magnitude).is_some());
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
            magnitude,
        }
    }

    /// Parses a non-header line.
    ///
    /// ## Errors
    /// - [`ParseError::MalformedLine`] unless there are exactly 3 tokens
    /// - [`ParseError::InvalidPrice`] if the last token is not `P<number>`
    /// - [`ParseError::InvalidQuantityFormat`] under [`QuantityPolicy::Strict`]
    ///   when the quantity token cannot be read
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::line_item::LineItem;
    /// use receipt_core::QuantityPolicy;
    ///
    /// let parsed = LineItem::parse_line("Rice 2kg P50.00", QuantityPolicy::Lenient).unwrap();
    /// assert_eq!(parsed.item.total_price().to_string(), "P100.00");
    /// ```
    pub fn parse_line(line: &str, policy: QuantityPolicy) -> ParseResult<ParsedLine> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[name, quantity, price] = tokens.as_slice() else {
            return Err(ParseError::MalformedLine {
                tokens: tokens.len(),
            });
        };

        let unit_price = Money::parse_prefixed(price).ok_or_else(|| ParseError::InvalidPrice {
            token: price.to_string(),
        })?;

        let item = LineItem::new(name, quantity, unit_price);
        let quantity_error = item.quantity_error();

        match (policy, quantity_error) {
            (QuantityPolicy::Strict, Some(err)) => Err(err),
            (_, quantity_error) => Ok(ParsedLine {
                item,
                quantity_error,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The quantity token as written, unit suffix included.
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// The quantity without its unit, if it could be read.
    pub fn magnitude(&self) -> Option<Decimal> {
        self.magnitude
    }

    /// `magnitude × unit_price`, or zero if the quantity was unreadable.
    pub fn total_price(&self) -> Money {
        self.magnitude
            .map(|magnitude| self.unit_price.multiply_magnitude(magnitude))
            .unwrap_or_default()
    }

    /// Contribution to the receipt's item count: magnitude truncated toward
    /// zero, or 0 if the quantity was unreadable.
    pub fn whole_units(&self) -> i64 {
        self.magnitude.map(whole_units).unwrap_or(0)
    }

    /// The quantity parse error, if any.
    pub fn quantity_error(&self) -> Option<ParseError> {
        match self.magnitude {
            Some(_) => None,
            None => Some(ParseError::InvalidQuantityFormat {
                token: self.quantity.clone(),
            }),
        }
    }
}

// =============================================================================
// Serialized View
// =============================================================================

/// JSON shape of an item; money values are rendered to two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct LineItemView<'a> {
    pub name: &'a str,
    pub quantity: &'a str,
    pub unit_price: String,
    pub total_price: String,
}

impl<'a> From<&'a LineItem> for LineItemView<'a> {
    fn from(item: &'a LineItem) -> Self {
        LineItemView {
            name: &item.name,
            quantity: &item.quantity,
            unit_price: item.unit_price.rounded().to_string(),
            total_price: item.total_price().rounded().to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
