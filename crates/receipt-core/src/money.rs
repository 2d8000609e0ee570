//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 × 500 = 50.00000000000001  ❌ WRONG!                             │
//! │                                                                         │
//! │  Integer cents do not work either, because quantities are fractional:  │
//! │    1.5kg × P33.33 = P49.995 (half a cent!)                              │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 decimals, rounded ONLY at display               │
//! │    Totals accumulate exactly; the report rounds once, at the end.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::parse_prefixed("P12.50").unwrap();
//! let total = price.multiply_magnitude(Decimal::from(2));
//! assert_eq!(total.to_string(), "P25.00");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::validation::parse_numeric_literal;
use crate::CURRENCY_PREFIX;

/// Number of decimal places shown in the report.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the receipt's single currency.
///
/// ## Design Decisions
/// - **Decimal, not f64**: `0.10 × 500` must be exactly `50`
/// - **No rounding on arithmetic**: the grand total is the exact sum of the
///   exact line totals; rounding happens in `Display` only
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
///
/// ## Where Money is Used
/// ```text
/// "P50.00" ──► LineItem.unit_price ──► × magnitude ──► LineItem.total_price
///                                                            │
///                                  ReceiptSummary.grand_total ◄┘ (Σ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the exact (unrounded) amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parses a currency-prefixed price token such as `P12.50`.
    ///
    /// ## Rules
    /// - The first character must be [`CURRENCY_PREFIX`]
    /// - The rest must be a plain non-negative numeric literal
    ///   (`12`, `12.5`, `.5`); signs, exponents and separators are rejected
    ///
    /// Returns `None` when either rule fails; callers attach the line context.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::parse_prefixed("P12.50").is_some());
    /// assert!(Money::parse_prefixed("12.50").is_none());
    /// assert!(Money::parse_prefixed("P-1").is_none());
    /// ```
    pub fn parse_prefixed(token: &str) -> Option<Self> {
        let digits = token.strip_prefix(CURRENCY_PREFIX)?;
        parse_numeric_literal(digits).map(Money)
    }

    /// Multiplies a unit price by a quantity magnitude.
    ///
    /// The product is kept exact. Panics on `Decimal` overflow, so callers
    /// holding untrusted magnitudes check with `checked_mul` first (see
    /// `LineItem::new`).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let unit_price = Money::parse_prefixed("P0.10").unwrap();
    /// let total = unit_price.multiply_magnitude(Decimal::from(500));
    /// assert_eq!(total.amount(), Decimal::from(50));
    /// ```
    #[inline]
    pub fn multiply_magnitude(&self, magnitude: Decimal) -> Self {
        Money(self.0 * magnitude)
    }

    /// Returns the amount rounded to [`DISPLAY_DECIMALS`] places.
    ///
    /// ## Bankers Rounding
    /// Midpoints round to the nearest even digit (`0.125 → 0.12`,
    /// `0.135 → 0.14`), so half-cent totals do not drift upwards in aggregate.
    /// The scale is always exactly two, so `100` renders as `100.00`.
    pub fn rounded(&self) -> Decimal {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointNearestEven);
        value.rescale(DISPLAY_DECIMALS);
        value
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the report form: prefix plus exactly two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_PREFIX, self.rounded())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values, saturating at `Decimal::MAX`.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
