//! # Receipt Module
//!
//! The [`Receipt`] owns a validated header and the ordered line items.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────┐   parse    ┌─────────────┐   sort    ┌─────────────┐
//! │   (empty)   │ ─────────► │  Unsorted   │ ────────► │   Sorted    │
//! └─────────────┘            └─────────────┘           └──────┬──────┘
//!                                                             │ sort (no-op)
//!                                                             └──────┐
//!                                                                    ▼
//!                                                              format / summary
//! ```
//!
//! Items are never removed once parsed; a fresh parse builds a fresh receipt.

use serde::Serialize;
use tracing::{debug, warn};

use crate::header::ReceiptHeader;
use crate::line_item::LineItem;
use crate::money::Money;

/// Whether the items are in report order yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted,
}

/// Totals shown at the bottom of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptSummary {
    /// Exact sum of all line totals.
    pub grand_total: Money,
    /// Sum of every item's magnitude truncated toward zero.
    pub item_count: i64,
    /// Items whose quantity could not be read (counted as 0).
    pub unparsed_quantities: usize,
}

/// JSON shape of the summary.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptSummaryView {
    pub grand_total: String,
    pub item_count: i64,
}

impl From<&ReceiptSummary> for ReceiptSummaryView {
    fn from(summary: &ReceiptSummary) -> Self {
        ReceiptSummaryView {
            grand_total: summary.grand_total.rounded().to_string(),
            item_count: summary.item_count,
        }
    }
}

/// A parsed receipt: header plus items in their current order.
#[derive(Debug, Clone)]
pub struct Receipt {
    header: ReceiptHeader,
    items: Vec<LineItem>,
    state: SortState,
}

impl Receipt {
    /// Creates an empty, unsorted receipt.
    pub fn new(header: ReceiptHeader) -> Self {
        Receipt {
            header,
            items: Vec::new(),
            state: SortState::Unsorted,
        }
    }

    /// Appends an item in input order. Only the parser populates receipts.
    pub(crate) fn push(&mut self, item: LineItem) {
        debug_assert_eq!(self.state, SortState::Unsorted, "push after sort");
        self.items.push(item);
    }

    pub fn header(&self) -> &ReceiptHeader {
        &self.header
    }

    /// Items in their current order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sort_state(&self) -> SortState {
        self.state
    }

    /// Orders items by total price, highest first.
    ///
    /// ## Guarantees
    /// - Non-increasing by `total_price`
    /// - Equal totals keep their input order (`sort_by` is stable)
    /// - No item is added or lost
    /// - Sorting an already sorted receipt changes nothing
    pub fn sort_by_total_desc(&mut self) {
        if self.state == SortState::Sorted {
            debug!("Receipt already sorted");
            return;
        }

        self.items
            .sort_by(|a, b| b.total_price().cmp(&a.total_price()));
        self.state = SortState::Sorted;

        debug!(items = self.items.len(), "Sorted items by total price");
    }

    /// Computes the grand total and item count.
    ///
    /// Items whose quantity could not be read add nothing to either figure
    /// and are logged, but stay on the receipt.
    pub fn summary(&self) -> ReceiptSummary {
        let grand_total: Money = self.items.iter().map(LineItem::total_price).sum();
        let item_count = self
            .items
            .iter()
            .fold(0i64, |count, item| count.saturating_add(item.whole_units()));

        let mut unparsed_quantities = 0;
        for item in self.items.iter().filter(|item| item.magnitude().is_none()) {
            unparsed_quantities += 1;
            warn!(
                name = item.name(),
                quantity = item.quantity(),
                "Quantity unreadable, counting 0 items"
            );
        }

        ReceiptSummary {
            grand_total,
            item_count,
            unparsed_quantities,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
