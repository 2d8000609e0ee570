//! # Report Module
//!
//! Renders a [`Receipt`] into the output document.
//!
//! ## Text Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ 123456789012 15/01/2024 2:30:00 PM      ◄── id, DD/MM/YYYY, h:mm:ss AM/PM│
//! │ Rice 2kg P50.00 P100.00                 ◄── name qty unit total         │
//! │ Milk 500mL P0.10 P50.00                                                 │
//! │ Total: P150.00                          ◄── SummaryLayout::Labeled      │
//! │ 502 items                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With [`SummaryLayout::Legacy`] the last two lines collapse into
//! `P150.00502 items` with no trailing newline, which is what older
//! consumers of the output file expect byte-for-byte.
//!
//! Items are written in the receipt's current order; sort first.

use std::fmt::Write;

use serde::Serialize;

use crate::error::ReportResult;
use crate::line_item::LineItemView;
use crate::receipt::{Receipt, ReceiptSummary, ReceiptSummaryView};
use crate::types::{OutputFormat, SummaryLayout};

/// Label in front of the grand total in the labeled layout.
pub const TOTAL_LABEL: &str = "Total:";
/// Unit word after the item count.
pub const ITEMS_LABEL: &str = "items";

/// Turns receipts into report text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFormatter {
    pub format: OutputFormat,
    pub layout: SummaryLayout,
}

#[derive(Serialize)]
struct HeaderView<'a> {
    record_id: &'a str,
    date: String,
    time: String,
}

#[derive(Serialize)]
struct ReportView<'a> {
    header: HeaderView<'a>,
    items: Vec<LineItemView<'a>>,
    summary: ReceiptSummaryView,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat, layout: SummaryLayout) -> Self {
        ReportFormatter { format, layout }
    }

    /// Renders the receipt in the configured format.
    pub fn render(&self, receipt: &Receipt) -> ReportResult<String> {
        match self.format {
            OutputFormat::Text => self.render_text(receipt),
            OutputFormat::Json => self.render_json(receipt),
        }
    }

    /// Renders the plain-text report.
    pub fn render_text(&self, receipt: &Receipt) -> ReportResult<String> {
        let mut out = String::new();

        writeln!(out, "{}", receipt.header())?;

        for item in receipt.items() {
            writeln!(
                out,
                "{} {} {} {}",
                item.name(),
                item.quantity(),
                item.unit_price(),
                item.total_price()
            )?;
        }

        self.write_summary(&mut out, &receipt.summary())?;
        Ok(out)
    }

    fn write_summary(&self, out: &mut String, summary: &ReceiptSummary) -> std::fmt::Result {
        match self.layout {
            SummaryLayout::Labeled => {
                writeln!(out, "{TOTAL_LABEL} {}", summary.grand_total)?;
                writeln!(out, "{} {ITEMS_LABEL}", summary.item_count)
            }
            SummaryLayout::Legacy => {
                write!(out, "{}{} {ITEMS_LABEL}", summary.grand_total, summary.item_count)
            }
        }
    }

    /// Renders the report as pretty-printed JSON (the layout is ignored).
    pub fn render_json(&self, receipt: &Receipt) -> ReportResult<String> {
        let header = receipt.header();
        let view = ReportView {
            header: HeaderView {
                record_id: header.record_id.as_str(),
                date: header.display_date(),
                time: header.display_time(),
            },
            items: receipt.items().iter().map(LineItemView::from).collect(),
            summary: ReceiptSummaryView::from(&receipt.summary()),
        };

        let mut out = serde_json::to_string_pretty(&view)?;
        out.push('\n');
        Ok(out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
