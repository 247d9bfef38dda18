//! Section-aware receipt text parser.
//!
//! A receipt is scanned top to bottom, one line at a time. Specific line
//! content moves the scanner into a new section; every other line is offered
//! to the field rules of whatever section is active. The scanner never looks
//! ahead and never backtracks, so cost stays linear in the line count, and
//! it never fails: unreadable input simply leaves fields unset.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::models::receipt::{CategoryLine, ParsedSalesSummary, ReceiptKind};

use super::rules::dates::extract_receipt_date;
use super::rules::guests::{
    first_order_count, guest_count_in_line, largest_guest_count, order_count_in_line,
};
use super::rules::numbers::{NumericToken, first_decimal, numeric_tokens};
use super::rules::patterns::TABLE_BORDER;

/// Scanner state: the receipt region whose field rules currently apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserSection {
    Header,
    Summary,
    Cash,
    Credit,
    Telabat,
    EWallet,
    Category,
    Item,
}

/// Section transition triggered by a line, if any.
///
/// Rules are checked in priority order against the lowercased line; the
/// first one that fires wins, and the line is consumed as a pure transition
/// with no field extraction. Home-delivery reports have no credit, Telabat
/// or e-wallet sections, so those triggers are inert for that kind.
pub fn section_transition(kind: ReceiptKind, line: &str) -> Option<ParserSection> {
    let lower = line.trim().to_lowercase();
    let pos = kind == ReceiptKind::PointOfSale;

    if lower.contains("sales summary") && !lower.contains("category") && !lower.contains("item") {
        return Some(ParserSection::Summary);
    }
    let squeezed: String = lower.split_whitespace().collect();
    if squeezed == "cashsale" || squeezed == "cashsales" {
        return Some(ParserSection::Cash);
    }
    if pos && (lower.starts_with("cr. sales") || lower.starts_with("cr.sales")) {
        return Some(ParserSection::Credit);
    }
    if pos && lower.contains("telabat") && lower.contains("cr") {
        return Some(ParserSection::Telabat);
    }
    if pos && (lower.starts_with("ew. sales") || lower.starts_with("ewallet")) {
        return Some(ParserSection::EWallet);
    }
    if lower.contains("category sales summary") {
        return Some(ParserSection::Category);
    }
    if lower.contains("item sales summary") {
        return Some(ParserSection::Item);
    }
    None
}

/// Section-scanning parser over one receipt transcript.
pub struct SectionScanner {
    kind: ReceiptKind,
    section: ParserSection,
    summary: ParsedSalesSummary,
}

impl SectionScanner {
    pub fn new(kind: ReceiptKind) -> Self {
        Self {
            kind,
            section: ParserSection::Header,
            summary: ParsedSalesSummary::default(),
        }
    }

    /// Parse a full receipt: one linear pass over the lines, then the
    /// fallback passes for the count field and the receipt date.
    pub fn parse(kind: ReceiptKind, text: &str) -> ParsedSalesSummary {
        let mut scanner = Self::new(kind);
        for line in text.lines() {
            scanner.feed_line(line);
        }
        let mut summary = scanner.finish();

        if summary.guest_count_or_orders.is_none() {
            summary.guest_count_or_orders = match kind {
                ReceiptKind::PointOfSale => largest_guest_count(text),
                // Orders are the primary count for home delivery; the
                // guest-count vocabulary is a last resort.
                ReceiptKind::HomeDelivery => {
                    first_order_count(text).or_else(|| largest_guest_count(text))
                }
            };
        }
        if summary.receipt_date.is_none() {
            summary.receipt_date = extract_receipt_date(text);
        }

        debug!(
            fields = summary.field_count(),
            categories = summary.categories.len(),
            "receipt parsed"
        );
        summary
    }

    /// Feed one line to the state machine.
    pub fn feed_line(&mut self, line: &str) {
        if let Some(next) = section_transition(self.kind, line) {
            trace!(from = ?self.section, to = ?next, "section transition");
            self.section = next;
            return;
        }

        match self.section {
            ParserSection::Summary => self.summary_line(line),
            ParserSection::Cash => self.cash_line(line),
            ParserSection::Category | ParserSection::Item => self.breakdown_line(line),
            _ => {}
        }
    }

    /// Consume the scanner, yielding what the linear pass accumulated.
    pub fn finish(self) -> ParsedSalesSummary {
        self.summary
    }

    fn summary_line(&mut self, line: &str) {
        let lower = line.trim().to_lowercase();

        if lower.starts_with("gross sale") && self.summary.gross_sales.is_none() {
            self.summary.gross_sales = first_decimal(line);
        }
        if lower.contains("net sale") && self.summary.net_sales.is_none() {
            self.summary.net_sales = first_decimal(line);
        }

        match self.kind {
            ReceiptKind::PointOfSale => {
                // Largest wins: the real total and a smaller cash-only
                // subtotal can both appear in the summary.
                if let Some(count) = guest_count_in_line(line) {
                    if self.summary.guest_count_or_orders.map_or(true, |c| count > c) {
                        self.summary.guest_count_or_orders = Some(count);
                    }
                }
            }
            ReceiptKind::HomeDelivery => {
                if self.summary.guest_count_or_orders.is_none() {
                    self.summary.guest_count_or_orders = order_count_in_line(line);
                }
            }
        }
    }

    fn cash_line(&mut self, line: &str) {
        let lower = line.trim().to_lowercase();
        if lower.starts_with("cash sale") && self.summary.cash_sales.is_none() {
            if let Some(amount) = first_decimal(line) {
                if amount > Decimal::ZERO {
                    self.summary.cash_sales = Some(amount);
                }
            }
        }
    }

    fn breakdown_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || TABLE_BORDER.is_match(trimmed) {
            return;
        }
        if trimmed.to_lowercase().contains("description") {
            return;
        }

        let tokens = numeric_tokens(trimmed);
        if tokens.len() < 2 {
            return;
        }

        // Everything before the first digit is the row name.
        let boundary = trimmed
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let name = trimmed[..boundary]
            .trim()
            .trim_end_matches(['.', ':', '-', '|'])
            .trim_end();
        if name.is_empty() || name.eq_ignore_ascii_case("total sales") {
            return;
        }

        // Both leading numbers must convert; a row failing either is OCR
        // garbage (merged rows, stray marks) and is dropped whole.
        let (Some(quantity), Some(sales_amount)) =
            (tokens[0].as_integer(), tokens[1].as_decimal())
        else {
            trace!(row = name, "dropping breakdown row with malformed numbers");
            return;
        };
        let contribution_percent = tokens
            .get(2)
            .and_then(NumericToken::as_decimal)
            .unwrap_or(Decimal::ZERO);

        self.summary.categories.push(CategoryLine {
            name: name.to_string(),
            quantity,
            sales_amount,
            contribution_percent,
        });
    }
}
