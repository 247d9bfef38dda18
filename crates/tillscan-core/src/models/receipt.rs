//! Data models for receipt extraction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which receipt layout a transcript came from.
///
/// The text alone does not self-identify its format reliably enough to
/// trust, so the upload endpoint that received the photo tells us which
/// vocabulary applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    /// In-store point-of-sale day report.
    PointOfSale,
    /// Home-delivery channel report.
    HomeDelivery,
}

/// One row of a category or item sales breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLine {
    /// Category or item name as printed.
    pub name: String,

    /// Units sold.
    pub quantity: i64,

    /// Sales amount for the row.
    pub sales_amount: Decimal,

    /// Percentage contribution to total sales (0 when the column is absent).
    pub contribution_percent: Decimal,
}

/// Flat sales summary produced by one receipt scan.
///
/// Every field starts unset. Scalar fields keep the first value found;
/// the guest count keeps the largest (receipts print both the real total
/// and smaller per-tender subtotals).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedSalesSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_sales: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_sales: Option<Decimal>,

    /// Guest count on point-of-sale receipts, order count on home-delivery
    /// reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count_or_orders: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_sales: Option<Decimal>,

    /// Date printed on the receipt, when one could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,

    /// Category/item breakdown rows in print order.
    #[serde(default)]
    pub categories: Vec<CategoryLine>,
}

impl ParsedSalesSummary {
    /// Number of scalar sales fields that were actually read
    /// (the receipt date is informational and not counted).
    pub fn field_count(&self) -> usize {
        [
            self.gross_sales.is_some(),
            self.net_sales.is_some(),
            self.guest_count_or_orders.is_some(),
            self.cash_sales.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// True when no sales figure at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0 && self.categories.is_empty()
    }

    /// Average ticket value: net sales per guest, when both are known.
    pub fn average_ticket(&self) -> Option<Decimal> {
        match (self.net_sales, self.guest_count_or_orders) {
            (Some(net), Some(count)) if count > 0 => Some(net / Decimal::from(count)),
            _ => None,
        }
    }
}

/// Strategy that produced a branch-name candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchStrategy {
    /// Store-identity prefix at the top of the receipt.
    PrefixPattern,
    /// Line containing a known place-name fragment.
    LocationKeyword,
    /// All-uppercase header line shaped like a store name.
    UppercaseHeuristic,
}

/// Branch name as read off the receipt, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNameCandidate {
    /// Text span the strategy matched.
    pub raw_text: String,

    /// Which strategy found it.
    pub strategy: BranchStrategy,
}

/// Combined extraction response for one receipt transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptExtraction {
    /// Layout the caller said the transcript came from.
    pub kind: ReceiptKind,

    /// Parsed sales summary and category breakdown.
    pub summary: ParsedSalesSummary,

    /// Branch name read off the receipt, if any strategy succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_candidate: Option<BranchNameCandidate>,

    /// Identity verification outcome. False means "warn the operator",
    /// never "block the submission".
    pub branch_match: bool,

    /// 0.0 - 1.0, derived from how much of the summary was readable.
    pub confidence: f32,

    /// Human-readable extraction warnings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_and_emptiness() {
        let mut summary = ParsedSalesSummary::default();
        assert_eq!(summary.field_count(), 0);
        assert!(summary.is_empty());

        summary.net_sales = Some("1314.46".parse().unwrap());
        assert_eq!(summary.field_count(), 1);
        assert!(!summary.is_empty());

        // A date alone does not make the summary non-empty.
        let dated = ParsedSalesSummary {
            receipt_date: NaiveDate::from_ymd_opt(2026, 2, 5),
            ..Default::default()
        };
        assert!(dated.is_empty());
    }

    #[test]
    fn test_average_ticket() {
        let summary = ParsedSalesSummary {
            net_sales: Some("1314.46".parse().unwrap()),
            guest_count_or_orders: Some(32),
            ..Default::default()
        };
        let atv = summary.average_ticket().unwrap();
        assert!(atv > Decimal::from(41) && atv < Decimal::from(42));

        let zero_guests = ParsedSalesSummary {
            net_sales: Some("100".parse().unwrap()),
            guest_count_or_orders: Some(0),
            ..Default::default()
        };
        assert_eq!(zero_guests.average_ticket(), None);
    }
}
