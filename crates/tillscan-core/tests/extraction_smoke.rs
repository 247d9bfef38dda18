//! End-to-end extraction over realistic transcripts of both receipt kinds.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use tillscan_core::{ReceiptKind, TillscanConfig, extract_receipt};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

const POS_TRANSCRIPT: &str = "\
BASKIN ROBBINS
IBQ LANCY MALL
Date: 05/02/2026  TM: 04
Sales Summary
Gross Sales: 1,333.31  GC: 32
Returns....: 0.00
Net Sales..: 1,314.46
RGC: 1
Cash Sales
Cash Sales: 820.50  GC: 18
Cr. Sales
Card......: 493.96
Category Sales Summary
==============================
Description     Qty  Sales    Pct
Cups & Cones    31   468.54   35.1
Sundaes         12   310.20   23.6
Hand Packed      7   221.00   16.8
TOTAL SALES     50   999.74  100.0
";

#[test]
fn pos_transcript_full_extraction() {
    let config = TillscanConfig::default();
    let result = extract_receipt(
        ReceiptKind::PointOfSale,
        POS_TRANSCRIPT,
        Some("LAMCY MALL / KARAMA 3"),
        &config,
    );

    let summary = &result.summary;
    assert_eq!(summary.gross_sales, Some(dec("1333.31")));
    assert_eq!(summary.net_sales, Some(dec("1314.46")));
    assert_eq!(summary.guest_count_or_orders, Some(32));
    assert_eq!(summary.cash_sales, Some(dec("820.50")));
    assert_eq!(
        summary.receipt_date,
        chrono::NaiveDate::from_ymd_opt(2026, 2, 5)
    );

    let names: Vec<&str> = summary.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cups & Cones", "Sundaes", "Hand Packed"]);
    assert_eq!(summary.categories[0].quantity, 31);
    assert_eq!(summary.categories[0].sales_amount, dec("468.54"));
    assert_eq!(summary.categories[0].contribution_percent, dec("35.1"));

    // OCR read LAMCY as LANCY; the matcher still reconciles the identity
    let candidate = result.branch_candidate.as_ref().unwrap();
    assert_eq!(candidate.raw_text, "IBQ LANCY MALL");
    assert!(result.branch_match);

    assert!(result.confidence > 0.9);
    assert!(result.warnings.is_empty());
}

const HD_TRANSCRIPT: &str = "\
1H: MARINA WALK
Home Delivery Sales Summary
Gross Sales: 412.00
Net Sales: 388.75
Orders: 16
";

#[test]
fn home_delivery_transcript_extraction() {
    let config = TillscanConfig::default();
    let result = extract_receipt(
        ReceiptKind::HomeDelivery,
        HD_TRANSCRIPT,
        Some("Marina Walk"),
        &config,
    );

    let summary = &result.summary;
    assert_eq!(summary.gross_sales, Some(dec("412.00")));
    assert_eq!(summary.net_sales, Some(dec("388.75")));
    assert_eq!(summary.guest_count_or_orders, Some(16));
    assert!(result.branch_match);
}

#[test]
fn degenerate_transcript_is_not_an_error() {
    let config = TillscanConfig::default();
    let result = extract_receipt(ReceiptKind::PointOfSale, "", None, &config);
    assert!(result.summary.is_empty());
    assert!(result.branch_match);
}

#[test]
fn extraction_response_serializes() {
    let config = TillscanConfig::default();
    let result = extract_receipt(ReceiptKind::PointOfSale, POS_TRANSCRIPT, None, &config);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"gross_sales\":\"1333.31\""));
    assert!(json.contains("\"point_of_sale\""));
}
