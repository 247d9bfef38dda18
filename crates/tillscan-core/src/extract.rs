//! Combined extraction pipeline: one receipt transcript in, one structured
//! response out.

use tracing::{debug, info};

use crate::branch::extractor::extract_branch_name;
use crate::branch::matcher::branch_matches;
use crate::models::config::TillscanConfig;
use crate::models::receipt::{ParsedSalesSummary, ReceiptExtraction, ReceiptKind};
use crate::receipt::parser::SectionScanner;

/// Run the full extraction over one receipt transcript.
///
/// `canonical_name` is the branch name from the caller's directory. When it
/// is absent, or when no candidate can be read off the receipt, identity
/// verification is skipped and reported as passing - a receipt that cannot
/// be verified must not be blocked on that alone.
pub fn extract_receipt(
    kind: ReceiptKind,
    text: &str,
    canonical_name: Option<&str>,
    config: &TillscanConfig,
) -> ReceiptExtraction {
    info!(?kind, chars = text.len(), "extracting receipt");

    let mut summary = SectionScanner::parse(kind, text);
    if !config.extraction.parse_categories {
        summary.categories.clear();
    }

    let mut warnings = Vec::new();
    let branch_candidate = extract_branch_name(kind, text);

    let branch_match = match (&branch_candidate, canonical_name) {
        _ if !config.matching.verify_branch => true,
        (None, Some(_)) => {
            warnings.push(
                "no branch name readable on receipt; identity not verified".to_string(),
            );
            config.matching.pass_on_missing_candidate
        }
        (Some(candidate), Some(canonical)) => {
            let matched = branch_matches(&candidate.raw_text, canonical);
            if !matched {
                warnings.push(format!(
                    "receipt branch {:?} does not match directory branch {:?}",
                    candidate.raw_text, canonical
                ));
            }
            matched
        }
        (_, None) => true,
    };

    let confidence = score_confidence(&summary, branch_candidate.is_some());
    if summary.is_empty() {
        warnings.push("no summary fields or categories were readable".to_string());
    }
    if confidence < config.extraction.low_confidence_threshold {
        warnings.push(format!("low extraction confidence: {confidence:.2}"));
    }

    debug!(
        confidence,
        fields = summary.field_count(),
        categories = summary.categories.len(),
        branch_match,
        "extraction complete"
    );

    ReceiptExtraction {
        kind,
        summary,
        branch_candidate,
        branch_match,
        confidence,
        warnings,
    }
}

/// Start certain, dock a fixed penalty for every part of the summary that
/// could not be read.
fn score_confidence(summary: &ParsedSalesSummary, has_candidate: bool) -> f32 {
    let mut confidence = 1.0f32;
    if summary.net_sales.is_none() {
        confidence -= 0.25;
    }
    if summary.gross_sales.is_none() {
        confidence -= 0.15;
    }
    if summary.guest_count_or_orders.is_none() {
        confidence -= 0.15;
    }
    if summary.cash_sales.is_none() {
        confidence -= 0.05;
    }
    if summary.categories.is_empty() {
        confidence -= 0.2;
    }
    if !has_candidate {
        confidence -= 0.1;
    }
    confidence.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_candidate_passes_verification() {
        let config = TillscanConfig::default();
        let result = extract_receipt(
            ReceiptKind::PointOfSale,
            "no identity here\n",
            Some("Karama Centre"),
            &config,
        );
        assert!(result.branch_candidate.is_none());
        assert!(result.branch_match);
        assert!(result.warnings.iter().any(|w| w.contains("not verified")));
    }

    #[test]
    fn test_mismatch_warns_but_returns_summary() {
        let config = TillscanConfig::default();
        let text = "IBQ LANCY MALL\nSales Summary\nNet Sales: 120.00\n";
        let result = extract_receipt(
            ReceiptKind::PointOfSale,
            text,
            Some("Fujairah Tower"),
            &config,
        );
        assert!(!result.branch_match);
        assert!(result.warnings.iter().any(|w| w.contains("does not match")));
        assert_eq!(result.summary.net_sales, Some("120.00".parse().unwrap()));
    }

    #[test]
    fn test_no_canonical_name_skips_verification() {
        let config = TillscanConfig::default();
        let result = extract_receipt(ReceiptKind::PointOfSale, "IBQ LANCY MALL\n", None, &config);
        assert!(result.branch_match);
        assert!(result.branch_candidate.is_some());
    }

    #[test]
    fn test_verification_can_be_disabled() {
        let mut config = TillscanConfig::default();
        config.matching.verify_branch = false;
        let result = extract_receipt(
            ReceiptKind::PointOfSale,
            "IBQ LANCY MALL\n",
            Some("Fujairah Tower"),
            &config,
        );
        assert!(result.branch_match);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_extraction_scores_low() {
        let config = TillscanConfig::default();
        let result = extract_receipt(ReceiptKind::PointOfSale, "nothing\n", None, &config);
        assert!(result.summary.is_empty());
        assert!(result.confidence < config.extraction.low_confidence_threshold);
        assert!(result.warnings.iter().any(|w| w.contains("low extraction")));
    }

    #[test]
    fn test_categories_can_be_disabled() {
        let mut config = TillscanConfig::default();
        config.extraction.parse_categories = false;
        let text = "Category Sales Summary\nSundaes 12 99.00\n";
        let result = extract_receipt(ReceiptKind::PointOfSale, text, None, &config);
        assert!(result.summary.categories.is_empty());
    }
}
