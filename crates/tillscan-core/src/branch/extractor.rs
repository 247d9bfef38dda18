//! Branch identity extraction from the top of a receipt.
//!
//! Three strategies, tried in order, each bounded to its own window of
//! leading lines; the first one that yields a name wins. No strategy
//! succeeding is a valid outcome - the caller then skips verification
//! instead of failing the receipt.

use tracing::debug;

use crate::models::receipt::{BranchNameCandidate, BranchStrategy, ReceiptKind};

use crate::receipt::rules::patterns::{
    HD_BRANCH_PREFIX, LEADING_JUNK, POS_BRANCH_PREFIX, TABLE_BORDER, TRAILING_NOISE,
};

/// Lines scanned by the prefix-pattern strategy.
const PREFIX_WINDOW: usize = 25;
/// Lines scanned by the location-keyword strategy.
const KEYWORD_WINDOW: usize = 20;
/// Lines scanned by the uppercase heuristic.
const UPPERCASE_WINDOW: usize = 15;

/// Lines that can never be a store identity.
const REJECT_TOKENS: &[&str] = &[
    "baskin",
    "robbins",
    "galadari",
    "date:",
    "tm:",
    "sales summary",
    "report",
    "receipt",
    "invoice",
    "gross sale",
    "net sale",
    "cash sale",
    "total",
    "vat",
    "aed",
    "dhs",
];

/// Place-name fragments seen in branch names across the directory.
const LOCATION_KEYWORDS: &[&str] = &[
    "mall", "plaza", "tower", "centre", "center", "city", "souk", "village", "avenue", "street",
    "road", "walk", "wharf", "marina", "festival", "silicon", "karama", "deira", "jumeirah",
    "barsha", "qusais", "nahda", "rigga", "satwa", "wahda", "majaz", "khalidiya", "corniche",
    "mirdif", "dubai", "sharjah", "ajman", "fujairah", "khaimah", "al ain",
];

/// Scan the leading lines of a receipt for the store identity.
pub fn extract_branch_name(kind: ReceiptKind, text: &str) -> Option<BranchNameCandidate> {
    let lines: Vec<&str> = text.lines().collect();

    prefix_strategy(kind, &lines)
        .or_else(|| keyword_strategy(&lines))
        .or_else(|| uppercase_strategy(&lines))
}

fn prefix_strategy(kind: ReceiptKind, lines: &[&str]) -> Option<BranchNameCandidate> {
    let pattern = match kind {
        ReceiptKind::PointOfSale => &*POS_BRANCH_PREFIX,
        ReceiptKind::HomeDelivery => &*HD_BRANCH_PREFIX,
    };

    for line in lines.iter().take(PREFIX_WINDOW) {
        if let Some(caps) = pattern.captures(line) {
            let raw = strip_noise(&caps[1]);
            if raw.is_empty() {
                continue;
            }
            debug!(strategy = "prefix", name = %raw, "branch candidate");
            return Some(BranchNameCandidate {
                raw_text: raw,
                strategy: BranchStrategy::PrefixPattern,
            });
        }
    }
    None
}

fn keyword_strategy(lines: &[&str]) -> Option<BranchNameCandidate> {
    for line in lines.iter().take(KEYWORD_WINDOW) {
        let trimmed = line.trim();
        if trimmed.len() <= 5 || rejected(trimmed) {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if LOCATION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            let raw = strip_noise(&LEADING_JUNK.replace(trimmed, ""));
            if raw.is_empty() {
                continue;
            }
            debug!(strategy = "keyword", name = %raw, "branch candidate");
            return Some(BranchNameCandidate {
                raw_text: raw,
                strategy: BranchStrategy::LocationKeyword,
            });
        }
    }
    None
}

fn uppercase_strategy(lines: &[&str]) -> Option<BranchNameCandidate> {
    for line in lines.iter().take(UPPERCASE_WINDOW) {
        let trimmed = line.trim();
        if trimmed.len() < 6 || rejected(trimmed) {
            continue;
        }
        let shaped = trimmed
            .chars()
            .all(|c| c.is_ascii_uppercase() || matches!(c, ' ' | '/' | '&' | '-' | '.'));
        if shaped && trimmed.contains(' ') {
            debug!(strategy = "uppercase", name = %trimmed, "branch candidate");
            return Some(BranchNameCandidate {
                raw_text: trimmed.to_string(),
                strategy: BranchStrategy::UppercaseHeuristic,
            });
        }
    }
    None
}

fn rejected(line: &str) -> bool {
    let lower = line.to_lowercase();
    REJECT_TOKENS.iter().any(|t| lower.contains(t)) || TABLE_BORDER.is_match(line)
}

/// Drop a short lowercase OCR noise word glued to the end of a name.
fn strip_noise(raw: &str) -> String {
    TRAILING_NOISE.replace(raw.trim_end(), "").into_owned()
}
