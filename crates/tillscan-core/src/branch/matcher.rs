//! Fuzzy branch-name matching.
//!
//! Receipts are OCR-corrupted and abbreviated inconsistently; a single
//! edit-distance threshold over whole strings would both over- and
//! under-match. The cascade layers cheap high-precision checks (exact,
//! containment) over progressively looser ones (typo fixes, abbreviation
//! expansion, word overlap, per-word character fuzz), stopping at the
//! first hit.

use tracing::trace;

use super::normalize::normalize_branch_name;

/// Single-word OCR misspellings seen on real receipts. Applied per token;
/// substring rewriting would corrupt words the fixes are prefixes of.
const TYPO_FIXES: &[(&str, &str)] = &[
    ("roade", "road"),
    ("centre", "center"),
    ("centr", "center"),
    ("trad", "trade"),
    ("jumeira", "jumeirah"),
    ("twr", "tower"),
    ("twrs", "towers"),
];

/// Abbreviations the directory and the receipts use interchangeably.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("tc", "trade centre"),
    ("jlt", "jumeirah lake towers"),
    ("jbr", "jumeirah beach residence"),
    ("dcc", "deira city centre"),
    ("moe", "mall of the emirates"),
    ("dfc", "dubai festival city"),
    ("rak", "ras al khaimah"),
    ("uaq", "umm al quwain"),
];

/// Does the OCR-derived candidate denote the canonical directory branch?
///
/// The canonical name may carry `/`-separated alternates; any alternate
/// matching is enough.
pub fn branch_matches(candidate: &str, canonical: &str) -> bool {
    let cand = normalize_branch_name(candidate);
    if cand.is_empty() {
        return false;
    }

    let mut alternates: Vec<String> = canonical.split('/').map(normalize_branch_name).collect();
    alternates.push(normalize_branch_name(&canonical.replace('/', " ")));

    let matched = alternates
        .iter()
        .filter(|alt| !alt.is_empty())
        .any(|alt| cascade_matches(&cand, alt));
    trace!(candidate = %cand, canonical, matched, "branch comparison");
    matched
}

fn cascade_matches(cand: &str, canon: &str) -> bool {
    // Exact and containment on the normalized strings
    if equal_or_contained(cand, canon) {
        return true;
    }

    // Typo-corrected retest
    let cand_typo = apply_word_map(cand, TYPO_FIXES);
    let canon_typo = apply_word_map(canon, TYPO_FIXES);
    if equal_or_contained(&cand_typo, &canon_typo) {
        return true;
    }

    // Abbreviations expanded, typos re-applied, retest
    let cand_full = apply_word_map(&apply_word_map(cand, ABBREVIATIONS), TYPO_FIXES);
    let canon_full = apply_word_map(&apply_word_map(canon, ABBREVIATIONS), TYPO_FIXES);
    if equal_or_contained(&cand_full, &canon_full) {
        return true;
    }

    // One shared significant word across any variant pair
    let variant_pairs = [
        (cand, canon),
        (cand_typo.as_str(), canon_typo.as_str()),
        (cand_full.as_str(), canon_full.as_str()),
    ];
    if variant_pairs.iter().any(|(a, b)| shares_word(a, b)) {
        return true;
    }

    // Character fuzz across every cross pair of words seen in any variant
    let cand_words = word_union(&[cand, &cand_typo, &cand_full]);
    let canon_words = word_union(&[canon, &canon_typo, &canon_full]);
    cand_words
        .iter()
        .any(|a| canon_words.iter().any(|b| fuzzy_word_match(a, b)))
}

fn equal_or_contained(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(b) || b.contains(a)
}

/// Replace whole words according to a fixed map.
fn apply_word_map(name: &str, map: &[(&str, &str)]) -> String {
    name.split_whitespace()
        .map(|word| {
            map.iter()
                .find(|(from, _)| *from == word)
                .map_or(word, |(_, to)| *to)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words long enough to carry identity ("al", "3" and the like do not).
fn significant_words(name: &str) -> impl Iterator<Item = &str> {
    name.split_whitespace().filter(|w| w.chars().count() > 2)
}

fn shares_word(a: &str, b: &str) -> bool {
    significant_words(a).any(|w| significant_words(b).any(|v| v == w))
}

fn word_union(variants: &[&str]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for variant in variants {
        for word in significant_words(variant) {
            if !words.iter().any(|seen| seen == word) {
                words.push(word.to_string());
            }
        }
    }
    words
}

/// Per-word character fuzz: same length with at most two differing
/// positions, or lengths within two of each other sharing the first three
/// characters.
fn fuzzy_word_match(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    if a.len() == b.len() {
        let diffs = a.iter().zip(&b).filter(|(x, y)| x != y).count();
        diffs <= 2
    } else {
        a.len().abs_diff(b.len()) <= 2 && a[..3] == b[..3]
    }
}
