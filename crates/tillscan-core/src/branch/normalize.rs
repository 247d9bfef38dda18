//! Canonical form for branch names before comparison.

/// Store-identity prefixes OCR leaves glued to a branch name, longest
/// first so `1bq` is never half-eaten by `1b`.
const NAME_PREFIXES: &[&str] = &[
    "baskin robbins",
    "1bq",
    "ibq",
    "lbq",
    "1h",
    "ih",
    "lh",
    "1b",
    "br",
];

/// Lowercase, de-punctuate, strip identity prefixes, collapse whitespace.
///
/// Idempotent: `normalize_branch_name` applied to its own output is a
/// no-op. Dots become spaces before prefixes are stripped, and stripping
/// repeats until stable, so stacked or punctuated prefixes
/// ("IBQ. 1B Karama") fully disappear on the first call.
pub fn normalize_branch_name(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('.', " ");
    let mut name = collapse_whitespace(&lowered);
    loop {
        let next = strip_one_prefix(&name);
        if next == name {
            return name;
        }
        name = next;
    }
}

fn strip_one_prefix(name: &str) -> String {
    let name = name.trim_start_matches([':', '-', ' ']);
    for prefix in NAME_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.is_empty() {
                return String::new();
            }
            // A prefix only counts as a whole token: "br" must not eat
            // the front of "britannia".
            if rest.starts_with([' ', ':', '-']) {
                return rest.to_string();
            }
        }
    }
    name.to_string()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
