//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numeric tokens: comma-grouped integers with an optional decimal tail
    // (1,333.31 / 468.54 / 82)
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?"
    ).unwrap();

    // Guest count: GC / 6C (OCR reads G as 6) / G.C, then a separator run
    // and digits. "RGC" is returns guest count, a different metric; the
    // regex crate has no lookbehind, so the leading (?:^|[^r]) alternative
    // rejects it and the count sits in the capture group.
    pub static ref GUEST_COUNT: Regex = Regex::new(
        r"(?i)(?:^|[^r])(?:g\.?c|6c)[\s:.,]+(\d+)"
    ).unwrap();

    // Home-delivery order count
    pub static ref ORDER_COUNT: Regex = Regex::new(
        r"(?i)orders[\s:.,]+(\d+)"
    ).unwrap();

    // Point-of-sale store-identity prefixes as OCR actually renders them
    // (IBQ / 1BQ / 1B / lBQ / iBQ / iB0 / iBO). Anchored past leading
    // punctuation so amounts or timestamps mid-line never match.
    pub static ref POS_BRANCH_PREFIX: Regex = Regex::new(
        r"(?i)^[^a-z0-9]*((?:ibq|1bq|lbq|ib0|ibo|1b)\s+\S.*)"
    ).unwrap();

    // Home-delivery store-identity prefixes (1H / IH / lH), separated from
    // the name by : or -
    pub static ref HD_BRANCH_PREFIX: Regex = Regex::new(
        r"(?i)^[^a-z0-9]*((?:1h|ih|lh)\s*[:-]\s*\S.*)"
    ).unwrap();

    // Short lowercase OCR noise glued to the end of a branch name
    pub static ref TRAILING_NOISE: Regex = Regex::new(
        r"\s+[a-z]{1,3}$"
    ).unwrap();

    // Leading junk before the first uppercase letter of a name
    pub static ref LEADING_JUNK: Regex = Regex::new(
        r"^[^A-Z]+"
    ).unwrap();

    // Table borders: runs of = and - framing category tables
    pub static ref TABLE_BORDER: Regex = Regex::new(
        r"^[\s=\-]+$"
    ).unwrap();

    // Dates: day-month-year (how the receipts print them) and ISO
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_LABELED: Regex = Regex::new(
        r"(?i)\bdate\b[\s.:]*(.+)"
    ).unwrap();
}
