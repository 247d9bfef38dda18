//! Receipt date extraction.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY, DATE_LABELED, DATE_YMD};

/// First recognizable date on the receipt.
///
/// Lines labelled "Date" win over bare dates anywhere in the text.
/// Ambiguous numeric dates are read day-first, which is how the receipts
/// print them.
pub fn extract_receipt_date(text: &str) -> Option<NaiveDate> {
    for line in text.lines() {
        if let Some(caps) = DATE_LABELED.captures(line) {
            if let Some(date) = first_date(&caps[1]) {
                return Some(date);
            }
        }
    }
    first_date(text)
}

fn first_date(fragment: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_DMY.captures(fragment) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year = parse_year(&caps[3]);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_YMD.captures(fragment) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_date_wins() {
        let text = "Report 12/12/2020\nDate: 05/02/2026\n";
        // The labeled line is preferred even though a bare date comes first
        assert_eq!(
            extract_receipt_date(text),
            NaiveDate::from_ymd_opt(2026, 2, 5)
        );
    }

    #[test]
    fn test_bare_dmy_fallback() {
        assert_eq!(
            extract_receipt_date("printed 05/02/2026 22:10"),
            NaiveDate::from_ymd_opt(2026, 2, 5)
        );
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            extract_receipt_date("Date: 2026-02-05"),
            NaiveDate::from_ymd_opt(2026, 2, 5)
        );
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(
            extract_receipt_date("Date: 05.02.26"),
            NaiveDate::from_ymd_opt(2026, 2, 5)
        );
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_receipt_date("no dates at all"), None);
    }
}
