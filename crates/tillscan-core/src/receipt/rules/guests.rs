//! Guest-count and order-count extraction.
//!
//! Point-of-sale receipts print the total guest count as "GC: 32"; OCR
//! frequently reads the G as 6, and some layouts spell it "G.C". "RGC"
//! (returns guest count) is a different metric and must never match. A
//! receipt can carry both the real total and a smaller cash-only subtotal,
//! so the largest value seen is authoritative. Home-delivery reports count
//! "Orders" instead.

use super::patterns::{GUEST_COUNT, ORDER_COUNT};

/// Guest count from a single line, honouring the RGC exclusion.
///
/// A line with several counts yields the largest.
pub fn guest_count_in_line(line: &str) -> Option<i64> {
    GUEST_COUNT
        .captures_iter(line)
        .filter_map(|caps| caps[1].parse().ok())
        .max()
}

/// Largest guest count anywhere in the text.
pub fn largest_guest_count(text: &str) -> Option<i64> {
    text.lines().filter_map(guest_count_in_line).max()
}

/// Order count from a single line (home-delivery vocabulary).
pub fn order_count_in_line(line: &str) -> Option<i64> {
    ORDER_COUNT
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

/// First order count anywhere in the text.
pub fn first_order_count(text: &str) -> Option<i64> {
    text.lines().find_map(order_count_in_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_guest_count() {
        assert_eq!(guest_count_in_line("GC: 32"), Some(32));
        assert_eq!(guest_count_in_line("gc 7"), Some(7));
    }

    #[test]
    fn test_ocr_confusions() {
        // G read as 6
        assert_eq!(guest_count_in_line("6C: 32"), Some(32));
        // Dotted abbreviation
        assert_eq!(guest_count_in_line("G.C.: 18"), Some(18));
    }

    #[test]
    fn test_rgc_is_a_different_metric() {
        assert_eq!(guest_count_in_line("RGC: 99"), None);
        // But a real GC later on the same line still counts
        assert_eq!(guest_count_in_line("RGC: 99  GC: 32"), Some(32));
    }

    #[test]
    fn test_largest_wins_across_lines() {
        let text = "GC: 32\nCash GC: 2\n";
        assert_eq!(largest_guest_count(text), Some(32));
    }

    #[test]
    fn test_separator_required() {
        assert_eq!(guest_count_in_line("GC32"), None);
    }

    #[test]
    fn test_order_count_first_match() {
        let text = "Orders: 16\nOrders: 99\n";
        assert_eq!(first_order_count(text), Some(16));
        assert_eq!(order_count_in_line("Total Orders . 4"), Some(4));
        assert_eq!(first_order_count("nothing here"), None);
    }
}
