//! Numeric token extraction.
//!
//! Receipts print amounts with comma grouping (1,333.31) next to bare
//! counts (82). Both are lifted out of a fragment in left-to-right order;
//! what each token means is decided by the section rules, not here.

use rust_decimal::Decimal;

use super::patterns::NUMERIC_TOKEN;

/// One numeric token lifted out of a fragment, grouping commas already
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken(String);

impl NumericToken {
    /// Decimal value, if the token survives conversion.
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.0.parse().ok()
    }

    /// Integer value; tokens with a fractional part fail.
    pub fn as_integer(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pull every numeric token out of a fragment, left to right.
///
/// Cannot fail: a fragment without digits yields an empty vector.
pub fn numeric_tokens(fragment: &str) -> Vec<NumericToken> {
    NUMERIC_TOKEN
        .find_iter(fragment)
        .map(|m| NumericToken(m.as_str().replace(',', "")))
        .collect()
}

/// First numeric token of a fragment as a decimal.
pub fn first_decimal(fragment: &str) -> Option<Decimal> {
    numeric_tokens(fragment)
        .first()
        .and_then(NumericToken::as_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_in_order() {
        let tokens = numeric_tokens("Gross Sales: 1,333.31  GC: 32");
        let raw: Vec<&str> = tokens.iter().map(NumericToken::as_str).collect();
        assert_eq!(raw, vec!["1333.31", "32"]);
    }

    #[test]
    fn test_comma_grouping_stripped() {
        let tokens = numeric_tokens("12,345,678.90");
        assert_eq!(tokens[0].as_str(), "12345678.90");
        assert_eq!(tokens[0].as_decimal(), Some("12345678.90".parse().unwrap()));
    }

    #[test]
    fn test_no_digits_yields_empty() {
        assert!(numeric_tokens("no numbers here").is_empty());
        assert!(numeric_tokens("").is_empty());
    }

    #[test]
    fn test_decimal_without_grouping() {
        let tokens = numeric_tokens("Cups & Cones    31   468.54  35.1");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].as_integer(), Some(31));
        assert_eq!(tokens[1].as_decimal(), Some("468.54".parse().unwrap()));
        assert_eq!(tokens[2].as_decimal(), Some("35.1".parse().unwrap()));
    }

    #[test]
    fn test_integer_conversion_rejects_fractions() {
        let tokens = numeric_tokens("31.5");
        assert_eq!(tokens[0].as_integer(), None);
        assert!(tokens[0].as_decimal().is_some());
    }

    #[test]
    fn test_first_decimal() {
        assert_eq!(
            first_decimal("Net Sales..: 1,314.46"),
            Some("1314.46".parse().unwrap())
        );
        assert_eq!(first_decimal("no digits"), None);
    }
}
