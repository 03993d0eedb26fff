//! Price extraction from OCR'd value text.

use regex::Regex;

/// Extract a price from reconstructed value text.
///
/// OCR'd price columns arrive with currency symbols, thousands separators,
/// and stray neighbors (`"$1,299.00"`, `"2.50 B"`). The first decimal
/// amount in the text wins; text with no digits yields `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    let normalized = text.replace(',', "");
    let re = Regex::new(r"\d+(?:\.\d+)?").unwrap();
    let amount = re.find(&normalized)?;
    amount.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_price("2.50"), Some(2.50));
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(parse_price("$12.34"), Some(12.34));
        assert_eq!(parse_price("€9.99"), Some(9.99));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_price("1,299.00"), Some(1299.00));
    }

    #[test]
    fn test_bare_integer() {
        assert_eq!(parse_price("12"), Some(12.0));
    }

    #[test]
    fn test_trailing_marker() {
        // Receipt tax-code suffixes
        assert_eq!(parse_price("2.50 B"), Some(2.50));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_price("FREE"), None);
        assert_eq!(parse_price(""), None);
    }
}
