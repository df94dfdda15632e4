//! Locale-aware formatting helpers
//!
//! Pure functions over stored USD amounts and timestamps. USD renders with
//! two fraction digits, NGN with none; both get thousands separators.

use chrono::{DateTime, Local, Utc};

use crate::models::{convert_from_usd, convert_to_usd, Currency};

/// Format a timestamp as a short local date, e.g. "Jan 5, 2025"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// Format a stored USD amount in the given display currency
pub fn format_currency(amount_usd: f64, currency: Currency) -> String {
    format_amount_in(currency, convert_from_usd(amount_usd, currency))
}

/// Format an amount already denominated in the given currency
pub fn format_amount_in(currency: Currency, amount: f64) -> String {
    let info = currency.info();
    let formatted = match currency {
        Currency::Usd => {
            let cents = format!("{:.2}", amount.abs());
            let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
            format!("{}.{}", group_thousands(whole), frac)
        }
        Currency::Ngn => group_thousands(&format!("{:.0}", amount.abs())),
    };

    if amount < 0.0 {
        format!("-{}{}", info.symbol, formatted)
    } else {
        format!("{}{}", info.symbol, formatted)
    }
}

/// Convert an amount between the two supported currencies via USD
pub fn convert_amount(amount: f64, from: Currency, to: Currency) -> f64 {
    convert_from_usd(convert_to_usd(amount, from), to)
}

/// Insert comma separators into a digit string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_two_decimals() {
        assert_eq!(format_amount_in(Currency::Usd, 1234.5), "$1,234.50");
        assert_eq!(format_amount_in(Currency::Usd, 0.0), "$0.00");
    }

    #[test]
    fn test_format_ngn_no_decimals() {
        assert_eq!(format_amount_in(Currency::Ngn, 15000.0), "\u{20a6}15,000");
        assert_eq!(format_amount_in(Currency::Ngn, 999.4), "\u{20a6}999");
    }

    #[test]
    fn test_format_currency_converts_first() {
        assert_eq!(format_currency(10.0, Currency::Ngn), "\u{20a6}15,000");
        assert_eq!(format_currency(10.0, Currency::Usd), "$10.00");
    }

    #[test]
    fn test_convert_amount_cross_currency() {
        assert_eq!(convert_amount(15000.0, Currency::Ngn, Currency::Usd), 10.0);
        assert_eq!(convert_amount(10.0, Currency::Usd, Currency::Ngn), 15000.0);
        assert_eq!(convert_amount(10.0, Currency::Usd, Currency::Usd), 10.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
