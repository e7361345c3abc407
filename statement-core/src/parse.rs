//! Lenient date and money parsing for statement text.
//!
//! Bank and UPI exports disagree on almost every format detail, so both
//! parsers try a fixed list of shapes in order and return `None` rather than
//! erroring. Callers decide whether `None` is fatal.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date shapes seen in Indian bank and UPI statements, tried in order.
///
/// Two-digit-year forms come after their four-digit twins; a four-digit
/// pattern that swallows a two-digit year is caught by the plausibility check.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%m-%y",
    "%d/%m/%y",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%B %d, %Y",
];

const ISO_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Largest magnitude accepted as a money value; sums over any realistic
/// statement stay finite below it.
pub const MAX_AMOUNT: f64 = 1e15;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Parse a statement date. Datetimes keep only their date part.
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            if plausible(d) {
                return Some(d);
            }
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive()).filter(|d| plausible(*d));
    }

    let without_zulu = s.strip_suffix('Z').unwrap_or(s);
    ISO_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(without_zulu, f).ok())
        .map(|dt| dt.date())
        .filter(|d| plausible(*d))
}

fn plausible(d: NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&d.year())
}

/// Parse a money string like `"₹ 45,000.00"`, `"Rs.3500"` or `"-15.00"`.
///
/// Returns `None` for empty or non-numeric input. Only plain decimal
/// notation is accepted; `"1e308"`, `"inf"` and `"NaN"` are rejected.
pub fn parse_amount(s: &str) -> Option<f64> {
    let mut cleaned = s.trim();
    for marker in ["₹", "INR", "Rs.", "Rs"] {
        if let Some(rest) = cleaned.strip_prefix(marker) {
            cleaned = rest.trim_start();
            break;
        }
    }

    let digits: String = cleaned
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if digits.is_empty()
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    {
        return None;
    }

    digits.parse::<f64>().ok().filter(|v| in_range(*v))
}

/// Finite and no larger in magnitude than [`MAX_AMOUNT`].
pub fn in_range(v: f64) -> bool {
    v.is_finite() && v.abs() <= MAX_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_common_date_shapes() {
        assert_eq!(parse_statement_date("2024-01-01"), Some(ymd(2024, 1, 1)));
        assert_eq!(parse_statement_date("05-02-2024"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_statement_date("05/02/2024"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_statement_date("05.02.2024"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_statement_date("05-Feb-24"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_statement_date("05 Feb 2024"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_statement_date("Feb 05, 2024"), Some(ymd(2024, 2, 5)));
    }

    #[test]
    fn test_two_digit_years_are_not_read_as_year_24() {
        assert_eq!(parse_statement_date("05/02/24"), Some(ymd(2024, 2, 5)));
        assert_eq!(parse_statement_date("05-02-24"), Some(ymd(2024, 2, 5)));
    }

    #[test]
    fn test_iso_datetimes_keep_date() {
        assert_eq!(
            parse_statement_date("2024-03-09T18:22:01.000000Z"),
            Some(ymd(2024, 3, 9))
        );
        assert_eq!(
            parse_statement_date("2024-03-09T18:22:01+05:30"),
            Some(ymd(2024, 3, 9))
        );
    }

    #[test]
    fn test_rejects_garbage_dates() {
        assert_eq!(parse_statement_date(""), None);
        assert_eq!(parse_statement_date("not a date"), None);
        assert_eq!(parse_statement_date("31-02-2024"), None);
    }

    #[test]
    fn test_parse_amounts() {
        assert_eq!(parse_amount("45,000.00"), Some(45000.0));
        assert_eq!(parse_amount("₹ 3,500"), Some(3500.0));
        assert_eq!(parse_amount("Rs.120.50"), Some(120.5));
        assert_eq!(parse_amount("INR 99"), Some(99.0));
        assert_eq!(parse_amount("-15.00"), Some(-15.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_exponent_amounts_rejected() {
        assert_eq!(parse_amount("1e308"), None);
        assert_eq!(parse_amount("2.5E3"), None);
        assert_eq!(parse_amount("+250.00"), Some(250.0));
        assert_eq!(parse_amount("9999999999999999999999"), None);
    }
}
