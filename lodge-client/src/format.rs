//! Display formatting helpers

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;

/// Format an ISO date string as `Mon D, YYYY` (e.g. `Jun 1, 2025`).
///
/// Accepts plain dates and RFC 3339 timestamps. Empty input stays
/// empty; unparsable input is returned unchanged.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Format an amount as currency with two decimals and thousands
/// separators, e.g. `$1,234.50`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp(2).abs();
    let text = format!("{rounded:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}
