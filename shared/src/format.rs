//! Display formatting for Vietnamese locale
//!
//! Currency follows the `vi-VN` / VND convention: no fraction digits,
//! `.` as thousands separator, `₫` suffix after a non-breaking space.

use crate::money::to_decimal;
use chrono::{DateTime, NaiveDate};
use rust_decimal::RoundingStrategy;

/// Non-breaking space used between amount and currency symbol
const NBSP: char = '\u{a0}';
const VND_SYMBOL: char = '₫';

/// Insert `.` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `1000000.0` -> `"1.000.000 ₫"` (with a non-breaking space)
pub fn format_vnd(amount: f64) -> String {
    let rounded = to_decimal(amount).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{NBSP}{VND_SYMBOL}", group_thousands(&digits))
}

/// Live formatting for a numeric input: keep digits only, group thousands
pub fn format_number_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    group_thousands(&digits)
}

/// Inverse of [`format_number_input`]; empty or unparseable input reads as 0
pub fn parse_formatted_number(formatted: &str) -> u64 {
    let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or_default()
}

/// ISO date or datetime -> `dd/mm/yyyy`; anything else is returned unchanged
pub fn format_date_vi(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d/%m/%Y").to_string();
    }
    trimmed
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
