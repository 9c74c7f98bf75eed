//! Money totals using rust_decimal for precision
//!
//! Amounts travel as `f64` on the wire. Sums and averages are computed in
//! `Decimal` and converted back, rounded to 2 places.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal; NaN and infinities read as zero
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal to f64, rounded half away from zero
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum of `f(item)` over `items`
pub fn sum_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    to_f64(items.iter().map(|item| to_decimal(f(item))).sum())
}

/// Mean of `f(item)` over `items`; zero for an empty list
pub fn average_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let total: Decimal = items.iter().map(|item| to_decimal(f(item))).sum();
    to_f64(total / Decimal::from(items.len()))
}
