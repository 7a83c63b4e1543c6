//! Shared helpers for monetary arithmetic and display.

use rust_decimal::Decimal;

/// Rounds to two decimal places, half away from zero.
///
/// Standard financial rounding: values at exactly 0.005 round to 0.01.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8.578333)), dec!(8.58));
/// assert_eq!(round_half_up(dec!(1.005)), dec!(1.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats the whole part of an amount with `,` thousands separators.
///
/// Any fractional part is dropped; callers format cents themselves where
/// they matter. Used for bracket range labels like `"300,001 - 600,000"`.
pub fn group_thousands(value: Decimal) -> String {
    let whole = value.trunc();
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < Decimal::ZERO {
        format!("-{grouped}")
    } else {
        grouped
    }
}
