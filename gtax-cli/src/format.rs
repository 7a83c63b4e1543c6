//! Parsing and display formatting for amounts.

use anyhow::{Context, Result, ensure};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use gtax_core::calculations::common::{group_thousands, round_half_up};

/// Parses the income argument. Unlike the relief fields, income must be a
/// valid non-negative number.
pub fn parse_income(raw: &str) -> Result<Decimal> {
    let income: Decimal = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid income amount '{raw}'"))?;
    ensure!(
        income >= Decimal::ZERO,
        "income must be non-negative, got {income}"
    );
    Ok(income)
}

/// Optional relief amounts inherit the original calculator's leniency:
/// absent, empty, or unparseable values count as zero.
pub fn lenient_amount(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|value| value.trim().parse::<Decimal>().ok())
}

/// `"$1,234.50"` style: symbol, grouped whole part, two decimal places.
pub fn money(symbol: &str, value: Decimal) -> String {
    let rounded = round_half_up(value);
    let cents = (rounded.fract().abs() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);
    format!("{symbol}{}.{cents:02}", group_thousands(rounded))
}

/// Renders a fractional rate as a percentage, e.g. `0.325` as `"32.5%"`.
pub fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_income_accepts_plain_numbers() {
        assert_eq!(parse_income("60000").unwrap(), dec!(60000));
        assert_eq!(parse_income(" 1234.56 ").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_income_rejects_garbage() {
        assert!(parse_income("sixty thousand").is_err());
        assert!(parse_income("").is_err());
    }

    #[test]
    fn parse_income_rejects_negative() {
        assert!(parse_income("-1").is_err());
    }

    #[test]
    fn lenient_amount_parses_valid_values() {
        assert_eq!(lenient_amount(Some("480000")), Some(dec!(480000)));
        assert_eq!(lenient_amount(Some(" 12.5 ")), Some(dec!(12.5)));
    }

    #[test]
    fn lenient_amount_coerces_bad_input_to_none() {
        assert_eq!(lenient_amount(Some("abc")), None);
        assert_eq!(lenient_amount(Some("")), None);
        assert_eq!(lenient_amount(None), None);
    }

    #[test]
    fn money_groups_and_pads() {
        assert_eq!(money("$", dec!(5460.5)), "$5,460.50");
        assert_eq!(money("₦", dec!(896000)), "₦896,000.00");
        assert_eq!(money("R", dec!(0)), "R0.00");
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(money("$", dec!(1234.567)), "$1,234.57");
    }

    #[test]
    fn percent_drops_trailing_zeros() {
        assert_eq!(percent(dec!(0.07)), "7%");
        assert_eq!(percent(dec!(0.205)), "20.5%");
        assert_eq!(percent(dec!(0.325)), "32.5%");
    }
}
