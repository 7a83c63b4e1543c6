//! Progressive income tax engine.
//!
//! Given a [`CountryProfile`] and a [`CalculationInput`], the engine produces
//! gross/taxable/tax/net figures plus a per-bracket breakdown. The
//! computation proceeds in fixed steps:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annualize the income figure (monthly × 12) |
//! | 2    | Evaluate the profile's relief policy |
//! | 3    | Taxable income = max(0, gross − pre-tax reliefs) |
//! | 4    | Walk the bracket schedule, accumulating per-band tax |
//! | 5    | Subtract any rebate from the total, floored at zero |
//! | 6    | Effective rate = tax due / gross × 100 |
//! | 7    | Net income = gross − tax due − non-tax deductions |
//!
//! The engine is pure and stateless per call; the profile is read-only
//! shared data.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gtax_core::calculations::TaxCalculator;
//! use gtax_core::models::{
//!     BracketSchedule, CalculationInput, CountryCode, CountryProfile, ReliefPolicy, TaxBracket,
//! };
//!
//! let bracket = |upper, rate, label: &str| TaxBracket {
//!     upper_bound: upper,
//!     rate,
//!     label: label.to_string(),
//! };
//!
//! let profile = CountryProfile {
//!     code: CountryCode::UnitedStates,
//!     display_name: "United States".to_string(),
//!     currency_symbol: "$".to_string(),
//!     tax_label: "Federal Income Tax".to_string(),
//!     schedule: BracketSchedule::new(vec![
//!         bracket(Some(dec!(11000)), dec!(0.10), "10%"),
//!         bracket(Some(dec!(44725)), dec!(0.12), "12%"),
//!         bracket(None, dec!(0.22), "22%"),
//!     ])
//!     .unwrap(),
//!     relief_policy: ReliefPolicy::StandardDeduction(dec!(13850)),
//!     relief_note: None,
//! };
//!
//! let input = CalculationInput::annual(CountryCode::UnitedStates, dec!(60000));
//! let result = TaxCalculator::new(&profile).calculate(&input).unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(46150));
//! assert_eq!(result.tax_due, dec!(5460.50));
//! assert_eq!(result.net_income, dec!(54539.50));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{group_thousands, round_half_up};
use crate::models::{
    BracketLine, CalculationInput, CalculationResult, CountryProfile, IncomePeriod, TaxBracket,
};

/// Errors that can occur during a tax computation.
///
/// Both indicate a broken precondition: callers validate income before
/// invoking the engine, and profiles carry validated schedules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Negative gross income reached the engine.
    #[error("gross income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// The profile's bracket schedule has no brackets.
    #[error("country profile has an empty bracket schedule")]
    EmptySchedule,
}

/// Calculator bound to one country profile.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    profile: &'a CountryProfile,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(profile: &'a CountryProfile) -> Self {
        Self { profile }
    }

    /// Runs the full computation for one input.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if the income is negative or the
    /// profile's schedule is empty.
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, CalculationError> {
        if input.income < Decimal::ZERO {
            return Err(CalculationError::NegativeIncome(input.income));
        }
        if self.profile.schedule.is_empty() {
            return Err(CalculationError::EmptySchedule);
        }

        let gross_income = self.annualize(input.income, input.period);
        let reliefs = self.profile.relief_policy.evaluate(gross_income, input);
        let taxable_income = self.taxable_income(gross_income, reliefs.pre_tax);
        let (bracket_tax, breakdown) = self.bracket_tax(taxable_income);
        let tax_due = self.apply_rebate(bracket_tax, reliefs.rebate);
        let effective_rate_percent = self.effective_rate_percent(tax_due, gross_income);
        let net_income = gross_income - tax_due - reliefs.non_tax_deduction;

        Ok(CalculationResult {
            gross_income,
            taxable_income,
            tax_due,
            effective_rate_percent,
            net_income,
            breakdown,
            currency_symbol: self.profile.currency_symbol.clone(),
            tax_label: self.profile.tax_label.clone(),
        })
    }

    fn annualize(&self, income: Decimal, period: IncomePeriod) -> Decimal {
        match period {
            IncomePeriod::Monthly => income * Decimal::from(12),
            IncomePeriod::Annual => income,
        }
    }

    /// Gross minus pre-tax reliefs, floored at zero. The clamp is policy,
    /// not an error.
    fn taxable_income(&self, gross_income: Decimal, pre_tax_reliefs: Decimal) -> Decimal {
        let taxable = gross_income - pre_tax_reliefs;
        if taxable < Decimal::ZERO {
            warn!(
                gross = %gross_income,
                reliefs = %pre_tax_reliefs,
                "reliefs exceed gross income; taxable income clamped to zero"
            );
            Decimal::ZERO
        } else {
            taxable
        }
    }

    /// Walks the schedule in ascending order, charging each band's rate on
    /// the slice of taxable income inside it. Stops at the band containing
    /// the taxable income; a band ending exactly at the taxable income is
    /// the last one evaluated.
    fn bracket_tax(&self, taxable_income: Decimal) -> (Decimal, Vec<BracketLine>) {
        let mut tax = Decimal::ZERO;
        let mut breakdown = Vec::new();
        let mut previous_upper = Decimal::ZERO;

        for bracket in self.profile.schedule.brackets() {
            let ceiling = match bracket.upper_bound {
                Some(upper) => taxable_income.min(upper),
                None => taxable_income,
            };
            let income_in_bracket = ceiling - previous_upper;

            if income_in_bracket > Decimal::ZERO {
                let bracket_tax = round_half_up(income_in_bracket * bracket.rate);
                tax += bracket_tax;
                breakdown.push(BracketLine {
                    bracket: bracket_label(previous_upper, bracket),
                    income: income_in_bracket,
                    rate: bracket.rate,
                    tax: bracket_tax,
                });
            }

            match bracket.upper_bound {
                Some(upper) if taxable_income > upper => previous_upper = upper,
                _ => break,
            }
        }

        (tax, breakdown)
    }

    /// Applies a post-tax rebate, floored at zero. Breakdown lines are left
    /// untouched; only the aggregate is reduced.
    fn apply_rebate(&self, tax: Decimal, rebate: Decimal) -> Decimal {
        if rebate.is_zero() {
            return tax;
        }
        let credited = tax - rebate;
        if credited < Decimal::ZERO {
            warn!(
                tax = %tax,
                rebate = %rebate,
                "rebate exceeds computed tax; tax due floored at zero"
            );
            Decimal::ZERO
        } else {
            credited
        }
    }

    fn effective_rate_percent(&self, tax_due: Decimal, gross_income: Decimal) -> Decimal {
        if gross_income > Decimal::ZERO {
            round_half_up(tax_due / gross_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    }
}

/// Range label for a band: `"<previous upper + 1> - <upper or ∞>"`.
fn bracket_label(previous_upper: Decimal, bracket: &TaxBracket) -> String {
    let lower = group_thousands(previous_upper + Decimal::ONE);
    match bracket.upper_bound {
        Some(upper) => format!("{lower} - {}", group_thousands(upper)),
        None => format!("{lower} - ∞"),
    }
}
