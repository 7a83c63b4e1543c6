//! Relief policies and their evaluation.
//!
//! Each country profile carries exactly one [`ReliefPolicy`] variant, and
//! each variant has its own evaluation arm. Adding a country is a data-table
//! edit plus, at most, one new variant here.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::calculation::CalculationInput;

/// Minimum flat component of the consolidated relief allowance (₦200,000).
const CRA_FLOOR: Decimal = dec!(200000);
/// Variable component compared against the floor: 1% of gross income.
const CRA_VARIABLE_RATE: Decimal = dec!(0.01);
/// Component always added on top: 20% of gross income.
const CRA_GROSS_RATE: Decimal = dec!(0.20);

/// How a country grants relief before (or against) the bracket computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliefPolicy {
    /// Consolidated relief allowance formula plus pension and housing fund
    /// contributions (Nigeria). The contributions also reduce net income as
    /// a non-tax deduction.
    ConsolidatedRelief,
    /// Fixed amount subtracted from gross income before bracket rates apply.
    StandardDeduction(Decimal),
    /// Fixed credit subtracted from the computed tax itself, floored at
    /// zero (South Africa's primary rebate).
    StandardRebate(Decimal),
    /// No automatic relief; only itemized deductions apply.
    None,
}

/// Amounts produced by evaluating a relief policy against an annual gross
/// income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReliefAmounts {
    /// Total subtracted from gross income to reach taxable income.
    pub pre_tax: Decimal,
    /// Credit applied against the computed tax, after the breakdown is
    /// built.
    pub rebate: Decimal,
    /// Contributions subtracted from net income in addition to their effect
    /// on the tax base. The double subtraction mirrors the original
    /// calculator and is intentional.
    pub non_tax_deduction: Decimal,
}

impl ReliefPolicy {
    /// Evaluates this policy for an annual gross income. Absent optional
    /// inputs count as zero.
    pub fn evaluate(&self, gross_income: Decimal, input: &CalculationInput) -> ReliefAmounts {
        match self {
            Self::ConsolidatedRelief => {
                let contributions =
                    input.pension.unwrap_or_default() + input.housing_fund.unwrap_or_default();
                ReliefAmounts {
                    pre_tax: consolidated_relief_allowance(gross_income) + contributions,
                    rebate: Decimal::ZERO,
                    non_tax_deduction: contributions,
                }
            }
            Self::StandardDeduction(amount) => ReliefAmounts {
                pre_tax: *amount + itemized(input),
                rebate: Decimal::ZERO,
                non_tax_deduction: Decimal::ZERO,
            },
            Self::StandardRebate(amount) => ReliefAmounts {
                pre_tax: itemized(input),
                rebate: *amount,
                non_tax_deduction: Decimal::ZERO,
            },
            Self::None => ReliefAmounts {
                pre_tax: itemized(input),
                rebate: Decimal::ZERO,
                non_tax_deduction: Decimal::ZERO,
            },
        }
    }
}

/// CRA = max(1% of gross, ₦200,000) + 20% of gross.
fn consolidated_relief_allowance(gross_income: Decimal) -> Decimal {
    let variable = (gross_income * CRA_VARIABLE_RATE).max(CRA_FLOOR);
    variable + gross_income * CRA_GROSS_RATE
}

fn itemized(input: &CalculationInput) -> Decimal {
    input.itemized_deductions.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::CountryCode;

    use super::*;

    fn input() -> CalculationInput {
        CalculationInput::annual(CountryCode::Nigeria, dec!(0))
    }

    #[test]
    fn cra_uses_floor_for_small_incomes() {
        // 1% of 6,000,000 is 60,000, below the 200,000 floor.
        let cra = consolidated_relief_allowance(dec!(6000000));

        assert_eq!(cra, dec!(200000) + dec!(1200000));
    }

    #[test]
    fn cra_uses_one_percent_for_large_incomes() {
        // 1% of 30,000,000 is 300,000, above the floor.
        let cra = consolidated_relief_allowance(dec!(30000000));

        assert_eq!(cra, dec!(300000) + dec!(6000000));
    }

    #[test]
    fn consolidated_relief_adds_contributions() {
        let mut input = input();
        input.pension = Some(dec!(480000));
        input.housing_fund = Some(dec!(150000));

        let amounts = ReliefPolicy::ConsolidatedRelief.evaluate(dec!(6000000), &input);

        assert_eq!(amounts.pre_tax, dec!(1400000) + dec!(630000));
        assert_eq!(amounts.non_tax_deduction, dec!(630000));
        assert_eq!(amounts.rebate, dec!(0));
    }

    #[test]
    fn consolidated_relief_defaults_missing_contributions_to_zero() {
        let amounts = ReliefPolicy::ConsolidatedRelief.evaluate(dec!(6000000), &input());

        assert_eq!(amounts.pre_tax, dec!(1400000));
        assert_eq!(amounts.non_tax_deduction, dec!(0));
    }

    #[test]
    fn consolidated_relief_ignores_itemized_deductions() {
        let mut input = input();
        input.itemized_deductions = Some(dec!(5000));

        let amounts = ReliefPolicy::ConsolidatedRelief.evaluate(dec!(6000000), &input);

        assert_eq!(amounts.pre_tax, dec!(1400000));
    }

    #[test]
    fn standard_deduction_adds_itemized() {
        let mut input = input();
        input.itemized_deductions = Some(dec!(2000));

        let amounts = ReliefPolicy::StandardDeduction(dec!(13850)).evaluate(dec!(60000), &input);

        assert_eq!(amounts.pre_tax, dec!(15850));
        assert_eq!(amounts.rebate, dec!(0));
        assert_eq!(amounts.non_tax_deduction, dec!(0));
    }

    #[test]
    fn standard_rebate_leaves_tax_base_untouched() {
        let amounts = ReliefPolicy::StandardRebate(dec!(17235)).evaluate(dec!(500000), &input());

        assert_eq!(amounts.pre_tax, dec!(0));
        assert_eq!(amounts.rebate, dec!(17235));
    }

    #[test]
    fn standard_rebate_still_applies_itemized_pre_tax() {
        let mut input = input();
        input.itemized_deductions = Some(dec!(10000));

        let amounts = ReliefPolicy::StandardRebate(dec!(17235)).evaluate(dec!(500000), &input);

        assert_eq!(amounts.pre_tax, dec!(10000));
    }

    #[test]
    fn none_policy_uses_only_itemized() {
        let mut input = input();
        input.itemized_deductions = Some(dec!(3000));

        let amounts = ReliefPolicy::None.evaluate(dec!(60000), &input);

        assert_eq!(amounts.pre_tax, dec!(3000));
        assert_eq!(amounts.rebate, dec!(0));
        assert_eq!(amounts.non_tax_deduction, dec!(0));
    }

    #[test]
    fn none_policy_defaults_to_zero() {
        let amounts = ReliefPolicy::None.evaluate(dec!(60000), &input());

        assert_eq!(amounts.pre_tax, dec!(0));
    }
}
