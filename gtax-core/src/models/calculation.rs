use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::country::CountryCode;

/// Period the supplied income figure covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomePeriod {
    Monthly,
    Annual,
}

/// Validated input for one tax computation.
///
/// The boundary that builds this struct (CLI, HTTP handler, ...) is
/// responsible for rejecting negative or unparseable income; absent optional
/// amounts are treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub country: CountryCode,
    /// Gross income for the selected period. Must be non-negative.
    pub income: Decimal,
    pub period: IncomePeriod,
    /// Annual pension contribution (consolidated-relief countries only).
    pub pension: Option<Decimal>,
    /// Annual housing fund contribution (consolidated-relief countries only).
    pub housing_fund: Option<Decimal>,
    /// Itemized deductions added on top of any automatic relief.
    pub itemized_deductions: Option<Decimal>,
}

impl CalculationInput {
    /// Input with an annual income figure and no optional reliefs.
    pub fn annual(country: CountryCode, income: Decimal) -> Self {
        Self {
            country,
            income,
            period: IncomePeriod::Annual,
            pension: None,
            housing_fund: None,
            itemized_deductions: None,
        }
    }
}

/// One row of the per-bracket breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// Income range covered by the band, e.g. `"300,001 - 600,000"` or
    /// `"3,200,001 - ∞"` for the top band.
    pub bracket: String,
    /// Portion of taxable income falling inside this band. Never rounded,
    /// so all lines sum exactly to the taxable income.
    pub income: Decimal,
    /// Marginal rate applied to this band, as a fraction.
    pub rate: Decimal,
    /// Tax charged on this band, rounded to two decimal places.
    pub tax: Decimal,
}

/// Result of one tax computation. Produced fresh per invocation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Annualized gross income.
    pub gross_income: Decimal,
    /// Gross income minus pre-tax reliefs, floored at zero.
    pub taxable_income: Decimal,
    /// Total tax after any rebate, floored at zero.
    pub tax_due: Decimal,
    /// `tax_due / gross_income × 100`, or zero for zero gross income.
    pub effective_rate_percent: Decimal,
    /// Annual take-home pay: gross minus tax minus non-tax deductions.
    pub net_income: Decimal,
    /// Per-bracket breakdown in ascending band order.
    pub breakdown: Vec<BracketLine>,
    /// Currency symbol of the country profile, for display.
    pub currency_symbol: String,
    /// Tax label of the country profile, for display.
    pub tax_label: String,
}
