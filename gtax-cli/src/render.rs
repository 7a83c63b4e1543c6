//! Terminal rendering of a calculation result.

use rust_decimal::Decimal;
use tabled::{Table, Tabled, settings::Style};

use gtax_core::models::{CalculationResult, CountryProfile};

use crate::format::{money, percent};

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Bracket")]
    bracket: String,
    #[tabled(rename = "Taxable")]
    taxable: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

fn breakdown_rows(result: &CalculationResult) -> Vec<BreakdownRow> {
    let symbol = result.currency_symbol.as_str();
    result
        .breakdown
        .iter()
        .map(|line| BreakdownRow {
            bracket: format!("{symbol}{}", line.bracket),
            taxable: money(symbol, line.income),
            rate: percent(line.rate),
            tax: money(symbol, line.tax),
        })
        .collect()
}

/// Prints the summary, bracket breakdown, and monthly figures.
pub fn print_report(profile: &CountryProfile, result: &CalculationResult) {
    let symbol = result.currency_symbol.as_str();
    let twelve = Decimal::from(12);

    let row = |label: &str, value: String| println!("  {label:<20} {value}");

    println!();
    println!("{} - {}", profile.display_name, result.tax_label);
    println!();
    row("Gross Income", money(symbol, result.gross_income));
    row("Taxable Income", money(symbol, result.taxable_income));
    row(&result.tax_label, money(symbol, result.tax_due));
    row(
        "Effective Rate",
        format!("{}%", result.effective_rate_percent),
    );
    row("Net Income", money(symbol, result.net_income));

    if let Some(note) = &profile.relief_note {
        println!();
        println!("  Note: {note}");
    }

    if !result.breakdown.is_empty() {
        println!();
        println!("Tax Bracket Breakdown");
        let table = Table::new(breakdown_rows(result))
            .with(Style::rounded())
            .to_string();
        println!("{table}");
    }

    println!();
    println!("Monthly Breakdown");
    row("Gross Monthly", money(symbol, result.gross_income / twelve));
    row("Monthly Tax", money(symbol, result.tax_due / twelve));
    row("Net Monthly", money(symbol, result.net_income / twelve));
    println!();
}
