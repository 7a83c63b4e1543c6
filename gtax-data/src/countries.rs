//! Profile definitions for the eight supported countries.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use gtax_core::models::{
    BracketSchedule, CountryCode, CountryProfile, ReliefPolicy, TaxBracket,
};

/// Lookup failed because no profile exists for the requested code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown country code '{0}'")]
pub struct UnknownCountry(pub String);

static COUNTRIES: LazyLock<Vec<CountryProfile>> = LazyLock::new(|| {
    vec![
        nigeria(),
        united_states(),
        united_kingdom(),
        canada(),
        ghana(),
        kenya(),
        south_africa(),
        australia(),
    ]
});

/// All country profiles, in display order.
pub fn all() -> &'static [CountryProfile] {
    &COUNTRIES
}

/// Profile for a known country code.
pub fn profile(code: CountryCode) -> &'static CountryProfile {
    all()
        .iter()
        .find(|profile| profile.code == code)
        .expect("every CountryCode variant has a profile")
}

/// Resolves a country code string to its profile.
///
/// Codes are matched case-insensitively after trimming whitespace.
///
/// # Errors
///
/// Returns [`UnknownCountry`] when the code matches none of the supported
/// countries.
pub fn lookup(code: &str) -> Result<&'static CountryProfile, UnknownCountry> {
    CountryCode::parse(code.trim().to_ascii_lowercase().as_str())
        .map(profile)
        .ok_or_else(|| UnknownCountry(code.to_string()))
}

fn bounded(upper: Decimal, rate: Decimal, label: &str) -> TaxBracket {
    TaxBracket {
        upper_bound: Some(upper),
        rate,
        label: label.to_string(),
    }
}

fn unbounded(rate: Decimal, label: &str) -> TaxBracket {
    TaxBracket {
        upper_bound: None,
        rate,
        label: label.to_string(),
    }
}

fn schedule(brackets: Vec<TaxBracket>) -> BracketSchedule {
    // Static values; validity is pinned by the tests below.
    BracketSchedule::new(brackets).expect("static schedule is valid")
}

fn nigeria() -> CountryProfile {
    CountryProfile {
        code: CountryCode::Nigeria,
        display_name: "Nigeria".to_string(),
        currency_symbol: "₦".to_string(),
        tax_label: "PAYE Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(300000), dec!(0.07), "7%"),
            bounded(dec!(600000), dec!(0.11), "11%"),
            bounded(dec!(1100000), dec!(0.15), "15%"),
            bounded(dec!(1600000), dec!(0.19), "19%"),
            bounded(dec!(3200000), dec!(0.21), "21%"),
            unbounded(dec!(0.24), "24%"),
        ]),
        relief_policy: ReliefPolicy::ConsolidatedRelief,
        relief_note: Some(
            "Consolidated Relief Allowance (CRA) is calculated as the higher of \
             1% of gross income or ₦200,000, plus 20% of gross income."
                .to_string(),
        ),
    }
}

fn united_states() -> CountryProfile {
    CountryProfile {
        code: CountryCode::UnitedStates,
        display_name: "United States".to_string(),
        currency_symbol: "$".to_string(),
        tax_label: "Federal Income Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(11000), dec!(0.10), "10%"),
            bounded(dec!(44725), dec!(0.12), "12%"),
            bounded(dec!(95375), dec!(0.22), "22%"),
            bounded(dec!(182100), dec!(0.24), "24%"),
            bounded(dec!(231250), dec!(0.32), "32%"),
            bounded(dec!(578125), dec!(0.35), "35%"),
            unbounded(dec!(0.37), "37%"),
        ]),
        relief_policy: ReliefPolicy::StandardDeduction(dec!(13850)),
        relief_note: Some("Standard Deduction: $13,850 is automatically applied.".to_string()),
    }
}

fn united_kingdom() -> CountryProfile {
    CountryProfile {
        code: CountryCode::UnitedKingdom,
        display_name: "United Kingdom".to_string(),
        currency_symbol: "£".to_string(),
        tax_label: "Income Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(12570), dec!(0.00), "0%"),
            bounded(dec!(50270), dec!(0.20), "20%"),
            bounded(dec!(125140), dec!(0.40), "40%"),
            unbounded(dec!(0.45), "45%"),
        ]),
        relief_policy: ReliefPolicy::None,
        relief_note: None,
    }
}

fn canada() -> CountryProfile {
    CountryProfile {
        code: CountryCode::Canada,
        display_name: "Canada".to_string(),
        currency_symbol: "$".to_string(),
        tax_label: "Federal Income Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(53359), dec!(0.15), "15%"),
            bounded(dec!(106717), dec!(0.205), "20.5%"),
            bounded(dec!(165430), dec!(0.26), "26%"),
            bounded(dec!(235675), dec!(0.29), "29%"),
            unbounded(dec!(0.33), "33%"),
        ]),
        relief_policy: ReliefPolicy::StandardDeduction(dec!(15000)),
        relief_note: Some("Basic Personal Amount: $15,000 is automatically applied.".to_string()),
    }
}

fn ghana() -> CountryProfile {
    CountryProfile {
        code: CountryCode::Ghana,
        display_name: "Ghana".to_string(),
        currency_symbol: "₵".to_string(),
        tax_label: "Income Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(5220), dec!(0.00), "0%"),
            bounded(dec!(7320), dec!(0.05), "5%"),
            bounded(dec!(9360), dec!(0.10), "10%"),
            bounded(dec!(41400), dec!(0.175), "17.5%"),
            bounded(dec!(242400), dec!(0.25), "25%"),
            unbounded(dec!(0.30), "30%"),
        ]),
        relief_policy: ReliefPolicy::None,
        relief_note: None,
    }
}

fn kenya() -> CountryProfile {
    CountryProfile {
        code: CountryCode::Kenya,
        display_name: "Kenya".to_string(),
        currency_symbol: "KSh".to_string(),
        tax_label: "PAYE Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(288000), dec!(0.10), "10%"),
            bounded(dec!(388000), dec!(0.25), "25%"),
            bounded(dec!(6000000), dec!(0.30), "30%"),
            unbounded(dec!(0.35), "35%"),
        ]),
        relief_policy: ReliefPolicy::StandardDeduction(dec!(28800)),
        relief_note: Some("Personal Relief: KSh28,800 is automatically applied.".to_string()),
    }
}

fn south_africa() -> CountryProfile {
    CountryProfile {
        code: CountryCode::SouthAfrica,
        display_name: "South Africa".to_string(),
        currency_symbol: "R".to_string(),
        tax_label: "Income Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(237100), dec!(0.18), "18%"),
            bounded(dec!(370500), dec!(0.26), "26%"),
            bounded(dec!(512800), dec!(0.31), "31%"),
            bounded(dec!(673000), dec!(0.36), "36%"),
            bounded(dec!(857900), dec!(0.39), "39%"),
            bounded(dec!(1817000), dec!(0.41), "41%"),
            unbounded(dec!(0.45), "45%"),
        ]),
        relief_policy: ReliefPolicy::StandardRebate(dec!(17235)),
        relief_note: Some(
            "Primary Rebate: R17,235 is automatically deducted from your tax liability."
                .to_string(),
        ),
    }
}

fn australia() -> CountryProfile {
    CountryProfile {
        code: CountryCode::Australia,
        display_name: "Australia".to_string(),
        currency_symbol: "$".to_string(),
        tax_label: "Income Tax".to_string(),
        schedule: schedule(vec![
            bounded(dec!(18200), dec!(0.00), "0%"),
            bounded(dec!(45000), dec!(0.19), "19%"),
            bounded(dec!(120000), dec!(0.325), "32.5%"),
            bounded(dec!(180000), dec!(0.37), "37%"),
            unbounded(dec!(0.45), "45%"),
        ]),
        relief_policy: ReliefPolicy::None,
        relief_note: None,
    }
}
