//! `gtax` - progressive income tax calculator for eight countries.
//!
//! Example:
//!
//! ```text
//! gtax --country nigeria --income 500000 --period monthly --pension 480000
//! gtax --country usa --income 60000 --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gtax_core::calculations::TaxCalculator;
use gtax_core::models::{CalculationInput, IncomePeriod};

mod format;
mod render;

/// Compute progressive income tax with a per-bracket breakdown.
#[derive(Parser, Debug)]
#[command(name = "gtax")]
#[command(version, about, long_about = None)]
struct Args {
    /// Country code: nigeria, usa, uk, canada, ghana, kenya, south-africa,
    /// australia
    #[arg(short, long)]
    country: String,

    /// Gross income for the selected period
    #[arg(short, long)]
    income: String,

    /// Period the income figure covers
    #[arg(short, long, value_enum, default_value_t = PeriodArg::Annual)]
    period: PeriodArg,

    /// Annual pension contribution (Nigeria only)
    #[arg(long)]
    pension: Option<String>,

    /// Annual National Housing Fund contribution (Nigeria only)
    #[arg(long)]
    nhf: Option<String>,

    /// Itemized deductions (countries other than Nigeria)
    #[arg(long)]
    deductions: Option<String>,

    /// Emit the result as JSON instead of formatted tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum PeriodArg {
    Monthly,
    Annual,
}

impl From<PeriodArg> for IncomePeriod {
    fn from(period: PeriodArg) -> Self {
        match period {
            PeriodArg::Monthly => IncomePeriod::Monthly,
            PeriodArg::Annual => IncomePeriod::Annual,
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let profile = gtax_data::lookup(&args.country)?;
    let income = format::parse_income(&args.income)?;

    let input = CalculationInput {
        country: profile.code,
        income,
        period: args.period.into(),
        pension: format::lenient_amount(args.pension.as_deref()),
        housing_fund: format::lenient_amount(args.nhf.as_deref()),
        itemized_deductions: format::lenient_amount(args.deductions.as_deref()),
    };

    debug!(?input, country = %profile.code, "computing tax");
    let result = TaxCalculator::new(profile)
        .calculate(&input)
        .context("tax calculation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::print_report(profile, &result);
    }

    Ok(())
}
