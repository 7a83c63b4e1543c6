//! Tax computation over a country's bracket schedule.

pub mod common;
pub mod engine;

pub use engine::{CalculationError, TaxCalculator};
