pub mod calculations;
pub mod models;

pub use calculations::{CalculationError, TaxCalculator};
pub use models::*;
