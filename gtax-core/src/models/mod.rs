mod bracket;
mod calculation;
mod country;
mod relief;

pub use bracket::{BracketSchedule, ScheduleError, TaxBracket};
pub use calculation::{BracketLine, CalculationInput, CalculationResult, IncomePeriod};
pub use country::{CountryCode, CountryProfile};
pub use relief::{ReliefAmounts, ReliefPolicy};
