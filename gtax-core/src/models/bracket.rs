use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single marginal rate band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of the band; `None` marks the unbounded top band.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction in `[0, 1]`.
    pub rate: Decimal,
    /// Display label for the rate, e.g. `"17.5%"`.
    pub label: String,
}

/// Errors detected while validating a bracket schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule has no brackets at all.
    #[error("bracket schedule is empty")]
    Empty,

    /// The last bracket must cover all remaining income.
    #[error("last bracket must be unbounded")]
    BoundedLast,

    /// A non-final bracket has no upper bound.
    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeLast(usize),

    /// Upper bounds must strictly increase from one bracket to the next.
    #[error("bracket {0} does not increase the upper bound of the previous bracket")]
    NonIncreasingBound(usize),

    /// A marginal rate lies outside `[0, 1]`.
    #[error("bracket {index} has rate {rate} outside [0, 1]")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// Ordered sequence of marginal rate bands covering all income from zero
/// upward.
///
/// Construction validates the schedule, so any `BracketSchedule` in
/// circulation is non-empty, strictly increasing, and closed by a single
/// unbounded top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSchedule(Vec<TaxBracket>);

impl BracketSchedule {
    /// Validates and wraps a list of brackets.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the list is empty, the bounds do not
    /// strictly increase, a rate falls outside `[0, 1]`, or the unbounded
    /// band is missing or misplaced.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let last = brackets.len() - 1;
        let mut previous_upper: Option<Decimal> = None;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }

            match bracket.upper_bound {
                None if index != last => return Err(ScheduleError::UnboundedBeforeLast(index)),
                None => {}
                Some(upper) => {
                    if previous_upper.is_some_and(|previous| upper <= previous) {
                        return Err(ScheduleError::NonIncreasingBound(index));
                    }
                    previous_upper = Some(upper);
                }
            }
        }

        if brackets[last].upper_bound.is_some() {
            return Err(ScheduleError::BoundedLast);
        }

        Ok(Self(brackets))
    }

    /// The brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }

    /// Number of brackets in the schedule.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the schedule holds no brackets. Unreachable through
    /// `new`, but deserialized schedules are not re-validated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
