use contagion_core::ResultSeries;

use super::NumericalInstabilityError;

/// Indicates how the run terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Recorded every requested day.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// Hit a non-finite value and returned the days before it.
    ///
    /// Only produced when partial results were requested.
    Diverged(NumericalInstabilityError),
}

/// The result of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// The recorded days, starting with the seeded initial state.
    pub series: ResultSeries,
}

impl Solution {
    /// Returns `true` if every requested day was recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Returns the number of days recorded.
    #[must_use]
    pub fn days(&self) -> usize {
        self.series.len()
    }
}
