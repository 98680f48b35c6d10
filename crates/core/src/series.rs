//! Per-compartment time series and peak analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Compartment, Compartments};

/// The day and value of a series maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Peak {
    pub day: usize,
    pub value: f64,
}

/// Returns the day index and value of the maximum of `series`.
///
/// Ties resolve to the first (lowest-index) occurrence. NaN entries are
/// skipped, and an empty (or all-NaN) series has no peak.
///
/// ```
/// use contagion_core::{Peak, peak_day};
///
/// let peak = peak_day(&[0.0, 1.0, 3.0, 7.0, 7.0, 2.0, 0.0]);
/// assert_eq!(peak, Some(Peak { day: 3, value: 7.0 }));
/// ```
#[must_use]
pub fn peak_day(series: &[f64]) -> Option<Peak> {
    series
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| !value.is_nan())
        .fold(None, |best, (day, value)| match best {
            Some(Peak { value: max, .. }) if max >= value => best,
            _ => Some(Peak { day, value }),
        })
}

/// The completed output of a simulation run.
///
/// Holds one sequence per model compartment plus the total population, all
/// indexed by day. A `ResultSeries` is read-only once built; consumers get
/// slices and cannot mutate the data.
///
/// Deserialized series are checked: every compartment must carry one value
/// per day and each total must equal the sum of that day's compartments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawSeries")
)]
pub struct ResultSeries {
    compartments: Vec<Compartment>,
    values: Vec<Vec<f64>>,
    total: Vec<f64>,
}

/// Reasons a series read from outside the engine is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidSeriesError {
    #[error("{compartments} compartments named but {series} series given")]
    CompartmentCount { compartments: usize, series: usize },

    #[error("{compartment} series has {found} days, expected {expected}")]
    Length {
        compartment: Compartment,
        expected: usize,
        found: usize,
    },

    #[error("total on day {day} is {total}, but compartments sum to {sum}")]
    Total { day: usize, total: f64, sum: f64 },
}

impl ResultSeries {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn checked(
        compartments: Vec<Compartment>,
        values: Vec<Vec<f64>>,
        total: Vec<f64>,
    ) -> Result<Self, InvalidSeriesError> {
        if compartments.len() != values.len() {
            return Err(InvalidSeriesError::CompartmentCount {
                compartments: compartments.len(),
                series: values.len(),
            });
        }

        let days = total.len();
        for (&compartment, series) in compartments.iter().zip(&values) {
            if series.len() != days {
                return Err(InvalidSeriesError::Length {
                    compartment,
                    expected: days,
                    found: series.len(),
                });
            }
        }

        for (day, &day_total) in total.iter().enumerate() {
            let sum: f64 = values.iter().map(|series| series[day]).sum();
            let tolerance = 1e-9 * sum.abs().max(1.0);
            let consistent = (day_total - sum).abs() <= tolerance;
            if !consistent {
                return Err(InvalidSeriesError::Total {
                    day,
                    total: day_total,
                    sum,
                });
            }
        }

        Ok(Self {
            compartments,
            values,
            total,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeries {
    compartments: Vec<Compartment>,
    values: Vec<Vec<f64>>,
    total: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSeries> for ResultSeries {
    type Error = InvalidSeriesError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Self::checked(raw.compartments, raw.values, raw.total)
    }
}

impl ResultSeries {
    /// Returns the number of days recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total.len()
    }

    /// Returns `true` if no day was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Returns the compartments carried by this series, in model order.
    #[must_use]
    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    /// Returns the daily values of `compartment`, if the model carries it.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> Option<&[f64]> {
        self.compartments
            .iter()
            .position(|&c| c == compartment)
            .map(|index| self.values[index].as_slice())
    }

    #[must_use]
    pub fn susceptible(&self) -> &[f64] {
        self.series(Compartment::Susceptible).unwrap_or_default()
    }

    /// Returns the exposed series, which only SEIR-type models carry.
    #[must_use]
    pub fn exposed(&self) -> Option<&[f64]> {
        self.series(Compartment::Exposed)
    }

    #[must_use]
    pub fn infected(&self) -> &[f64] {
        self.series(Compartment::Infected).unwrap_or_default()
    }

    #[must_use]
    pub fn recovered(&self) -> &[f64] {
        self.series(Compartment::Recovered).unwrap_or_default()
    }

    /// Returns the total population per day, recomputed as the sum of all
    /// compartments rather than integrated separately.
    #[must_use]
    pub fn total(&self) -> &[f64] {
        &self.total
    }

    /// Returns the value of `compartment` on `day`.
    #[must_use]
    pub fn value(&self, compartment: Compartment, day: usize) -> Option<f64> {
        self.series(compartment)?.get(day).copied()
    }

    /// Returns the peak of `compartment`.
    #[must_use]
    pub fn peak(&self, compartment: Compartment) -> Option<Peak> {
        peak_day(self.series(compartment)?)
    }

    /// Returns the peak of the total population.
    #[must_use]
    pub fn total_peak(&self) -> Option<Peak> {
        peak_day(&self.total)
    }

    /// Returns the peak of every compartment, in model order.
    #[must_use]
    pub fn peaks(&self) -> Vec<(Compartment, Peak)> {
        self.compartments
            .iter()
            .zip(&self.values)
            .filter_map(|(&c, values)| peak_day(values).map(|peak| (c, peak)))
            .collect()
    }
}

/// Builds a [`ResultSeries`] one day at a time.
///
/// Each call to [`record`](Self::record) appends exactly one day; the series
/// is handed over by [`finish`](Self::finish) and cannot be written again.
#[derive(Debug)]
pub struct SeriesRecorder {
    series: ResultSeries,
}

impl SeriesRecorder {
    /// Creates a recorder for the compartments of state type `S`.
    #[must_use]
    pub fn new<S: Compartments>(capacity: usize) -> Self {
        let compartments = S::COMPARTMENTS.to_vec();
        let values = compartments
            .iter()
            .map(|_| Vec::with_capacity(capacity))
            .collect();

        Self {
            series: ResultSeries {
                compartments,
                values,
                total: Vec::with_capacity(capacity),
            },
        }
    }

    /// Appends `state` as the next day.
    pub fn record<S: Compartments>(&mut self, state: &S) {
        debug_assert_eq!(S::COMPARTMENTS, self.series.compartments.as_slice());

        for (&c, values) in S::COMPARTMENTS.iter().zip(&mut self.series.values) {
            values.push(state.value(c));
        }
        self.series.total.push(state.total());
    }

    /// Returns the number of days recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if no day has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Consumes the recorder and returns the finished series.
    #[must_use]
    pub fn finish(self) -> ResultSeries {
        self.series
    }
}
