#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The simulation horizon and its sub-day resolution.
///
/// A run produces one point per day for `days` days, and each day is advanced
/// in `substeps_per_day` integration steps of `dt = 1 / substeps_per_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawClock", into = "RawClock")
)]
pub struct SimulationClock {
    days: usize,
    substeps_per_day: usize,
}

impl Default for SimulationClock {
    /// One year at hourly resolution.
    fn default() -> Self {
        Self {
            days: 365,
            substeps_per_day: 24,
        }
    }
}

impl SimulationClock {
    /// Creates a clock for `days` daily points with `substeps_per_day` steps each.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is zero.
    pub fn new(days: usize, substeps_per_day: usize) -> Result<Self, ConfigError> {
        if days == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if substeps_per_day == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }

        Ok(Self {
            days,
            substeps_per_day,
        })
    }

    /// Returns the number of daily points in a run.
    #[must_use]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Returns the number of integration steps per day.
    #[must_use]
    pub fn substeps_per_day(&self) -> usize {
        self.substeps_per_day
    }

    /// Returns the integration step size in days.
    #[must_use]
    pub fn dt(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let substeps = self.substeps_per_day as f64;
        1.0 / substeps
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClock {
    days: usize,
    #[serde(default = "default_substeps")]
    substeps_per_day: usize,
}

#[cfg(feature = "serde")]
fn default_substeps() -> usize {
    SimulationClock::default().substeps_per_day
}

#[cfg(feature = "serde")]
impl TryFrom<RawClock> for SimulationClock {
    type Error = ConfigError;

    fn try_from(raw: RawClock) -> Result<Self, Self::Error> {
        Self::new(raw.days, raw.substeps_per_day)
    }
}

#[cfg(feature = "serde")]
impl From<SimulationClock> for RawClock {
    fn from(clock: SimulationClock) -> Self {
        Self {
            days: clock.days,
            substeps_per_day: clock.substeps_per_day,
        }
    }
}
