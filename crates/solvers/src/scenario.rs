#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use contagion_core::{ModelParameters, SimulationClock};
use contagion_models::{ModelKind, Seir, Sir};

use crate::{
    Method,
    simulate::{Config, Error, Solution, simulate},
};

/// Everything one simulation run needs.
///
/// A scenario is plain data: it can be built in code or deserialized from a
/// configuration file, and is validated when it runs.
///
/// ```
/// use contagion_core::SimulationClock;
/// use contagion_models::ModelKind;
/// use contagion_solvers::{Method, Scenario};
///
/// let scenario = Scenario {
///     model: ModelKind::Seir,
///     method: Method::Rk4,
///     clock: SimulationClock::new(90, 24).unwrap(),
///     ..Scenario::default()
/// };
///
/// let solution = scenario.run().unwrap();
/// assert_eq!(solution.series.len(), 90);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Scenario {
    pub model: ModelKind,
    pub method: Method,
    pub clock: SimulationClock,
    pub parameters: ModelParameters,
    pub config: Config,
}

impl Scenario {
    /// Runs the scenario without an observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the run diverges.
    pub fn run(&self) -> Result<Solution, Error> {
        match self.model {
            ModelKind::Sir => {
                let model = Sir::new(self.parameters)?;
                simulate(&model, &self.method, &self.clock, &self.config, ())
            }
            ModelKind::Seir => {
                let model = Seir::new(self.parameters)?;
                simulate(&model, &self.method, &self.clock, &self.config, ())
            }
        }
    }
}
