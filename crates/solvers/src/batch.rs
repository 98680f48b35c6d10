use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    Scenario,
    simulate::{Error, Solution},
};

/// Runs independent scenarios and returns their results in input order.
///
/// Each run is a pure function of its scenario, so runs share nothing and
/// need no locking. With the `parallel` feature (on by default) runs are
/// spread across the rayon thread pool; otherwise they run one after another.
///
/// A failing run does not affect the others.
#[must_use]
pub fn simulate_batch(scenarios: &[Scenario]) -> Vec<Result<Solution, Error>> {
    debug!("running batch of {} scenarios", scenarios.len());

    #[cfg(feature = "parallel")]
    let results = scenarios.par_iter().map(Scenario::run).collect();

    #[cfg(not(feature = "parallel"))]
    let results = scenarios.iter().map(Scenario::run).collect();

    results
}
