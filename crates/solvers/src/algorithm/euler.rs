use contagion_core::{CompartmentModel, SimulationClock};

use super::StepAlgorithm;

/// Explicit (forward) Euler.
///
/// Each day is `substeps_per_day` successive model substeps:
///
/// ```text
/// x[t + dt] = x[t] + dt * f(x[t])
/// ```
///
/// Local truncation error is `O(dt²)` per substep; there is no error control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl StepAlgorithm for Euler {
    fn name(&self) -> &str {
        "euler"
    }

    fn advance<M: CompartmentModel>(
        &self,
        model: &M,
        state: &M::State,
        clock: &SimulationClock,
    ) -> M::State {
        let dt = clock.dt();
        (0..clock.substeps_per_day()).fold(*state, |x, _| model.apply_step(&x, dt))
    }
}
