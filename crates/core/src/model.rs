use crate::{Compartments, ConfigError, Mode, ModelParameters, StepIntegrable};

/// A compartmental disease model defined by its rate equations.
///
/// Implementors provide the instantaneous derivative of every compartment and
/// the seeded state at `t = 0`. Rate parameters are fixed when the model is
/// built and are never changed by the engine, so a model can be shared freely
/// across threads and runs.
pub trait CompartmentModel {
    /// The state this model evolves, such as `(S, I, R)`.
    type State: Compartments;

    /// Returns a short identifier for logs (`"SIR"`, `"SEIR"`).
    fn name(&self) -> &str;

    /// Returns the parameters the model was built with.
    fn parameters(&self) -> &ModelParameters;

    /// Checks that the model can be run.
    ///
    /// The default implementation validates [`parameters`](Self::parameters).
    /// Models with extra constraints on their seeding override this.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    fn validate(&self) -> Result<(), ConfigError> {
        self.parameters().validate()
    }

    /// Returns the seeded state at day 0.
    fn initial_state(&self) -> Self::State;

    /// Returns the rate of change per day of every compartment at `state`.
    #[must_use]
    fn derivative(&self, state: &Self::State) -> Self::State;

    /// Returns the state after one explicit Euler substep of `dt` days.
    ///
    /// The default implementation computes `state + dt * derivative(state)`.
    #[must_use]
    fn apply_step(&self, state: &Self::State, dt: f64) -> Self::State {
        state.step(self.derivative(state), dt)
    }

    /// Evaluates the model at `state` in the requested mode.
    ///
    /// `dt` is used only in [`Mode::Value`].
    #[must_use]
    fn evaluate(&self, state: &Self::State, mode: Mode, dt: f64) -> Self::State {
        match mode {
            Mode::Value => self.apply_step(state, dt),
            Mode::Derivative => self.derivative(state),
        }
    }
}
