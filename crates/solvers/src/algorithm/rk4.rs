use contagion_core::{CompartmentModel, SimulationClock, StepIntegrable};

use super::StepAlgorithm;

/// Classical fourth-order Runge-Kutta.
///
/// Each day is `substeps_per_day` steps of size `h = dt`:
///
/// ```text
/// k1 = f(x)
/// k2 = f(x + h/2 * k1)
/// k3 = f(x + h/2 * k2)
/// k4 = f(x + h * k3)
/// x_next = x + h * (k1 + 2*k2 + 2*k3 + k4) / 6
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Rk4 {
    /// Takes one Runge-Kutta step of size `h` from `x`.
    pub fn step<M: CompartmentModel>(model: &M, x: &M::State, h: f64) -> M::State {
        let k1 = model.derivative(x);
        let k2 = model.derivative(&x.step(k1, 0.5 * h));
        let k3 = model.derivative(&x.step(k2, 0.5 * h));
        let k4 = model.derivative(&x.step(k3, h));

        x.step(k1, h / 6.0)
            .step(k2, h / 3.0)
            .step(k3, h / 3.0)
            .step(k4, h / 6.0)
    }
}

impl StepAlgorithm for Rk4 {
    fn name(&self) -> &str {
        "rk4"
    }

    fn advance<M: CompartmentModel>(
        &self,
        model: &M,
        state: &M::State,
        clock: &SimulationClock,
    ) -> M::State {
        let h = clock.dt();
        (0..clock.substeps_per_day()).fold(*state, |x, _| Self::step(model, &x, h))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use contagion_core::{Compartment, Compartments, ModelParameters};
    use contagion_models::Sir;

    use super::*;

    /// SIR with beta = 0 reduces to `I' = -gamma * I`, so `I(t) = I0 * exp(-gamma t)`.
    fn pure_recovery() -> Sir {
        Sir::new(ModelParameters {
            population: 1000.0,
            initial_infected: 100.0,
            transmission_rate: 0.0,
            recovery_rate: 0.5,
            ..ModelParameters::default()
        })
        .unwrap()
    }

    #[test]
    fn matches_exponential_decay() {
        let model = pure_recovery();
        let clock = SimulationClock::new(10, 1).unwrap();

        let next = Rk4.advance(&model, &model.initial_state(), &clock);

        // A single full-day step is still within 0.1% of the exact decay.
        assert_relative_eq!(next.infected, 100.0 * (-0.5_f64).exp(), max_relative = 1e-3);
        assert_relative_eq!(next.total(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn combines_stages_with_classical_weights() {
        let model = pure_recovery();
        let x = model.initial_state();
        let h = 1.0;

        // For I' = -g I the stages are closed form.
        let g = 0.5;
        let i = x.value(Compartment::Infected);
        let k1 = -g * i;
        let k2 = -g * (i + 0.5 * h * k1);
        let k3 = -g * (i + 0.5 * h * k2);
        let k4 = -g * (i + h * k3);
        let expected = i + h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;

        let next = Rk4::step(&model, &x, h);

        assert_relative_eq!(next.infected, expected, max_relative = 1e-14);
    }

    #[test]
    fn error_shrinks_with_substeps() {
        let model = pure_recovery();
        let exact = 100.0 * (-0.5_f64).exp();

        let coarse = Rk4.advance(
            &model,
            &model.initial_state(),
            &SimulationClock::new(1, 1).unwrap(),
        );
        let fine = Rk4.advance(
            &model,
            &model.initial_state(),
            &SimulationClock::new(1, 4).unwrap(),
        );

        let fine_error = (fine.infected - exact).abs();
        let coarse_error = (coarse.infected - exact).abs();
        assert!(fine_error < coarse_error / 100.0);
    }
}
