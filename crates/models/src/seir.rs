use contagion_core::{
    Compartment, CompartmentModel, Compartments, ConfigError, ModelParameters, StepIntegrable,
};

/// Population counts of the SEIR model at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeirState {
    pub susceptible: f64,
    pub exposed: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl StepIntegrable<f64> for SeirState {
    type Derivative = Self;

    fn step(&self, derivative: Self, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + derivative.susceptible * dt,
            exposed: self.exposed + derivative.exposed * dt,
            infected: self.infected + derivative.infected * dt,
            recovered: self.recovered + derivative.recovered * dt,
        }
    }
}

impl Compartments for SeirState {
    const COMPARTMENTS: &'static [Compartment] = &[
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infected,
        Compartment::Recovered,
    ];

    fn value(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Exposed => self.exposed,
            Compartment::Infected => self.infected,
            Compartment::Recovered => self.recovered,
        }
    }
}

/// The Susceptible-Exposed-Infected-Recovered model with vital dynamics.
///
/// ```text
/// dS/dt = lambda * N - mu * S - beta * S * I / N
/// dE/dt = beta * S * I / N - (mu + alpha) * E
/// dI/dt = alpha * E - (gamma + mu) * I
/// dR/dt = gamma * I - mu * R
/// ```
///
/// With `lambda = mu = 0` the total population is conserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Seir {
    params: ModelParameters,
}

impl Seir {
    /// Creates a SEIR model from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation, or if the seeded
    /// exposed and infected counts together exceed the population.
    pub fn new(params: ModelParameters) -> Result<Self, ConfigError> {
        let model = Self { params };
        model.validate()?;
        Ok(model)
    }
}

impl CompartmentModel for Seir {
    type State = SeirState;

    fn name(&self) -> &str {
        "SEIR"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;

        let exposed = self.params.exposed_fraction * self.params.initial_infected;
        if exposed + self.params.initial_infected > self.params.population {
            return Err(ConfigError::SeedExceedsPopulation {
                exposed,
                population: self.params.population,
            });
        }

        Ok(())
    }

    fn initial_state(&self) -> SeirState {
        let infected = self.params.initial_infected;
        let exposed = self.params.exposed_fraction * infected;

        SeirState {
            susceptible: self.params.population - exposed - infected,
            exposed,
            infected,
            recovered: 0.0,
        }
    }

    fn derivative(&self, state: &SeirState) -> SeirState {
        let ModelParameters {
            population: n,
            transmission_rate: beta,
            recovery_rate: gamma,
            incubation_rate: alpha,
            birth_rate: lambda,
            death_rate: mu,
            ..
        } = self.params;

        let SeirState {
            susceptible: s,
            exposed: e,
            infected: i,
            recovered: r,
        } = *state;

        let incidence = beta * s * i / n;

        SeirState {
            susceptible: lambda * n - mu * s - incidence,
            exposed: incidence - (mu + alpha) * e,
            infected: alpha * e - (gamma + mu) * i,
            recovered: gamma * i - mu * r,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use contagion_core::Mode;

    use super::*;

    fn params() -> ModelParameters {
        ModelParameters {
            population: 300_000.0,
            initial_infected: 10.0,
            transmission_rate: 0.2,
            recovery_rate: 0.07,
            incubation_rate: 0.2,
            birth_rate: 0.005,
            death_rate: 0.001,
            exposed_fraction: 0.1,
        }
    }

    #[test]
    fn seeds_exposed_from_infected() {
        let state = Seir::new(params()).unwrap().initial_state();

        assert_relative_eq!(state.exposed, 1.0);
        assert_relative_eq!(state.susceptible, 299_989.0);
        assert_relative_eq!(state.infected, 10.0);
        assert_relative_eq!(state.recovered, 0.0);
        assert_relative_eq!(state.total(), 300_000.0);
    }

    #[test]
    fn derivative_matches_rate_equations() {
        let model = Seir::new(params()).unwrap();
        let state = SeirState {
            susceptible: 200_000.0,
            exposed: 30_000.0,
            infected: 60_000.0,
            recovered: 10_000.0,
        };

        let d = model.derivative(&state);

        let incidence = 0.2 * 200_000.0 * 60_000.0 / 300_000.0;
        assert_relative_eq!(
            d.susceptible,
            0.005 * 300_000.0 - 0.001 * 200_000.0 - incidence
        );
        assert_relative_eq!(d.exposed, incidence - (0.001 + 0.2) * 30_000.0);
        assert_relative_eq!(d.infected, 0.2 * 30_000.0 - (0.07 + 0.001) * 60_000.0);
        assert_relative_eq!(d.recovered, 0.07 * 60_000.0 - 0.001 * 10_000.0);
    }

    #[test]
    fn closed_population_has_zero_net_flow() {
        let model = Seir::new(ModelParameters {
            birth_rate: 0.0,
            death_rate: 0.0,
            ..params()
        })
        .unwrap();
        let state = SeirState {
            susceptible: 250_000.0,
            exposed: 20_000.0,
            infected: 20_000.0,
            recovered: 10_000.0,
        };

        let d = model.derivative(&state);

        assert_relative_eq!(d.total(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn value_mode_scales_derivative_by_dt() {
        let model = Seir::new(params()).unwrap();
        let state = model.initial_state();
        let dt = 1.0 / 24.0;

        let next = model.evaluate(&state, Mode::Value, dt);
        let d = model.derivative(&state);

        assert_relative_eq!(next.susceptible, state.susceptible + d.susceptible * dt);
        assert_relative_eq!(next.exposed, state.exposed + d.exposed * dt);
        assert_relative_eq!(next.infected, state.infected + d.infected * dt);
        assert_relative_eq!(next.recovered, state.recovered + d.recovered * dt);
    }

    #[test]
    fn rejects_seed_larger_than_population() {
        let err = Seir::new(ModelParameters {
            population: 100.0,
            initial_infected: 60.0,
            exposed_fraction: 1.0,
            ..params()
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::SeedExceedsPopulation { .. }));
    }
}
