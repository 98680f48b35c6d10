use contagion_core::{
    Compartment, CompartmentModel, Compartments, ConfigError, ModelParameters, StepIntegrable,
};

/// Population counts of the SIR model at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SirState {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl StepIntegrable<f64> for SirState {
    type Derivative = Self;

    fn step(&self, derivative: Self, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + derivative.susceptible * dt,
            infected: self.infected + derivative.infected * dt,
            recovered: self.recovered + derivative.recovered * dt,
        }
    }
}

impl Compartments for SirState {
    const COMPARTMENTS: &'static [Compartment] = &[
        Compartment::Susceptible,
        Compartment::Infected,
        Compartment::Recovered,
    ];

    fn value(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Exposed => 0.0,
            Compartment::Infected => self.infected,
            Compartment::Recovered => self.recovered,
        }
    }
}

/// The Susceptible-Infected-Recovered model.
///
/// ```text
/// dS/dt = -beta * S * I / N
/// dI/dt =  beta * S * I / N - gamma * I
/// dR/dt =  gamma * I
/// ```
///
/// Births, deaths, incubation, and the exposed fraction are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Sir {
    params: ModelParameters,
}

impl Sir {
    /// Creates a SIR model from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    pub fn new(params: ModelParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl CompartmentModel for Sir {
    type State = SirState;

    fn name(&self) -> &str {
        "SIR"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn initial_state(&self) -> SirState {
        let infected = self.params.initial_infected;
        SirState {
            susceptible: self.params.population - infected,
            infected,
            recovered: 0.0,
        }
    }

    fn derivative(&self, state: &SirState) -> SirState {
        let ModelParameters {
            population: n,
            transmission_rate: beta,
            recovery_rate: gamma,
            ..
        } = self.params;

        let incidence = beta * state.susceptible * state.infected / n;
        let recovery = gamma * state.infected;

        SirState {
            susceptible: -incidence,
            infected: incidence - recovery,
            recovered: recovery,
        }
    }
}
