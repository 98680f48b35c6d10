use contagion_core::{Compartment, ConfigError};
use thiserror::Error;

/// Errors that can occur during a simulation run.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    NumericalInstability(#[from] NumericalInstabilityError),
}

/// A compartment became NaN or infinite.
///
/// Deterministic integration has no retry strategy; the caller has to reduce
/// the step size or correct the parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{compartment} became {value} on day {day}")]
pub struct NumericalInstabilityError {
    /// The day whose state could not be recorded.
    pub day: usize,

    /// The first compartment, in model order, holding a non-finite value.
    pub compartment: Compartment,

    /// The offending value.
    pub value: f64,
}
