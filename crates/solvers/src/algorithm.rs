//! Fixed-step algorithms that advance a compartment state by one day.
//!
//! Both algorithms take the same explicit step size `dt` from the
//! [`SimulationClock`] and perform `substeps_per_day` steps per day, so they
//! converge to the same trajectory as the resolution increases:
//!
//! - [`Euler`]: `x + dt * f(x)`, first order, one model evaluation per step
//! - [`Rk4`]: classical Runge-Kutta, fourth order, four evaluations per step
//!
//! With `substeps_per_day = 1`, [`Rk4`] takes a single full-day step.

mod euler;
mod rk4;

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use contagion_core::{CompartmentModel, SimulationClock};

pub use euler::Euler;
pub use rk4::Rk4;

/// Advances a state by one day.
///
/// Implementations are stateless and may be reused across models and runs.
pub trait StepAlgorithm {
    /// Returns a short identifier for logs.
    fn name(&self) -> &str;

    /// Returns the state one day after `state`.
    ///
    /// Every compartment advances together, since the compartments are
    /// coupled through shared rate terms.
    fn advance<M: CompartmentModel>(
        &self,
        model: &M,
        state: &M::State,
        clock: &SimulationClock,
    ) -> M::State;
}

/// Runtime selection of a [`StepAlgorithm`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    #[default]
    Euler,
    Rk4,
}

/// A method name that matches no known algorithm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {0:?}, expected \"euler\" or \"rk4\"")]
pub struct UnknownMethodError(pub String);

impl StepAlgorithm for Method {
    fn name(&self) -> &str {
        match self {
            Self::Euler => "euler",
            Self::Rk4 => "rk4",
        }
    }

    fn advance<M: CompartmentModel>(
        &self,
        model: &M,
        state: &M::State,
        clock: &SimulationClock,
    ) -> M::State {
        match self {
            Self::Euler => Euler.advance(model, state, clock),
            Self::Rk4 => Rk4.advance(model, state, clock),
        }
    }
}

impl FromStr for Method {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Self::Euler),
            "rk4" | "runge-kutta" => Ok(Self::Rk4),
            _ => Err(UnknownMethodError(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_names() {
        assert_eq!("euler".parse::<Method>(), Ok(Method::Euler));
        assert_eq!("RK4".parse::<Method>(), Ok(Method::Rk4));
        assert_eq!("runge-kutta".parse::<Method>(), Ok(Method::Rk4));
        assert!("heun".parse::<Method>().is_err());
    }

    #[test]
    fn display_matches_algorithm_names() {
        assert_eq!(Method::Euler.to_string(), "euler");
        assert_eq!(Method::Rk4.to_string(), "rk4");
    }
}
