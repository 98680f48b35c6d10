use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::StepIntegrable;

/// A named sub-population of an epidemiological model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infected,
    Recovered,
}

impl Compartment {
    /// Returns the lowercase label used in reports and plots.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Susceptible => "susceptible",
            Self::Exposed => "exposed",
            Self::Infected => "infected",
            Self::Recovered => "recovered",
        }
    }

    /// Returns the single-letter symbol (`S`, `E`, `I`, `R`).
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Susceptible => 'S',
            Self::Exposed => 'E',
            Self::Infected => 'I',
            Self::Recovered => 'R',
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The population counts of every compartment at a single instant.
///
/// A state is an immutable value: integrators never mutate a state in place,
/// they produce the next one. Derivatives share the state's shape, so the
/// derivative of `(S, I, R)` is `(dS, dI, dR)` expressed in the same type.
pub trait Compartments: Copy + StepIntegrable<f64, Derivative = Self> {
    /// The compartments of this state, in model order.
    const COMPARTMENTS: &'static [Compartment];

    /// Returns the count held in `compartment`.
    ///
    /// Compartments the model does not carry (such as `Exposed` in SIR) are
    /// reported as zero.
    fn value(&self, compartment: Compartment) -> f64;

    /// Returns the sum of all compartments.
    fn total(&self) -> f64 {
        Self::COMPARTMENTS.iter().map(|&c| self.value(c)).sum()
    }

    /// Returns the first compartment holding a NaN or infinite value.
    fn first_non_finite(&self) -> Option<(Compartment, f64)> {
        Self::COMPARTMENTS
            .iter()
            .map(|&c| (c, self.value(c)))
            .find(|(_, v)| !v.is_finite())
    }
}
