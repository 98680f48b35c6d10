#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Rate and seeding parameters of a compartmental model.
///
/// All rates are per day. `birth_rate`, `death_rate`, `incubation_rate`, and
/// `exposed_fraction` only affect SEIR.
///
/// Parameters are plain data so they can come from any configuration source;
/// call [`validate`](Self::validate) (models do this on construction) before
/// using them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ModelParameters {
    /// Total population at `t = 0`, the reference `N` in `beta * S * I / N`.
    pub population: f64,

    /// Infected count at `t = 0`.
    pub initial_infected: f64,

    /// Transmission rate (beta).
    pub transmission_rate: f64,

    /// Recovery rate (gamma).
    pub recovery_rate: f64,

    /// Rate at which exposed individuals become infectious (alpha).
    pub incubation_rate: f64,

    /// Birth rate (lambda), applied to the reference population.
    pub birth_rate: f64,

    /// Death rate (mu), applied to every SEIR compartment.
    pub death_rate: f64,

    /// Ratio of exposed to infected at `t = 0` (k).
    pub exposed_fraction: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            population: 300_000.0,
            initial_infected: 10.0,
            transmission_rate: 0.2,
            recovery_rate: 1.0 / 14.0,
            incubation_rate: 1.0 / 5.0,
            birth_rate: 0.0,
            death_rate: 0.0,
            exposed_fraction: 0.0,
        }
    }
}

impl ModelParameters {
    /// Checks that every value is finite and within range.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("population", self.population),
            ("initial_infected", self.initial_infected),
            ("transmission_rate", self.transmission_rate),
            ("recovery_rate", self.recovery_rate),
            ("incubation_rate", self.incubation_rate),
            ("birth_rate", self.birth_rate),
            ("death_rate", self.death_rate),
            ("exposed_fraction", self.exposed_fraction),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.population <= 0.0 {
            return Err(ConfigError::NonPositivePopulation(self.population));
        }

        for &(name, value) in &fields[1..] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.initial_infected > self.population {
            return Err(ConfigError::InfectedExceedsPopulation {
                infected: self.initial_infected,
                population: self.population,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = ModelParameters::default();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_population() {
        let params = ModelParameters {
            population: 0.0,
            ..ModelParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositivePopulation(0.0))
        );
    }

    #[test]
    fn rejects_negative_rates() {
        let params = ModelParameters {
            recovery_rate: -0.1,
            ..ModelParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::Negative {
                name: "recovery_rate",
                value: -0.1
            })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let params = ModelParameters {
            transmission_rate: f64::INFINITY,
            ..ModelParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite {
                name: "transmission_rate",
                ..
            })
        ));
    }

    #[test]
    fn rejects_more_infected_than_population() {
        let params = ModelParameters {
            population: 100.0,
            initial_infected: 101.0,
            ..ModelParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InfectedExceedsPopulation { .. })
        ));
    }
}
