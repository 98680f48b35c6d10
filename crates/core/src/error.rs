use thiserror::Error;

/// Errors raised when simulation parameters or clock settings are invalid.
///
/// A run never starts with a configuration that fails validation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("population must be positive, got {0}")]
    NonPositivePopulation(f64),

    #[error("initial infected ({infected}) exceeds population ({population})")]
    InfectedExceedsPopulation { infected: f64, population: f64 },

    #[error("exposed seed ({exposed}) plus initial infected exceeds population ({population})")]
    SeedExceedsPopulation { exposed: f64, population: f64 },

    #[error("days must be greater than 0")]
    ZeroDays,

    #[error("substeps per day must be greater than 0")]
    ZeroSubsteps,
}
