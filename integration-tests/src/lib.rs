//! Shared fixtures for the cross-crate tests.

use contagion_core::ModelParameters;

/// The reference outbreak: `beta = 0.3`, `gamma = 1/14`, `N = 100 000`, `I0 = 10`.
#[must_use]
pub fn outbreak() -> ModelParameters {
    ModelParameters {
        population: 100_000.0,
        initial_infected: 10.0,
        transmission_rate: 0.3,
        recovery_rate: 1.0 / 14.0,
        ..ModelParameters::default()
    }
}

/// A SEIR parameter set with births and deaths.
#[must_use]
pub fn seir_with_vital_dynamics() -> ModelParameters {
    ModelParameters {
        population: 300_000.0,
        initial_infected: 10.0,
        transmission_rate: 0.2,
        recovery_rate: 0.07,
        incubation_rate: 0.2,
        birth_rate: 0.005,
        death_rate: 0.001,
        exposed_fraction: 4.0,
    }
}

/// Returns the largest `|a - b| / scale` over two equally long series.
///
/// # Panics
///
/// Panics if the series differ in length.
#[must_use]
pub fn max_scaled_difference(a: &[f64], b: &[f64], scale: f64) -> f64 {
    assert_eq!(a.len(), b.len(), "series lengths differ");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs() / scale)
        .fold(0.0, f64::max)
}
