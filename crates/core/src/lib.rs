//! Core traits and types for the Contagion epidemic simulation engine.
//!
//! This crate defines the shared abstractions that models, solvers, and
//! observers build on:
//!
//! - [`CompartmentModel`]: a set of rate equations over a compartment state
//! - [`Compartments`]: an immutable per-instant state such as `(S, I, R)`
//! - [`StepIntegrable`]: states that can be stepped by `derivative * delta`
//! - [`ModelParameters`], [`SimulationClock`]: validated run configuration
//! - [`ResultSeries`]: the per-compartment time series produced by a run
//! - [`Observer`]: receives solver events and optionally returns control actions

mod clock;
mod compartment;
mod error;
mod mode;
mod model;
mod observer;
mod parameters;
mod series;
mod step;

pub use clock::SimulationClock;
pub use compartment::{Compartment, Compartments};
pub use error::ConfigError;
pub use mode::{InvalidModeError, Mode};
pub use model::CompartmentModel;
pub use observer::Observer;
pub use parameters::ModelParameters;
pub use series::{InvalidSeriesError, Peak, ResultSeries, SeriesRecorder, peak_day};
pub use step::{DerivativeOf, StepIntegrable};
