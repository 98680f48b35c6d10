//! Numerical integrators and the day-stepping simulation engine.
//!
//! A run advances a [`CompartmentModel`] one day at a time with a
//! [`StepAlgorithm`], recording every day into a [`ResultSeries`]:
//!
//! - [`algorithm`]: explicit Euler and classical RK4, selectable at runtime
//!   through [`Method`]
//! - [`simulate`]: the day loop, with observer support and instability checks
//! - [`Scenario`]: a deserializable bundle of everything one run needs
//! - [`simulate_batch`]: independent scenarios run in parallel
//!
//! [`CompartmentModel`]: contagion_core::CompartmentModel
//! [`ResultSeries`]: contagion_core::ResultSeries

pub mod algorithm;
pub mod simulate;

mod batch;
mod scenario;

pub use algorithm::{Euler, Method, Rk4, StepAlgorithm, UnknownMethodError};
pub use batch::simulate_batch;
pub use scenario::Scenario;
