//! Reusable observers for Contagion simulations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any compartment model driven by `contagion-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for model-agnostic observers
//!   ([`HasDay`], [`HasCompartments`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Deadline`]: stops a run once a wall-clock budget is spent
//! - [`StopAfterDay`]: stops a run after a given day
//! - [`PeakTracker`]: tracks the running peak of one compartment
//! - [`LogProgress`]: logs every n-th day through the `log` facade
//!
//! Observers compose as tuples: `(a, b)` shows every event to both and the
//! action of `a` takes precedence.
//!
//! [`Observer`]: contagion_core::Observer
//! [`HasDay`]: traits::HasDay
//! [`HasCompartments`]: traits::HasCompartments
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod peak;
mod progress;
mod stop_after;

pub use deadline::Deadline;
pub use peak::PeakTracker;
pub use progress::LogProgress;
pub use stop_after::StopAfterDay;
