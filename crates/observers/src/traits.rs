//! Capability traits for model-agnostic observers.
//!
//! These traits abstract over the solver's event and action types, so one
//! observer can watch SIR and SEIR runs alike.
//!
//! # Event traits
//!
//! - [`HasDay`]: events tied to a simulation day
//! - [`HasCompartments`]: events that carry compartment values
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use contagion_core::{Compartment, Observer};
//! use contagion_observers::traits::{CanStopEarly, HasCompartments};
//!
//! /// Stops once infections drop below one person.
//! struct Extinct;
//!
//! impl<E: HasCompartments, A: CanStopEarly> Observer<E, A> for Extinct {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.value(Compartment::Infected) < 1.0).then(A::stop_early)
//!     }
//! }
//! ```

use contagion_core::{Compartment, Compartments};

use contagion_solvers::simulate;

/// An event tied to a simulation day.
pub trait HasDay {
    /// Returns the day index of this event.
    fn day(&self) -> usize;
}

/// An event that carries compartment values.
pub trait HasCompartments {
    /// Returns the value of `compartment`, zero if the model lacks it.
    fn value(&self, compartment: Compartment) -> f64;

    /// Returns the total population.
    fn total(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- simulate::Event ---

impl<S> HasDay for simulate::Event<S> {
    fn day(&self) -> usize {
        self.day
    }
}

impl<S: Compartments> HasCompartments for simulate::Event<S> {
    fn value(&self, compartment: Compartment) -> f64 {
        self.state.value(compartment)
    }

    fn total(&self) -> f64 {
        self.total
    }
}

// --- simulate::Action ---

impl CanStopEarly for simulate::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
