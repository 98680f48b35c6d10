//! SIR and SEIR compartment models.
//!
//! Both models implement [`CompartmentModel`] over their own immutable state
//! type, so any integrator in `contagion-solvers` can drive either one:
//!
//! - [`Sir`] over [`SirState`] `(S, I, R)`
//! - [`Seir`] over [`SeirState`] `(S, E, I, R)`, with optional vital dynamics
//!
//! The reference population `N` in the incidence term `beta * S * I / N` is
//! the configured population at `t = 0`, not the running sum of compartments.
//!
//! [`CompartmentModel`]: contagion_core::CompartmentModel

mod kind;
mod seir;
mod sir;

pub use kind::{ModelKind, UnknownModelError};
pub use seir::{Seir, SeirState};
pub use sir::{Sir, SirState};
