//! The day-stepping simulation loop.
//!
//! A run seeds day 0 from the model, then advances the state one day at a
//! time with a [`StepAlgorithm`] until `days` points have been recorded:
//!
//! ```text
//! series[0]     = model.initial_state()
//! series[d + 1] = algorithm.advance(model, series[d])
//! total[d]      = sum of compartments on day d
//! ```
//!
//! Days are strictly sequential, since each depends on the one before. Runs
//! share no mutable state, so independent runs can execute in parallel.
//!
//! # Example
//!
//! ```
//! use contagion_core::{ModelParameters, SimulationClock};
//! use contagion_models::Sir;
//! use contagion_solvers::{Method, simulate};
//!
//! let model = Sir::new(ModelParameters::default()).unwrap();
//! let clock = SimulationClock::new(120, 24).unwrap();
//!
//! let solution = simulate::simulate_unobserved(&model, &Method::Rk4, &clock).unwrap();
//!
//! assert_eq!(solution.series.len(), 120);
//! let peak = solution.series.peak(contagion_core::Compartment::Infected).unwrap();
//! assert!(peak.day > 0);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, OnInstability};
pub use error::{Error, NumericalInstabilityError};
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, error, trace, warn};

use contagion_core::{
    Compartment, CompartmentModel, Compartments, Observer, SeriesRecorder, SimulationClock,
};

use crate::StepAlgorithm;

/// Runs `model` over the horizon of `clock` using `algorithm`.
///
/// # Algorithm
///
/// 1. Validate the model parameters.
/// 2. Record the seeded initial state as day 0.
/// 3. For each following day:
///    - Advance the previous state by one day.
///    - Check every compartment is finite.
///    - Record the state and its total.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with the full series.
///
/// Negative compartment values are not clamped; the first negative value of
/// each compartment is logged as a warning.
///
/// # Errors
///
/// Returns [`Error::Config`] if the parameters are invalid. Returns
/// [`Error::NumericalInstability`] if a compartment becomes NaN or infinite,
/// unless `config` asks for partial results.
pub fn simulate<M, A, Obs>(
    model: &M,
    algorithm: &A,
    clock: &SimulationClock,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: CompartmentModel,
    A: StepAlgorithm,
    Obs: Observer<Event<M::State>, Action>,
{
    model.validate()?;

    let days = clock.days();
    debug!(
        "simulating {} with {} for {} days at {} substeps per day",
        model.name(),
        algorithm.name(),
        days,
        clock.substeps_per_day(),
    );

    let mut recorder = SeriesRecorder::new::<M::State>(days);
    let mut negatives = NegativeWatch::default();
    let mut state = model.initial_state();

    for day in 0..days {
        if day > 0 {
            state = algorithm.advance(model, &state, clock);
        }

        if let Some((compartment, value)) = state.first_non_finite() {
            let err = NumericalInstabilityError {
                day,
                compartment,
                value,
            };
            error!("{} run diverged: {err}", model.name());

            return match config.on_instability {
                OnInstability::Fail => Err(err.into()),
                OnInstability::ReturnPartial => Ok(Solution {
                    status: Status::Diverged(err),
                    series: recorder.finish(),
                }),
            };
        }

        negatives.check(day, &state);
        recorder.record(&state);

        let event = Event {
            day,
            state,
            total: state.total(),
        };
        trace!("day {day}: total {}", event.total);

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("observer stopped {} run after day {day}", model.name());
            return Ok(Solution {
                status: Status::StoppedByObserver,
                series: recorder.finish(),
            });
        }
    }

    debug!("{} run complete after {days} days", model.name());

    Ok(Solution {
        status: Status::Complete,
        series: recorder.finish(),
    })
}

/// Runs `model` with the default config and no observer.
///
/// This is a convenience wrapper around [`simulate`].
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the run diverges.
pub fn simulate_unobserved<M, A>(
    model: &M,
    algorithm: &A,
    clock: &SimulationClock,
) -> Result<Solution, Error>
where
    M: CompartmentModel,
    A: StepAlgorithm,
{
    simulate(model, algorithm, clock, &Config::default(), ())
}

/// Tracks which compartments have already gone negative in a run.
#[derive(Debug, Default)]
struct NegativeWatch {
    warned: Vec<Compartment>,
}

impl NegativeWatch {
    fn check<S: Compartments>(&mut self, day: usize, state: &S) {
        for &c in S::COMPARTMENTS {
            let value = state.value(c);
            if value < 0.0 && !self.warned.contains(&c) {
                warn!("{c} went negative ({value}) on day {day}; consider more substeps per day");
                self.warned.push(c);
            }
        }
    }
}
