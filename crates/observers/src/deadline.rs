use std::time::{Duration, Instant};

use contagion_core::Observer;
use log::warn;

use crate::traits::CanStopEarly;

/// Stops a run once a wall-clock budget is spent.
///
/// The clock starts when the deadline is created. The check happens between
/// days, so a run never stops mid-day.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
        }
    }

    /// Creates a deadline at a fixed instant.
    #[must_use]
    pub fn at(expires_at: Instant) -> Self {
        Self { expires_at }
    }

    /// Returns `true` if the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_expired() {
            warn!("simulation deadline reached, stopping run");
            return Some(A::stop_early());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use contagion_core::{ModelParameters, SimulationClock};
    use contagion_models::Seir;
    use contagion_solvers::{
        Rk4,
        simulate::{Config, Status, simulate},
    };

    use super::*;

    #[test]
    fn expired_deadline_stops_at_day_zero() {
        let model = Seir::new(ModelParameters::default()).unwrap();
        let clock = SimulationClock::new(365, 24).unwrap();

        let deadline = Deadline::at(Instant::now());
        assert!(deadline.is_expired());

        let solution = simulate(&model, &Rk4, &clock, &Config::default(), deadline).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.days(), 1);
    }

    #[test]
    fn generous_deadline_lets_run_complete() {
        let model = Seir::new(ModelParameters::default()).unwrap();
        let clock = SimulationClock::new(30, 24).unwrap();

        let deadline = Deadline::after(Duration::from_secs(3600));
        let solution = simulate(&model, &Rk4, &clock, &Config::default(), deadline).unwrap();

        assert_eq!(solution.status, Status::Complete);
    }
}
