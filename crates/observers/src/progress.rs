use std::fmt::Write;

use contagion_core::{Compartment, Observer};
use log::info;

use crate::traits::{HasCompartments, HasDay};

/// Logs the state every `every` days at info level.
///
/// Each line reads `day 7: S=99812.0 I=104.3 R=83.7 N=100000.0`. Compartments
/// the model does not carry report as zero and are left out. Never acts on
/// the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogProgress {
    every: usize,
}

impl LogProgress {
    /// Creates an observer logging every `every` days (at least every day).
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl<E: HasDay + HasCompartments, A> Observer<E, A> for LogProgress {
    fn observe(&mut self, event: &E) -> Option<A> {
        let day = event.day();
        if day.is_multiple_of(self.every) {
            info!("day {day}: {}", summary(event));
        }
        None
    }
}

fn summary<E: HasCompartments>(event: &E) -> String {
    let mut line = String::new();
    for c in [
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infected,
        Compartment::Recovered,
    ] {
        let value = event.value(c);
        if c == Compartment::Exposed && value == 0.0 {
            continue;
        }
        let _ = write!(line, "{}={value:.1} ", c.symbol());
    }
    let _ = write!(line, "N={:.1}", event.total());
    line
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
    fn zero_interval_is_clamped() {
        assert_eq!(LogProgress::every(0), LogProgress::every(1));
    }

    struct Snapshot {
        values: [f64; 4],
        total: f64,
    }

    impl HasCompartments for Snapshot {
        fn value(&self, compartment: Compartment) -> f64 {
            match compartment {
                Compartment::Susceptible => self.values[0],
                Compartment::Exposed => self.values[1],
                Compartment::Infected => self.values[2],
                Compartment::Recovered => self.values[3],
            }
        }

        fn total(&self) -> f64 {
            self.total
        }
    }

    #[test]
    fn summary_labels_values_by_symbol() {
        let sir = Snapshot {
            values: [90.0, 0.0, 6.0, 4.0],
            total: 100.0,
        };
        assert_eq!(summary(&sir), "S=90.0 I=6.0 R=4.0 N=100.0");

        let seir = Snapshot {
            values: [88.0, 2.0, 6.0, 4.0],
            total: 100.0,
        };
        assert_eq!(summary(&seir), "S=88.0 E=2.0 I=6.0 R=4.0 N=100.0");
    }

    #[test]
    fn never_interrupts_a_run() {
        let model = Seir::new(ModelParameters::default()).unwrap();
        let clock = SimulationClock::new(40, 24).unwrap();

        let observer = LogProgress::every(7);
        let solution = simulate(&model, &Rk4, &clock, &Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::Complete);
    }
}
