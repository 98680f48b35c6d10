use contagion_core::{Compartment, Observer, Peak};

use crate::traits::{HasCompartments, HasDay};

/// Tracks the running peak of one compartment while a run progresses.
///
/// Ties keep the earliest day, matching [`peak_day`](contagion_core::peak_day).
/// The tracker never acts; it only watches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakTracker {
    compartment: Compartment,
    peak: Option<Peak>,
}

impl PeakTracker {
    #[must_use]
    pub fn new(compartment: Compartment) -> Self {
        Self {
            compartment,
            peak: None,
        }
    }

    /// Returns the compartment being tracked.
    #[must_use]
    pub fn compartment(&self) -> Compartment {
        self.compartment
    }

    /// Returns the highest value seen so far, if any.
    #[must_use]
    pub fn peak(&self) -> Option<Peak> {
        self.peak
    }
}

impl<E: HasDay + HasCompartments, A> Observer<E, A> for PeakTracker {
    fn observe(&mut self, event: &E) -> Option<A> {
        let value = event.value(self.compartment);
        if value.is_nan() {
            return None;
        }

        match self.peak {
            Some(Peak { value: max, .. }) if max >= value => {}
            _ => {
                self.peak = Some(Peak {
                    day: event.day(),
                    value,
                });
            }
        }
        None
    }
}

impl<E: HasDay + HasCompartments, A> Observer<E, A> for &mut PeakTracker {
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
