use contagion_core::Observer;

use crate::traits::{CanStopEarly, HasDay};

/// Stops a run once a given day has been recorded.
///
/// A run stopped after day `d` returns `d + 1` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfterDay(pub usize);

impl<E: HasDay, A: CanStopEarly> Observer<E, A> for StopAfterDay {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.day() >= self.0).then(A::stop_early)
    }
}
