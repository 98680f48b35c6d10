/// Event emitted by the simulation loop for each recorded day.
///
/// Day 0 is the seeded initial state; days `1..days` follow each advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<S> {
    /// The day index of this state.
    pub day: usize,

    /// The compartment state recorded for this day.
    pub state: S,

    /// The sum of all compartments on this day.
    pub total: f64,
}
