/// Control actions supported by the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return the days recorded so far.
    StopEarly,
}
