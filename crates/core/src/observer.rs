/// Receives solver events and decides how the run should proceed.
///
/// Observers let callers monitor or steer a simulation without changing its
/// API, enabling logging, deadlines, or custom stopping policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Runs two observers in sequence; both see every event.
///
/// When both return an action, the first observer's action wins.
impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<Action> = observer.observe(&42_usize);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_sees_events() {
        let mut seen = Vec::new();
        let mut observer = |day: &usize| {
            seen.push(*day);
            (*day >= 2).then_some(Action::Stop)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Action::Stop));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn pair_shows_events_to_both() {
        let mut left = Vec::new();
        let mut right = Vec::new();

        let mut pair = (
            |day: &usize| {
                left.push(*day);
                None
            },
            |day: &usize| {
                right.push(*day);
                (*day == 3).then_some(Action::Stop)
            },
        );

        assert_eq!(pair.observe(&2), None);
        assert_eq!(pair.observe(&3), Some(Action::Stop));

        assert_eq!(left, vec![2, 3]);
        assert_eq!(right, vec![2, 3]);
    }
}
