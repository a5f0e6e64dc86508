/// Receives events from a running solver and may steer it.
///
/// Returning `Some(action)` asks the solver to act (for example, to stop
/// early); returning `None` lets it continue. Which actions are available is
/// decided by each solver through its own `A` type.
///
/// `()` is the no-op observer, and any `FnMut(&E) -> Option<A>` closure is an
/// observer, so callers rarely need a dedicated type.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
