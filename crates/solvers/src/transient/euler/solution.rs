/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// States from each step, starting with the initial state.
    pub history: Vec<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the last state reached.
    ///
    /// The history always holds at least the initial state.
    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.history.last()
    }
}
