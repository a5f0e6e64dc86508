/// Event emitted by the Euler solver for each state.
///
/// Step 0 is the initial state before any integration.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The state reached at this step.
    pub state: S,
}
