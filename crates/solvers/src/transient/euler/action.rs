/// Actions an observer can request from the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the states collected so far.
    StopEarly,
}
