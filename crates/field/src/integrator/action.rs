/// Actions an observer can request during [`FieldIntegrator::run`].
///
/// [`FieldIntegrator::run`]: crate::FieldIntegrator::run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return what has been sampled so far.
    StopEarly,
}
