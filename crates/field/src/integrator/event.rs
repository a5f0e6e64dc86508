use ndarray::Array2;

use crate::Energy;

/// Event emitted by [`FieldIntegrator::run`] at every step index.
///
/// Step 0 is the state at the start of the run; steps `1..=N` follow each
/// accepted step.
///
/// [`FieldIntegrator::run`]: crate::FieldIntegrator::run
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Step index within the run.
    pub step: usize,

    /// The field at this step.
    pub field: &'a Array2<f64>,

    /// Energy of `field`.
    pub energy: Energy,
}
