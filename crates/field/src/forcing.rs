//! Sources of the forcing term `J` for [`FieldIntegrator::run`].
//!
//! A constant array (owned or borrowed) is a forcing source, and
//! [`from_fn`] turns a closure over the step index into one.
//!
//! [`FieldIntegrator::run`]: crate::FieldIntegrator::run

use std::borrow::Cow;

use ndarray::Array2;

/// Supplies the forcing array for each step of a run.
pub trait Forcing {
    /// Returns the forcing applied on the step that leaves step index `step`.
    fn forcing(&mut self, step: usize) -> Cow<'_, Array2<f64>>;
}

impl Forcing for Array2<f64> {
    fn forcing(&mut self, _step: usize) -> Cow<'_, Array2<f64>> {
        Cow::Borrowed(self)
    }
}

impl Forcing for &Array2<f64> {
    fn forcing(&mut self, _step: usize) -> Cow<'_, Array2<f64>> {
        Cow::Borrowed(*self)
    }
}

/// Forcing produced by a closure. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Creates a forcing source that calls `f` with each step index.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(usize) -> Array2<f64>,
{
    FromFn(f)
}

impl<F> Forcing for FromFn<F>
where
    F: FnMut(usize) -> Array2<f64>,
{
    fn forcing(&mut self, step: usize) -> Cow<'_, Array2<f64>> {
        Cow::Owned((self.0)(step))
    }
}
