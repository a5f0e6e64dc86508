use ndarray::{Array1, Array2, Array3, Array4, ArrayView1};

use crate::{ManifoldError, curvature};

/// An educational manifold `(M, g)` of fixed dimension.
///
/// The metric is the identity with `g₀₀ = −1`, so axis 0 is time-like. Axis
/// `i` carries the complexity weight `1 + 0.3·i`.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationalManifold {
    metric: Array2<f64>,
    complexity_weights: Array1<f64>,
}

impl EducationalManifold {
    /// Creates a manifold with `dimension` axes.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::ZeroDimension`] if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self, ManifoldError> {
        if dimension == 0 {
            return Err(ManifoldError::ZeroDimension);
        }

        let mut metric = Array2::eye(dimension);
        metric[[0, 0]] = -1.0;

        Ok(Self {
            metric,
            complexity_weights: Array1::from_shape_fn(dimension, |i| 1.0 + 0.3 * i as f64),
        })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.complexity_weights.len()
    }

    #[must_use]
    pub fn metric(&self) -> &Array2<f64> {
        &self.metric
    }

    #[must_use]
    pub fn complexity_weights(&self) -> &Array1<f64> {
        &self.complexity_weights
    }

    /// The squared interval `gᵢⱼ dxⁱ dxʲ` of a displacement.
    ///
    /// Negative for time-like displacements.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] for a displacement of the
    /// wrong dimension.
    pub fn interval(&self, displacement: ArrayView1<'_, f64>) -> Result<f64, ManifoldError> {
        self.check_point(displacement)?;
        Ok(displacement.dot(&self.metric.dot(&displacement)))
    }

    /// The complexity-weighted Euclidean length of a displacement.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] for a displacement of the
    /// wrong dimension.
    pub fn weighted_length(&self, displacement: ArrayView1<'_, f64>) -> Result<f64, ManifoldError> {
        self.check_point(displacement)?;
        Ok(displacement
            .iter()
            .zip(&self.complexity_weights)
            .map(|(d, w)| w * d * d)
            .sum::<f64>()
            .sqrt())
    }

    /// Christoffel symbols of the manifold metric at `point`, indexed
    /// `[m, i, j]`. All zero, since the metric is constant.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] or
    /// [`ManifoldError::NonFinite`] for a bad point.
    pub fn christoffel(&self, point: ArrayView1<'_, f64>) -> Result<Array3<f64>, ManifoldError> {
        self.check_point(point)?;
        curvature::christoffel(|_: ArrayView1<'_, f64>| self.metric.clone(), point)
    }

    /// Riemann curvature of the manifold metric at `point`, indexed
    /// `[k, l, i, j]`. All zero: the manifold is flat.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] or
    /// [`ManifoldError::NonFinite`] for a bad point.
    pub fn riemann(&self, point: ArrayView1<'_, f64>) -> Result<Array4<f64>, ManifoldError> {
        self.check_point(point)?;
        curvature::riemann(|_: ArrayView1<'_, f64>| self.metric.clone(), point)
    }

    pub(crate) fn check_point(&self, point: ArrayView1<'_, f64>) -> Result<(), ManifoldError> {
        if point.len() != self.dimension() {
            return Err(ManifoldError::DimensionMismatch {
                expected: self.dimension(),
                found: point.len(),
            });
        }
        if point.iter().any(|v| !v.is_finite()) {
            return Err(ManifoldError::NonFinite);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn metric_is_lorentzian() {
        let manifold = EducationalManifold::new(3).unwrap();

        assert_eq!(
            *manifold.metric(),
            array![[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(manifold.dimension(), 3);
    }

    #[test]
    fn complexity_grows_along_axes() {
        let manifold = EducationalManifold::new(5).unwrap();
        let weights = manifold.complexity_weights();

        assert_relative_eq!(weights[0], 1.0);
        assert_relative_eq!(weights[4], 2.2);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            EducationalManifold::new(0),
            Err(ManifoldError::ZeroDimension)
        ));
    }

    #[test]
    fn interval_sign_follows_metric() {
        let manifold = EducationalManifold::new(2).unwrap();

        assert_relative_eq!(manifold.interval(array![2.0, 1.0].view()).unwrap(), -3.0);
        assert_relative_eq!(manifold.interval(array![0.0, 1.0].view()).unwrap(), 1.0);
    }

    #[test]
    fn weighted_length_uses_complexity() {
        let manifold = EducationalManifold::new(2).unwrap();

        let length = manifold.weighted_length(array![1.0, 1.0].view()).unwrap();

        assert_relative_eq!(length, 2.3_f64.sqrt());
    }

    #[test]
    fn manifold_is_flat_everywhere() {
        let manifold = EducationalManifold::new(4).unwrap();

        for position in [0.1, 0.5, 0.9] {
            let point = Array1::from_elem(4, position);

            let gamma = manifold.christoffel(point.view()).unwrap();
            assert_eq!(gamma.dim(), (4, 4, 4));
            assert!(gamma.iter().all(|&v| v == 0.0));

            let riemann = manifold.riemann(point.view()).unwrap();
            assert_eq!(riemann.dim(), (4, 4, 4, 4));
            assert!(riemann.iter().all(|&v| v == 0.0));
        }

        assert!(matches!(
            manifold.riemann(array![0.1, 0.2].view()),
            Err(ManifoldError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn points_are_checked() {
        let manifold = EducationalManifold::new(3).unwrap();

        assert!(matches!(
            manifold.interval(array![1.0].view()),
            Err(ManifoldError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        ));
        assert!(matches!(
            manifold.weighted_length(array![1.0, f64::NAN, 0.0].view()),
            Err(ManifoldError::NonFinite)
        ));
    }
}
