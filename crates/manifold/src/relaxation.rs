use ndarray::{Array2, ArrayView1, Axis};
use tracing::debug;

use crate::{EducationalManifold, ManifoldError, geodesic::norm};

/// Distance to the target below which a path counts as arrived.
pub const CONVERGENCE_DISTANCE: f64 = 0.01;

/// Fraction of the remaining distance covered by the first relaxation step.
pub const RELAXATION_RATE: f64 = 0.1;

impl EducationalManifold {
    /// A first-order learning path that relaxes towards `target`.
    ///
    /// Step `k` of `steps` moves `RELAXATION_RATE·(1 − k/steps)` of the way
    /// from the current point to the target. The path stops after the step
    /// taken from within [`CONVERGENCE_DISTANCE`] of the target, or after
    /// `steps` steps.
    ///
    /// Returns the visited points, one per row, starting with `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] or
    /// [`ManifoldError::NonFinite`] for a bad endpoint.
    pub fn relaxation_path(
        &self,
        start: ArrayView1<'_, f64>,
        target: ArrayView1<'_, f64>,
        steps: usize,
    ) -> Result<Array2<f64>, ManifoldError> {
        self.check_point(start)?;
        self.check_point(target)?;

        let mut points = vec![start.to_owned()];
        let mut current = start.to_owned();
        for k in 0..steps {
            let direction = &target - &current;
            let rate = RELAXATION_RATE * (1.0 - k as f64 / steps as f64);
            current.scaled_add(rate, &direction);
            points.push(current.clone());

            if norm(direction.view()) < CONVERGENCE_DISTANCE {
                break;
            }
        }

        let mut path = Array2::zeros((points.len(), self.dimension()));
        for (mut row, point) in path.axis_iter_mut(Axis(0)).zip(&points) {
            row.assign(point);
        }

        debug!(points = path.nrows(), "relaxation path computed");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn first_step_covers_a_tenth() {
        let manifold = EducationalManifold::new(2).unwrap();

        let path = manifold
            .relaxation_path(array![0.0, 0.0].view(), array![1.0, 2.0].view(), 50)
            .unwrap();

        assert_eq!(path.row(0), array![0.0, 0.0]);
        assert_relative_eq!(path[[1, 0]], 0.1);
        assert_relative_eq!(path[[1, 1]], 0.2);
    }

    #[test]
    fn distance_shrinks_every_step() {
        let manifold = EducationalManifold::new(3).unwrap();
        let target = array![0.9, 0.8, 0.7];

        let path = manifold
            .relaxation_path(array![0.1, 0.2, 0.1].view(), target.view(), 100)
            .unwrap();

        let distances: Vec<f64> = path
            .rows()
            .into_iter()
            .map(|p| norm((&p - &target).view()))
            .collect();
        assert!(distances.windows(2).all(|w| w[1] < w[0]));
        assert!(path.nrows() <= 101);
    }

    #[test]
    fn stops_once_close_to_target() {
        let manifold = EducationalManifold::new(1).unwrap();

        // Already within reach: one step, then stop.
        let path = manifold
            .relaxation_path(array![0.995].view(), array![1.0].view(), 100)
            .unwrap();

        assert_eq!(path.nrows(), 2);
        assert_relative_eq!(path[[1, 0]], 0.9955, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_is_just_the_start() {
        let manifold = EducationalManifold::new(2).unwrap();

        let path = manifold
            .relaxation_path(array![0.3, 0.4].view(), array![1.0, 1.0].view(), 0)
            .unwrap();

        assert_eq!(path, array![[0.3, 0.4]]);
    }

    #[test]
    fn endpoints_are_checked() {
        let manifold = EducationalManifold::new(2).unwrap();

        let result = manifold.relaxation_path(
            array![0.0, 0.0].view(),
            array![f64::INFINITY, 0.0].view(),
            10,
        );

        assert!(matches!(result, Err(ManifoldError::NonFinite)));
    }
}
