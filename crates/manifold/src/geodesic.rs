use std::convert::Infallible;

use ndarray::{Array1, Array2, ArrayView1, Axis};
use ontologica_core::{Observer, OdeProblem};
use ontologica_solvers::transient::euler;
use tracing::debug;

use crate::{
    CONVERGENCE_DISTANCE, EducationalManifold, GeodesicConfig, ManifoldError, Phase, PhaseRate,
};

/// Magnitude of the acceleration pulling a learner towards the target.
pub const PULL: f64 = 0.1;

/// Initial speed of a learner, directed at the target.
pub const LAUNCH_SPEED: f64 = 2.1e-2;

/// A learning path integrated by [`EducationalManifold::learning_geodesic`].
#[derive(Debug, Clone, PartialEq)]
pub struct LearningPath {
    /// Positions, one row per recorded time.
    pub trajectory: Array2<f64>,

    /// Time of each trajectory row, starting at 0.
    pub times: Vec<f64>,

    /// `1 − |x_end − target| / |start − target|`, or 1 if start is the target.
    pub efficiency: f64,

    pub final_position: Array1<f64>,

    /// Whether the path ended within [`CONVERGENCE_DISTANCE`] of the target.
    pub converged: bool,
}

/// Returns the initial velocity: [`LAUNCH_SPEED`] towards `target`, or zero
/// if `start` already is the target.
#[must_use]
pub fn launch_velocity(start: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>) -> Array1<f64> {
    let direction = &target - &start;
    let norm = norm(direction.view());
    if norm > 0.0 {
        direction * (LAUNCH_SPEED / norm)
    } else {
        Array1::zeros(start.len())
    }
}

/// `x' = v`, `v' = −PULL·(x − target)/|x − target|`.
struct Geodesic<'a> {
    target: ArrayView1<'a, f64>,
}

impl OdeProblem for Geodesic<'_> {
    type Delta = f64;
    type State = Phase;
    type Error = Infallible;

    fn derivative(&self, state: &Phase) -> Result<PhaseRate, Infallible> {
        let offset = &state.position - &self.target;
        let distance = norm(offset.view());
        let acceleration = if distance > 0.0 {
            offset * (-PULL / distance)
        } else {
            Array1::zeros(offset.len())
        };

        Ok(PhaseRate {
            velocity: state.velocity.clone(),
            acceleration,
        })
    }
}

impl EducationalManifold {
    /// Integrates a learning path from `start` towards `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] or
    /// [`ManifoldError::NonFinite`] for a bad endpoint.
    pub fn learning_geodesic(
        &self,
        start: ArrayView1<'_, f64>,
        target: ArrayView1<'_, f64>,
        config: &GeodesicConfig,
    ) -> Result<LearningPath, ManifoldError> {
        self.learning_geodesic_observed(start, target, config, ())
    }

    /// Integrates a learning path, reporting every Euler step to `observer`.
    ///
    /// The observer may end the integration early with
    /// [`euler::Action::StopEarly`]; the path then ends at the last state
    /// reached.
    ///
    /// # Errors
    ///
    /// See [`EducationalManifold::learning_geodesic`].
    pub fn learning_geodesic_observed<Obs>(
        &self,
        start: ArrayView1<'_, f64>,
        target: ArrayView1<'_, f64>,
        config: &GeodesicConfig,
        observer: Obs,
    ) -> Result<LearningPath, ManifoldError>
    where
        Obs: Observer<euler::Event<Phase>, euler::Action>,
    {
        self.check_point(start)?;
        self.check_point(target)?;

        let initial = Phase {
            position: start.to_owned(),
            velocity: launch_velocity(start, target),
        };
        let problem = Geodesic { target };
        let solution = euler::solve(&problem, initial, config.dt(), config.steps(), observer)?;

        let mut trajectory = Array2::zeros((solution.history.len(), self.dimension()));
        for (mut row, phase) in trajectory.axis_iter_mut(Axis(0)).zip(&solution.history) {
            row.assign(&phase.position);
        }
        let times = (0..solution.history.len())
            .map(|step| step as f64 * config.dt())
            .collect();

        let final_position = solution
            .last()
            .map_or_else(|| start.to_owned(), |phase| phase.position.clone());
        let initial_distance = norm((&start - &target).view());
        let final_distance = norm((&final_position - &target).view());
        let efficiency = if initial_distance > 0.0 {
            1.0 - final_distance / initial_distance
        } else {
            1.0
        };
        let converged = final_distance < CONVERGENCE_DISTANCE;

        debug!(
            steps = solution.steps,
            efficiency, converged, "learning geodesic integrated"
        );

        Ok(LearningPath {
            trajectory,
            times,
            efficiency,
            final_position,
            converged,
        })
    }
}

pub(crate) fn norm(v: ArrayView1<'_, f64>) -> f64 {
    v.dot(&v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    fn manifold() -> EducationalManifold {
        EducationalManifold::new(3).unwrap()
    }

    #[test]
    fn path_starts_at_start_with_launch_velocity() {
        let start = array![0.1, 0.2, 0.1];
        let target = array![0.9, 0.8, 0.7];
        let config = GeodesicConfig::new(1.0, 0.1).unwrap();

        let path = manifold()
            .learning_geodesic(start.view(), target.view(), &config)
            .unwrap();

        assert_eq!(path.trajectory.dim(), (11, 3));
        assert_eq!(path.trajectory.row(0), start);
        assert_eq!(path.times.len(), 11);
        assert_relative_eq!(path.times[10], 1.0, epsilon = 1e-12);

        // Euler moves by v₀·dt on the first step.
        let expected = &start + &(launch_velocity(start.view(), target.view()) * 0.1);
        for (a, b) in path.trajectory.row(1).iter().zip(&expected) {
            assert_relative_eq!(*a, *b, epsilon = 1e-15);
        }
    }

    #[test]
    fn launch_velocity_points_at_target() {
        let v = launch_velocity(array![0.0, 0.0].view(), array![3.0, 4.0].view());

        assert_relative_eq!(v[0], 0.6 * LAUNCH_SPEED);
        assert_relative_eq!(v[1], 0.8 * LAUNCH_SPEED);
    }

    #[test]
    fn path_oscillates_along_the_line_to_target() {
        let start = array![0.1, 0.2, 0.1];
        let target = array![0.9, 0.8, 0.7];
        let distance = norm((&start - &target).view());

        let path = manifold()
            .learning_geodesic(start.view(), target.view(), &GeodesicConfig::default())
            .unwrap();

        assert_eq!(path.trajectory.nrows(), 10_001);
        assert!(path.efficiency <= 1.0);

        // All forces act along the start-target line, so the path stays on it
        // and never strays much further than it started.
        let direction = (&target - &start) / distance;
        for point in path.trajectory.rows() {
            let offset = &point - &target;
            let along = offset.dot(&direction);
            let across = &offset - &(&direction * along);
            assert_abs_diff_eq!(norm(across.view()), 0.0, epsilon = 1e-9);
            assert!(along.abs() < 1.1 * distance);
        }
    }

    #[test]
    fn starting_at_target_stays_put() {
        let point = array![0.5, 0.5, 0.5];
        let config = GeodesicConfig::new(2.0, 0.5).unwrap();

        let path = manifold()
            .learning_geodesic(point.view(), point.view(), &config)
            .unwrap();

        assert_eq!(path.final_position, point);
        assert_relative_eq!(path.efficiency, 1.0);
        assert!(path.converged);
    }

    #[test]
    fn observer_can_stop_the_path() {
        let start = array![0.0, 0.0, 0.0];
        let target = array![1.0, 0.0, 0.0];
        let observer =
            |event: &euler::Event<Phase>| (event.step == 5).then_some(euler::Action::StopEarly);

        let path = manifold()
            .learning_geodesic_observed(
                start.view(),
                target.view(),
                &GeodesicConfig::default(),
                observer,
            )
            .unwrap();

        assert_eq!(path.trajectory.nrows(), 6);
        assert!(path.efficiency > 0.0 && path.efficiency < 0.01);
        assert!(!path.converged);
    }

    #[test]
    fn endpoints_must_match_dimension() {
        let result = manifold().learning_geodesic(
            array![0.0, 0.0].view(),
            array![1.0, 1.0, 1.0].view(),
            &GeodesicConfig::default(),
        );

        assert!(matches!(
            result,
            Err(ManifoldError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }
}
