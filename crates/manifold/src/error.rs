use ontologica_solvers::transient::euler;
use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur when working with an educational manifold.
#[derive(Debug, Error)]
pub enum ManifoldError {
    #[error("manifold dimension must be at least 1")]
    ZeroDimension,

    #[error("expected a point of dimension {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("point or metric has a non-finite entry")]
    NonFinite,

    #[error("expected a {expected} x {expected} metric, found {found:?}")]
    MetricShape {
        expected: usize,
        found: (usize, usize),
    },

    #[error("metric is singular")]
    SingularMetric,

    #[error("invalid geodesic config: {0}")]
    Config(#[from] ConfigError),

    #[error("geodesic integration failed")]
    Solver(#[from] euler::Error),
}
