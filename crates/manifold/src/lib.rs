//! The Ontologica educational manifold.
//!
//! Knowledge states are points in an `n`-dimensional space with a
//! Lorentzian metric (the first axis is time-like). Two learning paths are
//! offered between a start and a target state:
//!
//! - [`EducationalManifold::learning_geodesic`] integrates a second-order
//!   "geodesic" with forward Euler, pulled towards the target by a constant
//!   magnitude acceleration.
//! - [`EducationalManifold::relaxation_path`] moves a shrinking fraction of
//!   the remaining distance each step.
//!
//! [`curvature`] computes Christoffel symbols and the Riemann tensor of any
//! position-dependent metric; the manifold's own metric is constant and flat.

pub mod curvature;

mod config;
mod error;
mod geodesic;
mod manifold;
mod phase;
mod relaxation;

pub use config::{ConfigError, GeodesicConfig, MAX_STEPS};
pub use error::ManifoldError;
pub use geodesic::{LAUNCH_SPEED, LearningPath, PULL, launch_velocity};
pub use manifold::EducationalManifold;
pub use phase::{Phase, PhaseRate};
pub use relaxation::{CONVERGENCE_DISTANCE, RELAXATION_RATE};
