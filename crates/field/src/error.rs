use thiserror::Error;

use crate::Shape;

/// Errors reported by the field integrator and its diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch { expected: Shape, found: Shape },

    /// A step produced NaN or an infinity. The integrator keeps the last
    /// finite state.
    #[error("non-finite value at site {site:?} on step {step}")]
    NonFinite { step: usize, site: Shape },

    /// The energy of a finite state overflowed during a run.
    #[error("energy overflowed on step {step}")]
    EnergyOverflow { step: usize },
}

/// Rejected constructor or run arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("lattice must have at least one row and one column")]
    EmptyLattice,

    #[error("time step must be finite and positive")]
    TimeStep,

    #[error("mass must be finite and non-negative")]
    Mass,

    #[error("coupling must be finite and non-negative")]
    Coupling,

    #[error("standard deviation must be finite and non-negative")]
    StdDev,

    #[error("step count must be positive")]
    Steps,

    #[error("sample stride must be positive")]
    SampleStride,

    #[error("column range {from}..{to} does not fit the lattice")]
    Columns { from: usize, to: usize },
}
