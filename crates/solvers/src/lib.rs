//! Explicit time-stepping solvers for Ontologica simulations.
//!
//! - [`transient::euler`]: forward Euler for any [`OdeProblem`]
//!
//! [`OdeProblem`]: ontologica_core::OdeProblem

pub mod transient;
