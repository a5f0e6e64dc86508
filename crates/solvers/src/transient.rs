//! Solvers that march an [`OdeProblem`] forward in a fixed number of steps.
//!
//! [`OdeProblem`]: ontologica_core::OdeProblem

pub mod euler;
