//! Core traits shared by the Ontologica solvers and simulations.
//!
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`
//! - [`OdeProblem`]: a first-order system `dy/dt = f(y)` over a stepped state

mod observer;
mod ode;
mod step;

pub use observer::Observer;
pub use ode::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
