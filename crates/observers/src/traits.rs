//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch both the Euler solver and a field run.
//!
//! # Event traits
//!
//! - [`HasStep`]: events that carry a step index
//! - [`HasField`]: events that carry a field snapshot and its energy
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use ontologica_core::Observer;
//! use ontologica_observers::traits::{CanStopEarly, HasStep};
//!
//! struct StopAfter {
//!     last_step: usize,
//! }
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.last_step).then(A::stop_early)
//!     }
//! }
//! ```

use ndarray::Array2;
use ontologica_field as field;
use ontologica_solvers::transient::euler;

/// An event that carries a step index.
pub trait HasStep {
    /// Returns the step index, 0 for the initial state.
    fn step(&self) -> usize;
}

/// An event that carries a field snapshot.
pub trait HasField: HasStep {
    /// Returns the field at this step.
    fn field(&self) -> &Array2<f64>;

    /// Returns the total energy of the field.
    fn energy(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasStep impls ---

impl<S> HasStep for euler::Event<S> {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasStep for field::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }
}

// --- HasField for field::Event ---

impl HasField for field::Event<'_> {
    fn field(&self) -> &Array2<f64> {
        self.field
    }

    fn energy(&self) -> f64 {
        self.energy.total()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for field::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
