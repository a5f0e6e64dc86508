//! Reusable observers for Ontologica solvers and field runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the Euler solver and the field integrator.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasStep`], [`HasField`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogProgress`] logs a progress line every few steps.
//! - [`CsvRecorder`] writes a per-step field summary as CSV.
//! - [`AmplitudeLimit`] stops a field run whose amplitude runs away.
//!
//! [`Observer`]: ontologica_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasField`]: traits::HasField
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod amplitude;
mod csv;
mod progress;

pub use amplitude::AmplitudeLimit;
pub use csv::{CsvRecorder, HEADER as CSV_HEADER};
pub use progress::LogProgress;
