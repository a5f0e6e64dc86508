//! A double-slit experiment whose fringe contrast depends on the observer.
//!
//! Each observer is described by a [`Context`]: its activation and
//! coherence. Together they set the probability that the two-slit wave
//! collapses into a which-path mixture, and so the visibility of the
//! interference fringes on the screen.

mod experiment;
mod geometry;
mod pattern;

pub use experiment::{Correlation, Experiment, Prediction, Trial, pearson, simulate};
pub use geometry::{Geometry, GeometryError};
pub use ontologica_field::Context;
pub use pattern::{
    collapse_probability, decoherence_effect, fringe_pattern, fringe_spacing, visibility,
    which_path_information,
};
