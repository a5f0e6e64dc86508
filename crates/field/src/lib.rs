//! Leapfrog integration of the Ontologica scalar field equation.
//!
//! The field φ lives on a periodic `rows × cols` lattice with unit spacing
//! (a 1-D lattice is a single row) and evolves under
//!
//! ```text
//! (□ + m²)φ = J + λ|φ|²φ
//! ```
//!
//! discretized with the explicit two-step rule
//!
//! ```text
//! φ_{n+1} = 2φ_n − φ_{n−1} + dt²·(∇²φ_n − m²φ_n + J + λφ_n³)
//! ```
//!
//! # Modules
//!
//! - [`FieldIntegrator`]: owns φ_n and φ_{n−1}, steps and runs the field
//! - [`energy()`] and [`FieldIntegrator::discrete_energy`]: energy diagnostics
//! - [`spectral_diagnostics`]: power spectrum, coherence length, fluctuation,
//!   decoherence time; [`energy_levels`]
//! - [`activation()`]: the φ(S) activation measure
//! - [`Actualization`]: the potential-to-manifest actualization operator
//! - [`relationship_strengths`]: pairwise coupling between several fields
//! - [`config`]: serde-backed run configuration

pub mod config;
pub mod forcing;
pub mod init;
pub mod stencil;

mod activation;
mod actualization;
mod energy;
mod error;
mod integrator;
mod lattice;
mod params;
mod relations;
mod spectral;

pub use activation::{ACTIVATION_THRESHOLD, Activation, activation};
pub use actualization::{Actualization, Context};
pub use energy::{Energy, energy};
pub use error::{Error, InvalidArgument};
pub use forcing::Forcing;
pub use integrator::{Action, Event, FieldIntegrator, Run, Sample, Status, leapfrog_step};
pub use lattice::{Lattice, Shape};
pub use params::Params;
pub use relations::relationship_strengths;
pub use spectral::{
    BASE_DECOHERENCE_TIME, ENERGY_LEVELS, SpectralDiagnostics, energy_levels, power_spectrum,
    spectral_diagnostics,
};
