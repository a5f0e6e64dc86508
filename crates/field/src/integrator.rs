//! The leapfrog field integrator.
//!
//! [`FieldIntegrator`] owns the current and previous field and advances them
//! together. [`leapfrog_step`] is the same update as a pure function for
//! callers that want to hold the history themselves.

mod action;
mod event;
mod run;

pub use action::Action;
pub use event::Event;
pub use run::{Run, Sample, Status};

use ndarray::{Array2, Zip};
use rand::Rng;
use tracing::warn;

use crate::{
    Activation, ENERGY_LEVELS, Energy, Error, Lattice, Params, SpectralDiagnostics, activation,
    energy, energy_levels, init, lattice::check_shape, spectral_diagnostics, stencil,
};

/// Computes `φ_{n+1}` from `φ_n`, `φ_{n−1}` and the forcing `J`.
///
/// ```text
/// φ_{n+1} = 2φ_n − φ_{n−1} + dt²·(∇²φ_n − m²φ_n + J + λφ_n³)
/// ```
///
/// The result is not checked for finiteness; [`FieldIntegrator::step`] does
/// that before accepting it.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `previous` or `forcing` differs in
/// shape from `current`.
pub fn leapfrog_step(
    current: &Array2<f64>,
    previous: &Array2<f64>,
    forcing: &Array2<f64>,
    params: &Params,
) -> Result<Array2<f64>, Error> {
    check_shape(current.dim(), previous.dim())?;
    check_shape(current.dim(), forcing.dim())?;

    let dt2 = params.dt() * params.dt();
    let m2 = params.mass_squared();
    let lambda = params.coupling();
    let laplacian = stencil::laplacian(current);

    let mut next = Array2::zeros(current.dim());
    Zip::from(&mut next)
        .and(current)
        .and(previous)
        .and(forcing)
        .and(&laplacian)
        .for_each(|next, &phi, &prev, &j, &lap| {
            let nonlinear = lambda * phi * phi * phi;
            *next = 2.0 * phi - prev + dt2 * (lap - m2 * phi + j + nonlinear);
        });

    Ok(next)
}

/// Steps a scalar field on a fixed lattice with the leapfrog rule.
///
/// The integrator always holds a finite pair `(φ_n, φ_{n−1})`. A step that
/// would produce NaN or an infinity is rejected with [`Error::NonFinite`] and
/// leaves the pair unchanged.
#[derive(Debug, Clone)]
pub struct FieldIntegrator {
    lattice: Lattice,
    params: Params,
    current: Array2<f64>,
    previous: Array2<f64>,
    steps_taken: usize,
}

impl FieldIntegrator {
    /// Creates an integrator at rest: `φ_{−1} = φ_0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `initial` does not match the
    /// lattice, or [`Error::NonFinite`] if it holds a non-finite value.
    pub fn new(lattice: Lattice, params: Params, initial: Array2<f64>) -> Result<Self, Error> {
        lattice.check(&initial)?;
        ensure_finite(&initial, 0)?;

        Ok(Self {
            lattice,
            params,
            previous: initial.clone(),
            current: initial,
            steps_taken: 0,
        })
    }

    /// Creates an integrator with an initial velocity: `φ_{−1} = φ_0 − dt·v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if either array does not match the
    /// lattice, or [`Error::NonFinite`] if either holds a non-finite value.
    pub fn with_velocity(
        lattice: Lattice,
        params: Params,
        initial: Array2<f64>,
        velocity: &Array2<f64>,
    ) -> Result<Self, Error> {
        lattice.check(velocity)?;
        let mut integrator = Self::new(lattice, params, initial)?;

        let previous = &integrator.current - &(velocity * params.dt());
        ensure_finite(&previous, 0)?;
        integrator.previous = previous;

        Ok(integrator)
    }

    /// Creates an integrator at rest with a `Normal(0, std_dev)` field drawn
    /// from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `std_dev` is negative or
    /// non-finite.
    pub fn random<R: Rng + ?Sized>(
        lattice: Lattice,
        params: Params,
        std_dev: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let initial = init::gaussian(lattice, std_dev, rng)?;
        Self::new(lattice, params, initial)
    }

    #[must_use]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The field at the current step, `φ_n`.
    #[must_use]
    pub fn current(&self) -> &Array2<f64> {
        &self.current
    }

    /// The field one step behind, `φ_{n−1}`.
    #[must_use]
    pub fn previous(&self) -> &Array2<f64> {
        &self.previous
    }

    /// Number of steps accepted since construction.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Advances the field by one step under `forcing` and returns the new
    /// current field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `forcing` does not match the
    /// lattice, or [`Error::NonFinite`] if the step diverges. The error's
    /// `step` is [`FieldIntegrator::steps_taken`] plus one. The state is
    /// unchanged on error.
    pub fn step(&mut self, forcing: &Array2<f64>) -> Result<&Array2<f64>, Error> {
        self.lattice.check(forcing)?;

        let next = leapfrog_step(&self.current, &self.previous, forcing, &self.params)?;
        ensure_finite(&next, self.steps_taken + 1)?;

        self.previous = std::mem::replace(&mut self.current, next);
        self.steps_taken += 1;

        Ok(&self.current)
    }

    /// Energy of the current field snapshot.
    #[must_use]
    pub fn energy(&self) -> Energy {
        energy(&self.current, &self.params)
    }

    /// The energy of the state pair `(φ_n, φ_{n−1})` that leapfrog conserves.
    ///
    /// ```text
    /// ½ Σ ((φ_n − φ_{n−1}) / dt)²  +  ½ Σ (Dφ_n)(Dφ_{n−1})
    ///   + ½ m² Σ φ_n φ_{n−1}  −  ¼ λ Σ φ_n² φ_{n−1}²
    /// ```
    ///
    /// The `+λφ³` force derives from the potential `−¼λφ⁴`, hence the minus
    /// sign on the interaction term. This differs from the static
    /// [`Energy`], whose interaction term is `+¼λΣφ⁴`.
    ///
    /// Without forcing and with `λ = 0` this is constant up to rounding. With
    /// `λ > 0` it drifts only at `O(dt²)`.
    #[must_use]
    pub fn discrete_energy(&self) -> f64 {
        let dt = self.params.dt();
        let (mut velocity, mut mass, mut interaction) = (0.0, 0.0, 0.0);
        for (&now, &before) in self.current.iter().zip(self.previous.iter()) {
            let rate = (now - before) / dt;
            velocity += rate * rate;
            mass += now * before;
            interaction += now * now * before * before;
        }
        let gradient = stencil::gradient_dot(&self.current, &self.previous);

        0.5 * velocity
            + 0.5 * gradient
            + 0.5 * self.params.mass_squared() * mass
            - 0.25 * self.params.coupling() * interaction
    }

    /// Spectral diagnostics of the current field.
    #[must_use]
    pub fn spectral_diagnostics(&self) -> SpectralDiagnostics {
        spectral_diagnostics(&self.current)
    }

    /// Approximate energy levels for the integrator's mass.
    #[must_use]
    pub fn energy_levels(&self) -> [f64; ENERGY_LEVELS] {
        energy_levels(&self.params)
    }

    /// Activation measure of the current field.
    #[must_use]
    pub fn activation(&self) -> Activation {
        activation(&self.current)
    }
}

fn ensure_finite(field: &Array2<f64>, step: usize) -> Result<(), Error> {
    match field.indexed_iter().find(|(_, v)| !v.is_finite()) {
        None => Ok(()),
        Some((site, value)) => {
            warn!(step, ?site, value, "field diverged");
            Err(Error::NonFinite { step, site })
        }
    }
}
