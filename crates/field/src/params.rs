use crate::InvalidArgument;

/// Physical parameters of the field equation, fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    mass: f64,
    coupling: f64,
    dt: f64,
}

impl Params {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `mass` or `coupling` is negative, `dt` is not
    /// positive, or any value is non-finite.
    pub fn new(mass: f64, coupling: f64, dt: f64) -> Result<Self, InvalidArgument> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(InvalidArgument::Mass);
        }
        if !coupling.is_finite() || coupling < 0.0 {
            return Err(InvalidArgument::Coupling);
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(InvalidArgument::TimeStep);
        }

        Ok(Self { mass, coupling, dt })
    }

    /// Mass parameter `m`.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Self-interaction coupling `λ`.
    #[must_use]
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Time step `dt`.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[must_use]
    pub fn mass_squared(&self) -> f64 {
        self.mass * self.mass
    }
}
