use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{Error, InvalidArgument};

/// Observation context for [`Actualization::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Activation level, usually [`Activation::total`](crate::Activation::total).
    pub activation: f64,

    /// Coherence level of the observer.
    pub coherence: f64,
}

impl Context {
    /// Standard deviation of the noise added by [`Actualization::apply`]:
    /// `1 − activation·coherence`, floored at zero.
    #[must_use]
    pub fn noise_level(&self) -> f64 {
        (1.0 - self.activation * self.coherence).max(0.0)
    }
}

/// Maps a potential state to a manifested one through a distance-decaying
/// kernel `K[i, j] = exp(−|i − j| / n)`, blurred by context-dependent noise.
#[derive(Debug, Clone, PartialEq)]
pub struct Actualization {
    kernel: Array2<f64>,
}

impl Actualization {
    /// Builds the operator for states of `size` components.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyLattice`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, InvalidArgument> {
        if size == 0 {
            return Err(InvalidArgument::EmptyLattice);
        }
        let n = size as f64;
        let kernel = Array2::from_shape_fn((size, size), |(i, j)| {
            let distance = i.abs_diff(j) as f64;
            (-distance / n).exp()
        });
        Ok(Self { kernel })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.kernel.nrows()
    }

    #[must_use]
    pub fn kernel(&self) -> &Array2<f64> {
        &self.kernel
    }

    /// Applies the kernel to `potential` and adds `Normal(0, noise)` to each
    /// component, where the noise level comes from `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `potential` has the wrong length.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        potential: &Array1<f64>,
        context: Context,
        rng: &mut R,
    ) -> Result<Array1<f64>, Error> {
        if potential.len() != self.size() {
            return Err(Error::ShapeMismatch {
                expected: (1, self.size()),
                found: (1, potential.len()),
            });
        }

        let mut manifested = self.kernel.dot(potential);

        let noise = context.noise_level();
        if noise > 0.0 {
            let normal = Normal::new(0.0, noise).map_err(|_| InvalidArgument::StdDev)?;
            manifested.mapv_inplace(|v| v + normal.sample(&mut *rng));
        }

        Ok(manifested)
    }
}
