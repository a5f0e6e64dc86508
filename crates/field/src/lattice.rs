use ndarray::Array2;

use crate::{Error, InvalidArgument};

/// Array shape as `(rows, cols)`.
pub type Shape = (usize, usize);

/// A periodic `rows × cols` lattice with unit spacing.
///
/// A 1-D lattice of `n` sites is a single row, `1 × n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
}

impl Lattice {
    /// Creates a 2-D lattice.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyLattice`] if either side is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, InvalidArgument> {
        if rows == 0 || cols == 0 {
            return Err(InvalidArgument::EmptyLattice);
        }
        Ok(Self { rows, cols })
    }

    /// Creates a 1-D lattice of `sites` points.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyLattice`] if `sites` is zero.
    pub fn line(sites: usize) -> Result<Self, InvalidArgument> {
        Self::new(1, sites)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Total number of lattice sites.
    #[must_use]
    pub fn sites(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns a zero field of this lattice's shape.
    #[must_use]
    pub fn zeros(&self) -> Array2<f64> {
        Array2::zeros(self.shape())
    }

    /// Checks that `field` has this lattice's shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] otherwise.
    pub fn check(&self, field: &Array2<f64>) -> Result<(), Error> {
        check_shape(self.shape(), field.dim())
    }
}

pub(crate) fn check_shape(expected: Shape, found: Shape) -> Result<(), Error> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::ShapeMismatch { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_a_single_row() {
        let lattice = Lattice::line(16).unwrap();
        assert_eq!(lattice.shape(), (1, 16));
        assert_eq!(lattice.sites(), 16);
        assert_eq!(lattice.zeros().dim(), (1, 16));
    }

    #[test]
    fn empty_sides_are_rejected() {
        assert_eq!(Lattice::line(0), Err(InvalidArgument::EmptyLattice));
        assert_eq!(Lattice::new(0, 4), Err(InvalidArgument::EmptyLattice));
        assert_eq!(Lattice::new(4, 0), Err(InvalidArgument::EmptyLattice));
    }

    #[test]
    fn check_reports_both_shapes() {
        let lattice = Lattice::new(2, 3).unwrap();
        assert!(lattice.check(&Array2::<f64>::zeros((2, 3))).is_ok());
        assert_eq!(
            lattice.check(&Array2::<f64>::zeros((3, 2))),
            Err(Error::ShapeMismatch {
                expected: (2, 3),
                found: (3, 2),
            })
        );
    }
}
