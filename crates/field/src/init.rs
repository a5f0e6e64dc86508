//! Initial conditions and noise fields.

use std::ops::Range;

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{InvalidArgument, Lattice};

/// A zero field with `value` on columns `columns` of every row.
///
/// # Errors
///
/// Returns [`InvalidArgument::Columns`] if the range is empty or runs past
/// the lattice.
pub fn pulse(
    lattice: Lattice,
    columns: Range<usize>,
    value: f64,
) -> Result<Array2<f64>, InvalidArgument> {
    if columns.is_empty() || columns.end > lattice.cols() {
        return Err(InvalidArgument::Columns {
            from: columns.start,
            to: columns.end,
        });
    }

    Ok(Array2::from_shape_fn(lattice.shape(), |(_, j)| {
        if columns.contains(&j) { value } else { 0.0 }
    }))
}

/// A field of independent `Normal(0, std_dev)` samples drawn from `rng`.
///
/// # Errors
///
/// Returns [`InvalidArgument::StdDev`] if `std_dev` is negative or
/// non-finite.
pub fn gaussian<R: Rng + ?Sized>(
    lattice: Lattice,
    std_dev: f64,
    rng: &mut R,
) -> Result<Array2<f64>, InvalidArgument> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(InvalidArgument::StdDev);
    }
    let normal = Normal::new(0.0, std_dev).map_err(|_| InvalidArgument::StdDev)?;

    Ok(Array2::from_shape_simple_fn(lattice.shape(), || {
        normal.sample(&mut *rng)
    }))
}
