//! Periodic finite-difference stencils with unit lattice spacing.
//!
//! Every stencil wraps at the lattice edges. An axis of length one has no
//! neighbours other than itself, so it contributes nothing.

use ndarray::Array2;

/// Discrete Laplacian: the 3-point second difference summed over both axes.
#[must_use]
pub fn laplacian(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let up = field[[(i + rows - 1) % rows, j]];
        let down = field[[(i + 1) % rows, j]];
        let left = field[[i, (j + cols - 1) % cols]];
        let right = field[[i, (j + 1) % cols]];
        up + down + left + right - 4.0 * field[[i, j]]
    })
}

/// Forward difference along the row axis: `φ[i, j+1] − φ[i, j]`.
#[must_use]
pub fn forward_x(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        field[[i, (j + 1) % cols]] - field[[i, j]]
    })
}

/// Forward difference along the column axis: `φ[i+1, j] − φ[i, j]`.
#[must_use]
pub fn forward_y(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        field[[(i + 1) % rows, j]] - field[[i, j]]
    })
}

/// Squared gradient magnitude at every site, from forward differences.
#[must_use]
pub fn gradient_squared(field: &Array2<f64>) -> Array2<f64> {
    let dx = forward_x(field);
    let dy = forward_y(field);
    dx.mapv(|v| v * v) + dy.mapv(|v| v * v)
}

/// Sum over sites and axes of `(Da)(Db)` with forward differences `D`.
///
/// Summation by parts makes this equal to `−Σ a·∇²b` on a periodic lattice.
#[must_use]
pub fn gradient_dot(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    let (dax, day) = (forward_x(a), forward_y(a));
    let (dbx, dby) = (forward_x(b), forward_y(b));

    let along_x: f64 = dax.iter().zip(dbx.iter()).map(|(p, q)| p * q).sum();
    let along_y: f64 = day.iter().zip(dby.iter()).map(|(p, q)| p * q).sum();
    along_x + along_y
}
