//! Connection and curvature of a position-dependent metric.
//!
//! Derivatives are central differences with step [`DIFFERENCE_STEP`], so the
//! results carry an `O(h²)` truncation error. A constant metric gives exact
//! zeros.

use ndarray::{Array1, Array2, Array3, Array4, ArrayView1, Axis};

use crate::ManifoldError;

/// Step of the central differences.
pub const DIFFERENCE_STEP: f64 = 1e-4;

// Pivots smaller than this make the metric singular.
const SINGULAR_PIVOT: f64 = 1e-12;

/// Christoffel symbols `Γᵐᵢⱼ` of `metric` at `point`, indexed `[m, i, j]`.
///
/// ```text
/// Γᵐᵢⱼ = ½ gᵐᵏ (∂ᵢ gⱼₖ + ∂ⱼ gᵢₖ − ∂ₖ gᵢⱼ)
/// ```
///
/// # Errors
///
/// Returns [`ManifoldError::ZeroDimension`] for an empty point,
/// [`ManifoldError::NonFinite`] for a non-finite point or metric entry,
/// [`ManifoldError::MetricShape`] if the metric is not `n × n`, and
/// [`ManifoldError::SingularMetric`] if it cannot be inverted.
pub fn christoffel<G>(metric: G, point: ArrayView1<'_, f64>) -> Result<Array3<f64>, ManifoldError>
where
    G: Fn(ArrayView1<'_, f64>) -> Array2<f64>,
{
    let n = point.len();
    if n == 0 {
        return Err(ManifoldError::ZeroDimension);
    }
    if point.iter().any(|v| !v.is_finite()) {
        return Err(ManifoldError::NonFinite);
    }

    let inverse = invert(&evaluate(&metric, point)?)?;

    // dg[[k, i, j]] = ∂ₖ gᵢⱼ
    let mut dg = Array3::zeros((n, n, n));
    for k in 0..n {
        let plus = evaluate(&metric, shifted(point, k, DIFFERENCE_STEP).view())?;
        let minus = evaluate(&metric, shifted(point, k, -DIFFERENCE_STEP).view())?;
        dg.index_axis_mut(Axis(0), k)
            .assign(&((plus - minus) / (2.0 * DIFFERENCE_STEP)));
    }

    let mut gamma = Array3::zeros((n, n, n));
    for ((m, i, j), value) in gamma.indexed_iter_mut() {
        *value = 0.5
            * (0..n)
                .map(|k| inverse[[m, k]] * (dg[[i, j, k]] + dg[[j, i, k]] - dg[[k, i, j]]))
                .sum::<f64>();
    }

    Ok(gamma)
}

/// Riemann curvature tensor `Rᵏₗᵢⱼ` of `metric` at `point`, indexed
/// `[k, l, i, j]`.
///
/// ```text
/// Rᵏₗᵢⱼ = ∂ᵢ Γᵏⱼₗ − ∂ⱼ Γᵏᵢₗ + Γᵏᵢₘ Γᵐⱼₗ − Γᵏⱼₘ Γᵐᵢₗ
/// ```
///
/// # Errors
///
/// See [`christoffel`].
pub fn riemann<G>(metric: G, point: ArrayView1<'_, f64>) -> Result<Array4<f64>, ManifoldError>
where
    G: Fn(ArrayView1<'_, f64>) -> Array2<f64>,
{
    let gamma = christoffel(&metric, point)?;
    let n = point.len();

    // dgamma[[a, k, i, j]] = ∂ₐ Γᵏᵢⱼ
    let mut dgamma = Array4::zeros((n, n, n, n));
    for a in 0..n {
        let plus = christoffel(&metric, shifted(point, a, DIFFERENCE_STEP).view())?;
        let minus = christoffel(&metric, shifted(point, a, -DIFFERENCE_STEP).view())?;
        dgamma
            .index_axis_mut(Axis(0), a)
            .assign(&((plus - minus) / (2.0 * DIFFERENCE_STEP)));
    }

    let mut curvature = Array4::zeros((n, n, n, n));
    for ((k, l, i, j), value) in curvature.indexed_iter_mut() {
        let products: f64 = (0..n)
            .map(|m| gamma[[k, i, m]] * gamma[[m, j, l]] - gamma[[k, j, m]] * gamma[[m, i, l]])
            .sum();
        *value = dgamma[[i, k, j, l]] - dgamma[[j, k, i, l]] + products;
    }

    Ok(curvature)
}

fn evaluate<G>(metric: &G, point: ArrayView1<'_, f64>) -> Result<Array2<f64>, ManifoldError>
where
    G: Fn(ArrayView1<'_, f64>) -> Array2<f64>,
{
    let g = metric(point);
    let n = point.len();
    if g.dim() != (n, n) {
        return Err(ManifoldError::MetricShape {
            expected: n,
            found: g.dim(),
        });
    }
    if g.iter().any(|v| !v.is_finite()) {
        return Err(ManifoldError::NonFinite);
    }
    Ok(g)
}

fn shifted(point: ArrayView1<'_, f64>, axis: usize, offset: f64) -> Array1<f64> {
    let mut shifted = point.to_owned();
    shifted[axis] += offset;
    shifted
}

/// Gauss-Jordan inverse with partial pivoting.
fn invert(matrix: &Array2<f64>) -> Result<Array2<f64>, ManifoldError> {
    let n = matrix.nrows();
    let mut a = matrix.clone();
    let mut inverse = Array2::eye(n);

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        let p = a[[pivot, col]];
        if p.abs() < SINGULAR_PIVOT {
            return Err(ManifoldError::SingularMetric);
        }
        if pivot != col {
            for j in 0..n {
                a.swap([pivot, j], [col, j]);
                inverse.swap([pivot, j], [col, j]);
            }
        }

        for j in 0..n {
            a[[col, j]] /= p;
            inverse[[col, j]] /= p;
        }
        for row in 0..n {
            let factor = a[[row, col]];
            if row == col || factor == 0.0 {
                continue;
            }
            for j in 0..n {
                let (pa, pi) = (a[[col, j]], inverse[[col, j]]);
                a[[row, j]] -= factor * pa;
                inverse[[row, j]] -= factor * pi;
            }
        }
    }

    Ok(inverse)
}
