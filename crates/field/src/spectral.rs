use std::f64::consts::TAU;

use ndarray::Array2;
use num_complex::Complex64;

use crate::Params;

/// Decoherence time, in seconds, of a field with unit mean spectral
/// magnitude.
pub const BASE_DECOHERENCE_TIME: f64 = 3.2e-3;

/// Number of levels returned by [`energy_levels`].
pub const ENERGY_LEVELS: usize = 5;

/// Spectral and statistical summary of a field snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralDiagnostics {
    /// `|DFT(φ)|²`, same shape as the field.
    pub power_spectrum: Array2<f64>,

    /// First lag along the row axis at which the circular autocorrelation
    /// drops below half its zero-lag value, or the row length if it never
    /// does.
    pub coherence_length: usize,

    /// Population standard deviation of the field values.
    pub fluctuation: f64,

    /// [`BASE_DECOHERENCE_TIME`] scaled by the mean `|DFT(φ)|`.
    pub decoherence_time: f64,
}

/// Computes [`SpectralDiagnostics`] for a field. Pure.
#[must_use]
pub fn spectral_diagnostics(field: &Array2<f64>) -> SpectralDiagnostics {
    let spectrum = dft2(field);

    SpectralDiagnostics {
        power_spectrum: spectrum.mapv(|c| c.norm_sqr()),
        coherence_length: coherence_length(field),
        fluctuation: std_dev(field.iter().copied()),
        decoherence_time: BASE_DECOHERENCE_TIME * mean(spectrum.iter().map(|c| c.norm())),
    }
}

/// The first [`ENERGY_LEVELS`] approximate levels `m·(1 + 0.1·n²)`,
/// `n = 1, 2, …`.
#[must_use]
pub fn energy_levels(params: &Params) -> [f64; ENERGY_LEVELS] {
    std::array::from_fn(|i| {
        let n = (i + 1) as f64;
        params.mass() * (1.0 + 0.1 * n * n)
    })
}

/// `|DFT(φ)|²` of a field.
#[must_use]
pub fn power_spectrum(field: &Array2<f64>) -> Array2<f64> {
    dft2(field).mapv(|c| c.norm_sqr())
}

/// Unnormalized 2-D discrete Fourier transform, rows first then columns.
pub(crate) fn dft2(field: &Array2<f64>) -> Array2<Complex64> {
    let mut spectrum = field.mapv(|v| Complex64::new(v, 0.0));

    for mut row in spectrum.rows_mut() {
        let transformed = dft(&row.to_vec());
        for (slot, value) in row.iter_mut().zip(transformed) {
            *slot = value;
        }
    }
    for mut column in spectrum.columns_mut() {
        let transformed = dft(&column.to_vec());
        for (slot, value) in column.iter_mut().zip(transformed) {
            *slot = value;
        }
    }

    spectrum
}

// Lattices here are small; the direct sum keeps the transform dependency-free.
fn dft(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(t, &x)| {
                    let angle = -TAU * ((k * t) % n) as f64 / n as f64;
                    x * Complex64::from_polar(1.0, angle)
                })
                .sum()
        })
        .collect()
}

fn coherence_length(field: &Array2<f64>) -> usize {
    let cols = field.ncols();
    let autocorrelation = |lag: usize| -> f64 {
        field
            .rows()
            .into_iter()
            .map(|row| {
                (0..cols)
                    .map(|j| row[j] * row[(j + lag) % cols])
                    .sum::<f64>()
            })
            .sum()
    };

    let half = 0.5 * autocorrelation(0);
    (0..cols)
        .find(|&lag| autocorrelation(lag) < half)
        .unwrap_or(cols)
}

pub(crate) fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

pub(crate) fn std_dev(values: impl ExactSizeIterator<Item = f64> + Clone) -> f64 {
    let mean = mean(values.clone());
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let variance = values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    variance.sqrt()
}
