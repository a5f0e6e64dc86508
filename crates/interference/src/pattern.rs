use std::f64::consts::TAU;

use ndarray::Array1;
use num_complex::Complex64;

use crate::Geometry;

/// Collapse probability of an observer with the given activation and
/// coherence: `max(0.01, 0.1·(1 − a·c))`.
#[must_use]
pub fn collapse_probability(activation: f64, coherence: f64) -> f64 {
    (0.1 * (1.0 - activation * coherence)).max(0.01)
}

/// Screen intensity for a collapse probability `p`.
///
/// ```text
/// I(x) = (1 − p)·|w₁ + w₂|² + p·(|w₁|² + |w₂|²)
/// ```
///
/// where `wₖ = exp(2πi·rₖ/λ)` and `rₖ` is the path length from slit `k` to
/// the screen point `x`. Sampled at [`Geometry::screen_positions`].
#[must_use]
pub fn fringe_pattern(geometry: &Geometry, collapse_probability: f64) -> Array1<f64> {
    let half_separation = geometry.slit_separation() / 2.0;
    let distance = geometry.screen_distance();
    let k = TAU / geometry.wavelength();
    let p = collapse_probability;

    geometry.screen_positions().mapv(|x| {
        let r1 = (x - half_separation).hypot(distance);
        let r2 = (x + half_separation).hypot(distance);
        let w1 = Complex64::from_polar(1.0, k * r1);
        let w2 = Complex64::from_polar(1.0, k * r2);

        (1.0 - p) * (w1 + w2).norm_sqr() + p * (w1.norm_sqr() + w2.norm_sqr())
    })
}

/// Michelson fringe visibility `(max − min) / (max + min)`.
///
/// Zero for an empty pattern or one whose extremes sum to zero.
#[must_use]
pub fn visibility(pattern: &Array1<f64>) -> f64 {
    let max = pattern.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = pattern.iter().copied().fold(f64::INFINITY, f64::min);

    if pattern.is_empty() || max + min <= 0.0 {
        0.0
    } else {
        (max - min) / (max + min)
    }
}

/// Which-path information gained by an observer: `min(1, 1.2·a)`.
#[must_use]
pub fn which_path_information(activation: f64) -> f64 {
    (1.2 * activation).min(1.0)
}

/// Decoherence effect of an observer: `1 / (c + 10⁻⁶)`.
#[must_use]
pub fn decoherence_effect(coherence: f64) -> f64 {
    1.0 / (coherence + 1e-6)
}

/// Far-field fringe spacing `λ·L / d`.
#[must_use]
pub fn fringe_spacing(geometry: &Geometry) -> f64 {
    geometry.wavelength() * geometry.screen_distance() / geometry.slit_separation()
}
