use ndarray::Array2;

use crate::{Params, stencil};

/// Energy of a single field snapshot, split by term.
///
/// Every term is non-negative, so the total is too:
///
/// ```text
/// gradient    = ½ Σ |Dφ|²      (periodic forward differences, both axes)
/// potential   = ½ m² Σ φ²
/// interaction = ¼ λ Σ φ⁴
/// ```
///
/// A term whose coefficient is zero is exactly zero, so the energy of a finite
/// field is never NaN. Terms that overflow saturate at `+∞`.
///
/// The snapshot carries no time derivative. Use
/// [`FieldIntegrator::discrete_energy`](crate::FieldIntegrator::discrete_energy)
/// for the quantity the integrator conserves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Energy {
    pub gradient: f64,
    pub potential: f64,
    pub interaction: f64,
}

impl Energy {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.gradient + self.potential + self.interaction
    }
}

/// Computes the [`Energy`] of a field snapshot.
#[must_use]
pub fn energy(field: &Array2<f64>, params: &Params) -> Energy {
    let m2 = params.mass_squared();
    let lambda = params.coupling();

    let potential = if m2 == 0.0 {
        0.0
    } else {
        0.5 * m2 * field.iter().map(|v| v * v).sum::<f64>()
    };
    let interaction = if lambda == 0.0 {
        0.0
    } else {
        0.25 * lambda * field.iter().map(|v| v.powi(4)).sum::<f64>()
    };

    Energy {
        gradient: 0.5 * stencil::gradient_dot(field, field),
        potential,
        interaction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn zero_field_has_zero_energy() {
        let params = Params::new(1.0, 0.1, 0.01).unwrap();
        assert_eq!(energy(&Array2::<f64>::zeros((4, 4)), &params).total(), 0.0);
    }

    #[test]
    fn terms_follow_their_formulas() {
        let params = Params::new(2.0, 0.5, 0.01).unwrap();
        let field = array![[1.0, -1.0, 0.0, 0.0]];

        let e = energy(&field, &params);

        // Differences around the ring: -2, 1, 0, 1.
        assert_relative_eq!(e.gradient, 0.5 * 6.0);
        assert_relative_eq!(e.potential, 0.5 * 4.0 * 2.0);
        assert_relative_eq!(e.interaction, 0.25 * 0.5 * 2.0);
        assert_relative_eq!(e.total(), 3.0 + 4.0 + 0.25);
    }

    #[test]
    fn free_field_energy_of_a_huge_field_is_not_nan() {
        let field = Array2::from_elem((1, 4), 1e160);

        let massless = energy(&field, &Params::new(0.0, 0.0, 0.01).unwrap());
        assert_eq!(massless.total(), 0.0);

        let massive = energy(&field, &Params::new(1.0, 0.0, 0.01).unwrap());
        assert_eq!(massive.interaction, 0.0);
        assert_eq!(massive.potential, f64::INFINITY);
        assert!(!massive.total().is_nan());
    }

    #[test]
    fn energy_is_pure() {
        let params = Params::new(1.0, 0.1, 0.01).unwrap();
        let field = array![[0.2, 0.9, -0.4], [1.5, -0.7, 0.3]];

        assert_eq!(energy(&field, &params), energy(&field, &params));
        assert!(energy(&field, &params).total().is_finite());
    }
}
