use ndarray::Array2;

use crate::{
    spectral::{dft2, mean, std_dev},
    stencil,
};

/// Activation level above which a field counts as activated.
pub const ACTIVATION_THRESHOLD: f64 = 0.8;

/// The φ(S) activation measure of a field snapshot and its factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    /// Mean absolute field value.
    pub learning_capacity: f64,

    /// Population standard deviation of the per-site squared gradient.
    pub choice_capability: f64,

    /// Mean DFT magnitude divided by the number of sites.
    pub participation: f64,

    /// Product of the three factors.
    pub total: f64,

    /// Whether `total` exceeds [`ACTIVATION_THRESHOLD`].
    pub activated: bool,
}

/// Computes the [`Activation`] of a field.
#[must_use]
pub fn activation(field: &Array2<f64>) -> Activation {
    let sites = field.len();

    let learning_capacity = mean(field.iter().map(|v| v.abs()));
    let choice_capability = std_dev(stencil::gradient_squared(field).iter().copied());
    let participation = if sites == 0 {
        0.0
    } else {
        mean(dft2(field).iter().map(|c| c.norm())) / sites as f64
    };

    let total = learning_capacity * choice_capability * participation;
    Activation {
        learning_capacity,
        choice_capability,
        participation,
        total,
        activated: total > ACTIVATION_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn quiet_field_is_not_activated() {
        let a = activation(&Array2::<f64>::zeros((4, 4)));
        assert_eq!(a.total, 0.0);
        assert!(!a.activated);
    }

    #[test]
    fn uniform_field_has_no_choice() {
        let a = activation(&Array2::from_elem((1, 8), 2.0));

        assert_relative_eq!(a.learning_capacity, 2.0);
        assert_eq!(a.choice_capability, 0.0);
        // All power at zero frequency: |16| / 8 entries / 8 sites.
        assert_relative_eq!(a.participation, 0.25, epsilon = 1e-12);
        assert!(!a.activated);
    }

    #[test]
    fn strong_rough_field_is_activated() {
        let field = array![[10.0, -10.0, 10.0, 0.0]];

        let a = activation(&field);

        // Squared gradients around the ring: 400, 400, 100, 100.
        assert_relative_eq!(a.learning_capacity, 7.5);
        assert_relative_eq!(a.choice_capability, 150.0);
        assert_relative_eq!(a.total, a.learning_capacity * a.choice_capability * a.participation);
        assert!(a.activated);
    }
}
