use ndarray::Array1;
use ontologica_core::StepIntegrable;

/// A point in phase space: knowledge position and learning velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub position: Array1<f64>,
    pub velocity: Array1<f64>,
}

/// Time derivative of a [`Phase`].
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRate {
    pub velocity: Array1<f64>,
    pub acceleration: Array1<f64>,
}

impl StepIntegrable<f64> for Phase {
    type Derivative = PhaseRate;

    fn step(&self, derivative: PhaseRate, dt: f64) -> Self {
        Phase {
            position: &self.position + &(derivative.velocity * dt),
            velocity: &self.velocity + &(derivative.acceleration * dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn step_moves_position_and_velocity() {
        let phase = Phase {
            position: array![1.0, 0.0],
            velocity: array![0.0, 2.0],
        };
        let rate = PhaseRate {
            velocity: array![0.0, 2.0],
            acceleration: array![4.0, -4.0],
        };

        let next = phase.step(rate, 0.5);

        assert_eq!(next.position, array![1.0, 1.0]);
        assert_eq!(next.velocity, array![2.0, 0.0]);
    }
}
