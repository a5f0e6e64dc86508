/// A state that can be advanced using its derivative.
///
/// Explicit one-step solvers advance a state by `derivative * delta`, where
/// the derivative is taken with respect to `Delta`. `Delta` is usually a time
/// increment, but any independent variable works (arc length along a learning
/// path, for instance).
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    // Phase-space point of a particle on a line.
    #[derive(Debug, PartialEq)]
    struct Phase {
        x: f64,
        v: f64,
    }

    struct PhaseRate {
        dx: f64,
        dv: f64,
    }

    impl StepIntegrable<f64> for Phase {
        type Derivative = PhaseRate;

        fn step(&self, derivative: PhaseRate, delta: f64) -> Self {
            Phase {
                x: self.x + derivative.dx * delta,
                v: self.v + derivative.dv * delta,
            }
        }
    }

    // Lattice of sample values.
    #[derive(Debug, PartialEq)]
    struct Samples(Vec<f64>);

    impl StepIntegrable<f64> for Samples {
        type Derivative = Vec<f64>;

        fn step(&self, derivative: Vec<f64>, delta: f64) -> Self {
            Samples(
                self.0
                    .iter()
                    .zip(&derivative)
                    .map(|(s, d)| s + d * delta)
                    .collect(),
            )
        }
    }

    #[test]
    fn step_phase_point() {
        let phase = Phase { x: 1.0, v: 2.0 };
        let rate: DerivativeOf<Phase, f64> = PhaseRate { dx: 2.0, dv: -4.0 };

        assert_eq!(phase.step(rate, 0.25), Phase { x: 1.5, v: 1.0 });
    }

    #[test]
    fn step_samples() {
        let samples = Samples(vec![0.0, 1.0, -1.0]);

        let next = samples.step(vec![4.0, 0.0, 8.0], 0.5);

        assert_eq!(next, Samples(vec![2.0, 1.0, 3.0]));
    }
}
