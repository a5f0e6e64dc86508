use crate::{DerivativeOf, StepIntegrable};

/// A first-order system `dy/dt = f(y)` over a [`StepIntegrable`] state.
///
/// Higher-order systems are written in first-order form by carrying the
/// extra derivatives in the state (for example, position and velocity for a
/// geodesic).
pub trait OdeProblem {
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the derivative of the state.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        state: &Self::State,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;
}
