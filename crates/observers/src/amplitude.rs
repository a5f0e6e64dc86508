use ontologica_core::Observer;
use tracing::warn;

use crate::traits::{CanStopEarly, HasField};

/// Stops a run once any site's magnitude exceeds `limit`.
///
/// Catches a run heading for divergence while its values are still finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeLimit {
    limit: f64,
}

impl AmplitudeLimit {
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }

    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl<E: HasField, A: CanStopEarly> Observer<E, A> for AmplitudeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        let peak = max_abs(event.field().iter().copied());
        if peak > self.limit {
            warn!(step = event.step(), peak, limit = self.limit, "amplitude limit exceeded");
            return Some(A::stop_early());
        }
        None
    }
}

pub(crate) fn max_abs(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |peak, v| peak.max(v.abs()))
}
