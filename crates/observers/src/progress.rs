use ontologica_core::Observer;
use tracing::info;

use crate::traits::HasStep;

/// Logs a `tracing` info line every `every` steps. Never acts.
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: &'static str,
    every: usize,
    logged: usize,
}

impl LogProgress {
    /// Creates a logger for the run named `label`.
    ///
    /// An `every` of zero is treated as one.
    #[must_use]
    pub fn new(label: &'static str, every: usize) -> Self {
        Self {
            label,
            every: every.max(1),
            logged: 0,
        }
    }

    /// Number of lines logged so far.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl<E: HasStep, A> Observer<E, A> for LogProgress {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if step % self.every == 0 {
            info!(run = self.label, step, "progress");
            self.logged += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ontologica_solvers::transient::euler;

    fn event(step: usize) -> euler::Event<f64> {
        euler::Event { step, state: 0.0 }
    }

    #[test]
    fn logs_every_nth_step() {
        let mut progress = LogProgress::new("test", 5);

        for step in 0..=12 {
            let action: Option<euler::Action> = progress.observe(&event(step));
            assert_eq!(action, None);
        }

        // Steps 0, 5 and 10.
        assert_eq!(progress.logged(), 3);
    }

    #[test]
    fn zero_interval_logs_every_step() {
        let mut progress = LogProgress::new("test", 0);

        for step in 0..4 {
            let _: Option<euler::Action> = progress.observe(&event(step));
        }

        assert_eq!(progress.logged(), 4);
    }
}
