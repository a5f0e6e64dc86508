use ndarray::Array2;
use ontologica_core::Observer;
use tracing::{debug, trace, warn};

use super::{Action, Event, FieldIntegrator};
use crate::{Activation, Energy, Error, Forcing, InvalidArgument, activation};

// Histories grow past this on demand.
const PREALLOCATED_SAMPLES: usize = 1024;

/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A field snapshot recorded during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Step index within the run at which the snapshot was taken.
    pub step: usize,

    pub field: Array2<f64>,

    pub energy: Energy,

    /// Activation measure of `field`.
    pub activation: Activation,
}

/// The result of [`FieldIntegrator::run`].
#[derive(Debug, Clone)]
pub struct Run {
    /// How the run terminated.
    pub status: Status,

    /// Number of steps taken during the run.
    pub steps: usize,

    /// The field after the last step taken.
    pub final_field: Array2<f64>,

    /// Snapshots in increasing step order.
    pub history: Vec<Sample>,
}

impl Run {
    /// Total energy of each sample, parallel to [`Run::history`].
    #[must_use]
    pub fn energies(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.energy.total()).collect()
    }

    /// Activation of each sample, parallel to [`Run::history`].
    #[must_use]
    pub fn activations(&self) -> Vec<Activation> {
        self.history.iter().map(|s| s.activation).collect()
    }
}

impl FieldIntegrator {
    /// Takes `steps` steps, sampling the field every `sample_stride` steps.
    ///
    /// # Sampling
    ///
    /// Step index `k` names the state after `k` steps of this run, so step 0
    /// is the state the run starts from. A [`Sample`] is recorded for every
    /// `k < steps` with `k % sample_stride == 0`. A run of `N` steps with
    /// stride 1 therefore records `N` samples, and a run of 100 steps with
    /// stride 10 records 10. The state after the last step is
    /// [`Run::final_field`].
    ///
    /// # Observer
    ///
    /// The observer receives an [`Event`] for every step index `0..=steps`
    /// and may return [`Action::StopEarly`] to end the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `steps` or `sample_stride` is
    /// zero, and [`Error::EnergyOverflow`] if the energy of a reached state
    /// is not finite. Any step error aborts the run; the integrator keeps
    /// the last finite state. A [`Error::NonFinite`] from a run carries the
    /// run-local index of the step that diverged, not
    /// [`FieldIntegrator::steps_taken`].
    pub fn run<F, Obs>(
        &mut self,
        steps: usize,
        mut forcing: F,
        sample_stride: usize,
        mut observer: Obs,
    ) -> Result<Run, Error>
    where
        F: Forcing,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        if steps == 0 {
            return Err(InvalidArgument::Steps.into());
        }
        if sample_stride == 0 {
            return Err(InvalidArgument::SampleStride.into());
        }

        debug!(
            steps,
            sample_stride,
            shape = ?self.lattice.shape(),
            "starting field run"
        );

        let capacity = steps.div_ceil(sample_stride).min(PREALLOCATED_SAMPLES);
        let mut history = Vec::with_capacity(capacity);
        let mut step = 0;
        let status = loop {
            let energy = self.energy();
            if !energy.total().is_finite() {
                warn!(step, "field energy overflowed");
                return Err(Error::EnergyOverflow { step });
            }

            if step < steps && step % sample_stride == 0 {
                let activation = activation(&self.current);
                trace!(
                    step,
                    energy = energy.total(),
                    activation = activation.total,
                    "sampled field"
                );
                history.push(Sample {
                    step,
                    field: self.current.clone(),
                    energy,
                    activation,
                });
            }

            let event = Event {
                step,
                field: &self.current,
                energy,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                break Status::StoppedByObserver;
            }

            if step == steps {
                break Status::Complete;
            }

            let j = forcing.forcing(step);
            self.step(&j).map_err(|err| match err {
                Error::NonFinite { site, .. } => Error::NonFinite {
                    step: step + 1,
                    site,
                },
                other => other,
            })?;
            step += 1;
        };

        debug!(?status, steps = step, energy = self.energy().total(), "field run finished");

        Ok(Run {
            status,
            steps: step,
            final_field: self.current.clone(),
            history,
        })
    }

    /// Runs without observation.
    ///
    /// # Errors
    ///
    /// See [`FieldIntegrator::run`].
    pub fn run_unobserved<F: Forcing>(
        &mut self,
        steps: usize,
        forcing: F,
        sample_stride: usize,
    ) -> Result<Run, Error> {
        self.run(steps, forcing, sample_stride, ())
    }
}
