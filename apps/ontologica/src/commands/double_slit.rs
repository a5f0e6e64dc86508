//! Runs the double-slit experiment for a set of observers.

use anyhow::{Result, bail};
use clap::Args;
use ontologica_interference::{Context, Geometry, simulate};
use tracing::info;

/// Double-slit arguments
#[derive(Args)]
pub struct DoubleSlitArgs {
    /// Observer activation levels, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub activation: Vec<f64>,

    /// Observer coherence levels, comma separated, one per activation
    #[arg(long, value_delimiter = ',', required = true)]
    pub coherence: Vec<f64>,
}

/// Executes the double-slit command.
pub fn execute(args: DoubleSlitArgs) -> Result<()> {
    if args.activation.len() != args.coherence.len() {
        bail!(
            "got {} activation levels but {} coherence levels",
            args.activation.len(),
            args.coherence.len()
        );
    }

    let observers: Vec<Context> = args
        .activation
        .iter()
        .zip(&args.coherence)
        .map(|(&activation, &coherence)| Context {
            activation,
            coherence,
        })
        .collect();

    let experiment = simulate(&Geometry::default(), &observers);

    for trial in &experiment.trials {
        info!(
            activation = trial.context.activation,
            coherence = trial.context.coherence,
            collapse = trial.collapse_probability,
            visibility = trial.visibility,
            which_path = trial.which_path,
            decoherence = trial.decoherence,
            "trial"
        );
    }
    info!(
        visibility = ?experiment.correlation.visibility,
        which_path = ?experiment.correlation.which_path,
        "activation correlation"
    );
    info!(
        simulated = experiment.fringe_spacing,
        predicted = experiment.prediction.fringe_spacing,
        decoherence_time = experiment.prediction.decoherence_time,
        "fringe spacing"
    );

    Ok(())
}
