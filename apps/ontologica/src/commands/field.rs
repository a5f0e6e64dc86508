//! Runs the scalar field integrator from a YAML configuration.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ontologica_core::Observer;
use ontologica_field::{Action, Event, Status};
use ontologica_observers::{AmplitudeLimit, CsvRecorder, LogProgress};
use tracing::{info, warn};

use super::load_config;

/// Field run arguments
#[derive(Args)]
pub struct FieldArgs {
    /// Path to the YAML field configuration
    #[arg(short, long)]
    pub config: PathBuf,

    /// Write a CSV summary of every sampled step to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log progress every this many steps
    #[arg(long, default_value = "100")]
    pub log_every: usize,

    /// Stop the run once any site's magnitude exceeds this value
    #[arg(long)]
    pub max_amplitude: Option<f64>,
}

/// Executes the field command.
pub fn execute(args: FieldArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let mut setup = config.build().context("invalid field configuration")?;

    info!(
        shape = ?setup.integrator.lattice().shape(),
        steps = setup.steps,
        sample_stride = setup.sample_stride,
        "starting field run"
    );

    let mut recorder = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Some(CsvRecorder::new(BufWriter::new(file)).every(setup.sample_stride))
        }
        None => None,
    };
    let mut progress = LogProgress::new("field", args.log_every);
    let mut limit = args.max_amplitude.map(AmplitudeLimit::new);

    let start_energy = setup.integrator.discrete_energy();
    let run = setup.integrator.run(
        setup.steps,
        &setup.forcing,
        setup.sample_stride,
        |event: &Event<'_>| -> Option<Action> {
            let _: Option<Action> = progress.observe(event);
            if let Some(recorder) = recorder.as_mut() {
                let _: Option<Action> = recorder.observe(event);
            }
            limit.as_mut().and_then(|limit| limit.observe(event))
        },
    )?;

    if let (Some(recorder), Some(path)) = (recorder, &args.output) {
        let rows = recorder.rows();
        recorder
            .finish()
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(rows, path = %path.display(), "wrote csv history");
    }

    if run.status == Status::StoppedByObserver {
        warn!(steps = run.steps, "run stopped early");
    }

    let integrator = &setup.integrator;
    let energy = integrator.energy();
    let diagnostics = integrator.spectral_diagnostics();
    let activation = integrator.activation();

    info!(
        steps = run.steps,
        samples = run.history.len(),
        gradient = energy.gradient,
        potential = energy.potential,
        interaction = energy.interaction,
        total = energy.total(),
        "final energy"
    );
    info!(
        start = start_energy,
        end = integrator.discrete_energy(),
        "conserved energy"
    );
    info!(
        coherence_length = diagnostics.coherence_length,
        fluctuation = diagnostics.fluctuation,
        decoherence_time = diagnostics.decoherence_time,
        energy_levels = ?integrator.energy_levels(),
        "spectral diagnostics"
    );
    let activated_samples = run.activations().iter().filter(|a| a.activated).count();
    info!(
        total = activation.total,
        activated = activation.activated,
        activated_samples,
        "activation"
    );

    Ok(())
}
