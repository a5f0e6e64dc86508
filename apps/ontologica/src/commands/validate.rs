//! Checks a field configuration without running it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::load_config;

/// Validation arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the YAML field configuration
    #[arg(short, long)]
    pub config: PathBuf,
}

/// Executes the validate command.
pub fn execute(args: ValidateArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let setup = config
        .build()
        .with_context(|| format!("{} is not a valid configuration", args.config.display()))?;

    let params = setup.integrator.params();
    info!(
        shape = ?setup.integrator.lattice().shape(),
        mass = params.mass(),
        coupling = params.coupling(),
        dt = params.dt(),
        steps = setup.steps,
        sample_stride = setup.sample_stride,
        initial_energy = setup.integrator.energy().total(),
        "configuration is valid"
    );

    Ok(())
}
