//! Integrates learning paths on the educational manifold.

use anyhow::{Context, Result};
use clap::Args;
use ndarray::Array1;
use ontologica_manifold::{EducationalManifold, GeodesicConfig};
use ontologica_observers::LogProgress;
use tracing::info;

/// Geodesic arguments
#[derive(Args)]
pub struct GeodesicArgs {
    /// Starting knowledge state, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub start: Vec<f64>,

    /// Target knowledge state, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub target: Vec<f64>,

    /// Integration horizon
    #[arg(long, default_value = "100.0")]
    pub max_time: f64,

    /// Euler time step
    #[arg(long, default_value = "0.01")]
    pub dt: f64,

    /// Number of steps for the relaxation path
    #[arg(long, default_value = "100")]
    pub relaxation_steps: usize,

    /// Log progress every this many steps
    #[arg(long, default_value = "1000")]
    pub log_every: usize,
}

/// Executes the geodesic command.
pub fn execute(args: GeodesicArgs) -> Result<()> {
    let manifold = EducationalManifold::new(args.start.len())?;
    let config = GeodesicConfig::new(args.max_time, args.dt)?;
    let start = Array1::from(args.start);
    let target = Array1::from(args.target);

    let path = manifold
        .learning_geodesic_observed(
            start.view(),
            target.view(),
            &config,
            LogProgress::new("geodesic", args.log_every),
        )
        .context("learning geodesic failed")?;

    info!(
        points = path.trajectory.nrows(),
        efficiency = path.efficiency,
        converged = path.converged,
        final_position = ?path.final_position.to_vec(),
        "learning geodesic"
    );

    let relaxation = manifold
        .relaxation_path(start.view(), target.view(), args.relaxation_steps)
        .context("relaxation path failed")?;
    let end = relaxation.row(relaxation.nrows() - 1);
    let remaining = (&end - &target).mapv(|d| d * d).sum().sqrt();

    info!(
        points = relaxation.nrows(),
        remaining,
        final_position = ?end.to_vec(),
        "relaxation path"
    );

    Ok(())
}
