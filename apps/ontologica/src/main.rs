//! Ontologica command-line runner.
//!
//! Runs the field integrator from a YAML configuration, integrates learning
//! paths on the educational manifold, and runs the double-slit experiment.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Ontologica simulation runner
#[derive(Parser)]
#[command(name = "ontologica")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run Ontologica field, manifold and interference simulations", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scalar field integrator
    Field(commands::field::FieldArgs),
    /// Integrate a learning path on the educational manifold
    Geodesic(commands::geodesic::GeodesicArgs),
    /// Run the double-slit experiment for a set of observers
    DoubleSlit(commands::double_slit::DoubleSlitArgs),
    /// Validate a field configuration
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Field(args) => commands::field::execute(args),
        Commands::Geodesic(args) => commands::geodesic::execute(args),
        Commands::DoubleSlit(args) => commands::double_slit::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
