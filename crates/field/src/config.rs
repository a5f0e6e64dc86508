//! Serializable description of a field run.
//!
//! A [`FieldConfig`] is plain data, typically read from YAML:
//!
//! ```yaml
//! lattice: { cols: 16 }
//! mass: 1.0
//! coupling: 0.1
//! dt: 0.01
//! steps: 100
//! sample_stride: 10
//! initial: { kind: pulse, from: 7, to: 9, value: 1.0 }
//! forcing: { kind: noise, std_dev: 0.01, seed: 7 }
//! ```
//!
//! [`FieldConfig::build`] validates it and prepares a [`FieldSetup`].

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{Error, FieldIntegrator, InvalidArgument, Lattice, Params, init};

/// Lattice dimensions. `rows` defaults to 1 for a 1-D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeConfig {
    #[serde(default = "one")]
    pub rows: usize,
    pub cols: usize,
}

/// How the field starts. The field always starts at rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum InitialCondition {
    #[default]
    Zeros,

    /// `value` on columns `from..to` of every row, zero elsewhere.
    Pulse { from: usize, to: usize, value: f64 },

    /// Independent `Normal(0, std_dev)` samples.
    Random { std_dev: f64, seed: u64 },
}

/// The forcing term `J`, held constant for the whole run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ForcingConfig {
    #[default]
    Zero,

    /// The same value at every site.
    Constant { value: f64 },

    /// Independent `Normal(0, std_dev)` samples, drawn once.
    Noise { std_dev: f64, seed: u64 },
}

/// A complete field run description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub lattice: LatticeConfig,
    pub mass: f64,
    pub coupling: f64,
    pub dt: f64,
    pub steps: usize,
    #[serde(default = "one")]
    pub sample_stride: usize,
    #[serde(default)]
    pub initial: InitialCondition,
    #[serde(default)]
    pub forcing: ForcingConfig,
}

/// A validated integrator ready to run, with its forcing and run length.
#[derive(Debug, Clone)]
pub struct FieldSetup {
    pub integrator: FieldIntegrator,
    pub forcing: Array2<f64>,
    pub steps: usize,
    pub sample_stride: usize,
}

fn one() -> usize {
    1
}

impl FieldConfig {
    /// Validates the configuration and builds the integrator and forcing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any out-of-range value.
    pub fn build(&self) -> Result<FieldSetup, Error> {
        let lattice = Lattice::new(self.lattice.rows, self.lattice.cols)?;
        let params = Params::new(self.mass, self.coupling, self.dt)?;
        if self.steps == 0 {
            return Err(InvalidArgument::Steps.into());
        }
        if self.sample_stride == 0 {
            return Err(InvalidArgument::SampleStride.into());
        }

        let initial = match self.initial {
            InitialCondition::Zeros => lattice.zeros(),
            InitialCondition::Pulse { from, to, value } => init::pulse(lattice, from..to, value)?,
            InitialCondition::Random { std_dev, seed } => {
                init::gaussian(lattice, std_dev, &mut StdRng::seed_from_u64(seed))?
            }
        };

        let forcing = match self.forcing {
            ForcingConfig::Zero => lattice.zeros(),
            ForcingConfig::Constant { value } => Array2::from_elem(lattice.shape(), value),
            ForcingConfig::Noise { std_dev, seed } => {
                init::gaussian(lattice, std_dev, &mut StdRng::seed_from_u64(seed))?
            }
        };

        Ok(FieldSetup {
            integrator: FieldIntegrator::new(lattice, params, initial)?,
            forcing,
            steps: self.steps,
            sample_stride: self.sample_stride,
        })
    }
}
