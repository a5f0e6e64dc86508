use ndarray::Array1;
use ontologica_field::BASE_DECOHERENCE_TIME;
use tracing::debug;

use crate::{
    Context, Geometry, collapse_probability, decoherence_effect, fringe_pattern, fringe_spacing,
    visibility, which_path_information,
};

/// The outcome for a single observer.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub context: Context,
    pub collapse_probability: f64,
    pub pattern: Array1<f64>,
    pub visibility: f64,
    pub which_path: f64,
    pub decoherence: f64,
}

/// Pearson correlations of observer activation against the trial outcomes.
///
/// `None` when there are fewer than two trials or either series is constant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Correlation {
    pub visibility: Option<f64>,
    pub which_path: Option<f64>,
}

/// Values the theory predicts for a laboratory double-slit setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted fringe spacing, in metres.
    pub fringe_spacing: f64,

    /// Predicted decoherence time, in seconds.
    pub decoherence_time: f64,
}

impl Default for Prediction {
    fn default() -> Self {
        Self {
            fringe_spacing: 8.3e-6,
            decoherence_time: BASE_DECOHERENCE_TIME,
        }
    }
}

/// A full double-slit experiment over several observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    /// One trial per observer, in input order.
    pub trials: Vec<Trial>,

    pub correlation: Correlation,

    /// Geometric fringe spacing `λL/d` of the simulated setup.
    pub fringe_spacing: f64,

    pub prediction: Prediction,
}

/// Runs the experiment once for each observer context.
#[must_use]
pub fn simulate(geometry: &Geometry, observers: &[Context]) -> Experiment {
    let trials: Vec<Trial> = observers
        .iter()
        .map(|&context| {
            let p = collapse_probability(context.activation, context.coherence);
            let pattern = fringe_pattern(geometry, p);
            Trial {
                context,
                collapse_probability: p,
                visibility: visibility(&pattern),
                pattern,
                which_path: which_path_information(context.activation),
                decoherence: decoherence_effect(context.coherence),
            }
        })
        .collect();

    let activations: Vec<f64> = trials.iter().map(|t| t.context.activation).collect();
    let visibilities: Vec<f64> = trials.iter().map(|t| t.visibility).collect();
    let which_paths: Vec<f64> = trials.iter().map(|t| t.which_path).collect();

    let correlation = Correlation {
        visibility: pearson(&activations, &visibilities),
        which_path: pearson(&activations, &which_paths),
    };
    debug!(trials = trials.len(), ?correlation, "double-slit experiment finished");

    Experiment {
        trials,
        correlation,
        fringe_spacing: fringe_spacing(geometry),
        prediction: Prediction::default(),
    }
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns `None` if the lengths differ, there are fewer than two points, or
/// either series has zero variance.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        None
    } else {
        Some(cov / (var_x * var_y).sqrt())
    }
}
