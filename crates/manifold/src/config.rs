use thiserror::Error;

/// Largest number of Euler steps a config may ask for.
pub const MAX_STEPS: usize = 10_000_000;

/// Configuration for [`learning_geodesic`](crate::EducationalManifold::learning_geodesic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicConfig {
    max_time: f64,
    dt: f64,
}

/// Errors that can occur when validating a geodesic config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_time must be finite and positive")]
    MaxTime,

    #[error("dt must be finite, positive and no larger than max_time")]
    TimeStep,

    #[error("max_time / dt exceeds {MAX_STEPS} steps")]
    TooManySteps,
}

impl Default for GeodesicConfig {
    fn default() -> Self {
        Self {
            max_time: 100.0,
            dt: 0.01,
        }
    }
}

impl GeodesicConfig {
    /// Creates a new config with a validated horizon and step.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-finite or not positive, if
    /// `dt` exceeds `max_time`, or if the horizon needs more than
    /// [`MAX_STEPS`] steps.
    pub fn new(max_time: f64, dt: f64) -> Result<Self, ConfigError> {
        if !max_time.is_finite() || max_time <= 0.0 {
            return Err(ConfigError::MaxTime);
        }
        if !dt.is_finite() || dt <= 0.0 || dt > max_time {
            return Err(ConfigError::TimeStep);
        }
        if (max_time / dt).round() > MAX_STEPS as f64 {
            return Err(ConfigError::TooManySteps);
        }

        Ok(Self { max_time, dt })
    }

    /// Returns the integration horizon.
    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    /// Returns the Euler time step.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of Euler steps needed to reach `max_time`.
    #[must_use]
    pub fn steps(&self) -> usize {
        // Rounded so that 1.0 / 0.1 gives 10, not 9.
        (self.max_time / self.dt).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_ten_thousand_steps() {
        assert_eq!(GeodesicConfig::default().steps(), 10_000);
    }

    #[test]
    fn steps_round_to_nearest() {
        let config = GeodesicConfig::new(1.0, 0.1).unwrap();
        assert_eq!(config.steps(), 10);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(GeodesicConfig::new(0.0, 0.1), Err(ConfigError::MaxTime));
        assert_eq!(GeodesicConfig::new(f64::NAN, 0.1), Err(ConfigError::MaxTime));
        assert_eq!(GeodesicConfig::new(1.0, -0.1), Err(ConfigError::TimeStep));
        assert_eq!(GeodesicConfig::new(1.0, 2.0), Err(ConfigError::TimeStep));
    }

    #[test]
    fn rejects_unbounded_step_counts() {
        assert_eq!(
            GeodesicConfig::new(1e300, 1e-300),
            Err(ConfigError::TooManySteps)
        );
        assert_eq!(
            GeodesicConfig::new(MAX_STEPS as f64 + 1.0, 1.0),
            Err(ConfigError::TooManySteps)
        );

        let largest = GeodesicConfig::new(MAX_STEPS as f64, 1.0).unwrap();
        assert_eq!(largest.steps(), MAX_STEPS);
    }
}
