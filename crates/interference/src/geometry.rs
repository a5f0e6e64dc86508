use ndarray::Array1;
use thiserror::Error;

/// Layout of the slits and the screen, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    wavelength: f64,
    slit_separation: f64,
    screen_distance: f64,
    half_width: f64,
    samples: usize,
}

/// Errors that can occur when validating a [`Geometry`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("wavelength must be finite and positive")]
    Wavelength,

    #[error("slit separation must be finite and positive")]
    SlitSeparation,

    #[error("screen distance must be finite and positive")]
    ScreenDistance,

    #[error("screen half width must be finite and positive")]
    HalfWidth,

    #[error("the screen needs at least two samples")]
    Samples,
}

impl Default for Geometry {
    /// Green light through slits 1 mm apart onto a screen 1 m away, sampled
    /// at 1000 points across ±1 cm.
    fn default() -> Self {
        Self {
            wavelength: 5e-7,
            slit_separation: 1e-3,
            screen_distance: 1.0,
            half_width: 0.01,
            samples: 1000,
        }
    }
}

impl Geometry {
    /// Creates a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if any length is non-finite or not positive, or if
    /// `samples < 2`.
    pub fn new(
        wavelength: f64,
        slit_separation: f64,
        screen_distance: f64,
        half_width: f64,
        samples: usize,
    ) -> Result<Self, GeometryError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(wavelength) {
            return Err(GeometryError::Wavelength);
        }
        if !positive(slit_separation) {
            return Err(GeometryError::SlitSeparation);
        }
        if !positive(screen_distance) {
            return Err(GeometryError::ScreenDistance);
        }
        if !positive(half_width) {
            return Err(GeometryError::HalfWidth);
        }
        if samples < 2 {
            return Err(GeometryError::Samples);
        }

        Ok(Self {
            wavelength,
            slit_separation,
            screen_distance,
            half_width,
            samples,
        })
    }

    #[must_use]
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    #[must_use]
    pub fn slit_separation(&self) -> f64 {
        self.slit_separation
    }

    #[must_use]
    pub fn screen_distance(&self) -> f64 {
        self.screen_distance
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Evenly spaced screen positions from `−half_width` to `half_width`.
    #[must_use]
    pub fn screen_positions(&self) -> Array1<f64> {
        Array1::linspace(-self.half_width, self.half_width, self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let g = Geometry::default();
        assert_eq!(
            Geometry::new(
                g.wavelength(),
                g.slit_separation(),
                g.screen_distance(),
                g.half_width(),
                g.samples()
            ),
            Ok(g)
        );
    }

    #[test]
    fn screen_spans_both_edges() {
        let g = Geometry::new(5e-7, 1e-3, 1.0, 0.02, 5).unwrap();
        let x = g.screen_positions();

        assert_eq!(x.len(), 5);
        assert_eq!(x[0], -0.02);
        assert_eq!(x[2], 0.0);
        assert_eq!(x[4], 0.02);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Geometry::new(0.0, 1e-3, 1.0, 0.01, 10),
            Err(GeometryError::Wavelength)
        );
        assert_eq!(
            Geometry::new(5e-7, -1e-3, 1.0, 0.01, 10),
            Err(GeometryError::SlitSeparation)
        );
        assert_eq!(
            Geometry::new(5e-7, 1e-3, f64::INFINITY, 0.01, 10),
            Err(GeometryError::ScreenDistance)
        );
        assert_eq!(
            Geometry::new(5e-7, 1e-3, 1.0, f64::NAN, 10),
            Err(GeometryError::HalfWidth)
        );
        assert_eq!(
            Geometry::new(5e-7, 1e-3, 1.0, 0.01, 1),
            Err(GeometryError::Samples)
        );
    }
}
