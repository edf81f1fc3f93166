//! Fixed render settings.

use crate::error::ConfigError;
use crate::ramp::RAIN_RINGS;
use crate::view::ViewTransform;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 800;
pub const MAX_ITERATIONS: u32 = 40;
/// Squared magnitude past which an orbit counts as escaped.
pub const CUT_OFF: f64 = 4.0;

pub const X_TRANSLATION: f64 = 0.5;
pub const Y_TRANSLATION: f64 = 0.0;
pub const ZOOM: f64 = 1.0;

pub const TITLE: &str = "Mandelbrot";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub threshold: f64,
    pub view: ViewTransform,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: WIDTH,
            height: HEIGHT,
            max_iterations: MAX_ITERATIONS,
            threshold: CUT_OFF,
            view: ViewTransform::new(X_TRANSLATION, Y_TRANSLATION, ZOOM),
        }
    }
}

impl RenderConfig {
    /// Fail fast on anything that would make the coordinate mapping or
    /// the color bands degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyRaster { width: self.width, height: self.height });
        }
        self.view.validate()?;
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::BadThreshold(self.threshold));
        }
        if self.max_iterations < RAIN_RINGS {
            return Err(ConfigError::TooFewIterations {
                max_iterations: self.max_iterations,
                bands: RAIN_RINGS,
            });
        }
        Ok(())
    }
}
