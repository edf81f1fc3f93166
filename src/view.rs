use num::Complex;

use crate::error::ConfigError;

/// Half the side of the visible square at zoom 1.
const HALF_SPAN: f64 = 2.0;

/// Maps `value` from range `from` onto range `to`.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    (to.1 - to.0) / (from.1 - from.0) * (value - from.0) + to.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub x_translation: f64,
    pub y_translation: f64,
    pub zoom: f64,
}

impl ViewTransform {
    pub fn new(x_translation: f64, y_translation: f64, zoom: f64) -> Self {
        ViewTransform { x_translation, y_translation, zoom }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [
            ("x_translation", self.x_translation),
            ("y_translation", self.y_translation),
            ("zoom", self.zoom),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NonFiniteView(name));
            }
        }
        if self.zoom == 0.0 {
            return Err(ConfigError::ZeroZoom);
        }
        Ok(())
    }

    pub fn real_bounds(&self) -> (f64, f64) {
        axis_bounds(self.zoom, self.x_translation)
    }

    pub fn imaginary_bounds(&self) -> (f64, f64) {
        axis_bounds(self.zoom, self.y_translation)
    }

    pub fn screen_to_complex(&self, x: u32, y: u32, w: u32, h: u32) -> Complex<f64> {
        Complex {
            re: map_range(x as f64, (0.0, w as f64), self.real_bounds()),
            im: map_range(y as f64, (0.0, h as f64), self.imaginary_bounds()),
        }
    }
}

fn axis_bounds(zoom: f64, translation: f64) -> (f64, f64) {
    (-HALF_SPAN / zoom - translation, HALF_SPAN / zoom - translation)
}
