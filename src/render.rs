use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::error::ConfigError;
use crate::escape::EscapeEvaluator;
use crate::ramp::{ColorRamp, Rgb, BLACK};
use crate::view::ViewTransform;

const BYTES_PER_PIXEL: usize = 3;

/// Row-major grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Raster {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Returns false when `(x, y)` lies outside the raster.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Packed RGB24, ready for a streaming or static texture upload.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: u32,
    height: u32,
    evaluator: EscapeEvaluator,
    ramp: ColorRamp,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Renderer {
            width: config.width,
            height: config.height,
            evaluator: EscapeEvaluator::new(config.max_iterations, config.threshold),
            ramp: ColorRamp::new(config.max_iterations),
        })
    }

    fn pixel(&self, view: &ViewTransform, x: u32, y: u32) -> Rgb {
        let c = view.screen_to_complex(x, y, self.width, self.height);
        self.ramp.color(self.evaluator.escape_iterations(c.re, c.im))
    }

    /// Renders rows in parallel, or serially when rayon has a single thread.
    pub fn render(&self, view: &ViewTransform) -> Result<Raster, ConfigError> {
        view.validate()?;
        if rayon::current_num_threads() == 1 {
            return self.render_serial(view);
        }
        debug!(
            "rendering {}x{} over re {:?}, im {:?}, band width {}",
            self.width,
            self.height,
            view.real_bounds(),
            view.imaginary_bounds(),
            self.ramp.band_width()
        );
        let mut raster = Raster::new(self.width, self.height);
        raster
            .pixels
            .par_chunks_exact_mut(self.width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate() {
                    *px = self.pixel(view, x as u32, y as u32);
                }
            });
        Ok(raster)
    }

    /// Same raster as `render`, one pixel at a time.
    pub fn render_serial(&self, view: &ViewTransform) -> Result<Raster, ConfigError> {
        view.validate()?;
        let mut raster = Raster::new(self.width, self.height);
        for (y, x) in (0..self.height).cartesian_product(0..self.width) {
            raster.set(x, y, self.pixel(view, x, y));
        }
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::{RED, VIOLET};

    fn default_render() -> Raster {
        let config = RenderConfig::default();
        Renderer::new(&config).unwrap().render(&config.view).unwrap()
    }

    #[test]
    fn centre_pixel_is_black() {
        let raster = default_render();
        assert_eq!(raster.get(400, 400), Some(BLACK));
    }

    #[test]
    fn corner_pixel_is_red() {
        let raster = default_render();
        assert_eq!(raster.get(0, 0), Some(RED));
    }

    #[test]
    fn every_pixel_written() {
        let config = RenderConfig { width: 64, height: 48, ..RenderConfig::default() };
        let raster = Renderer::new(&config).unwrap().render(&config.view).unwrap();
        assert_eq!(raster.pixels.len(), 64 * 48);
        // Far left column is well outside the set.
        assert!((0..48).all(|y| raster.get(0, y) == Some(RED)));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = RenderConfig { width: 120, height: 90, ..RenderConfig::default() };
        let renderer = Renderer::new(&config).unwrap();
        assert_eq!(
            renderer.render(&config.view).unwrap().as_bytes(),
            renderer.render(&config.view).unwrap().as_bytes()
        );
    }

    #[test]
    fn parallel_matches_serial() {
        let config = RenderConfig {
            width: 101,
            height: 77,
            view: ViewTransform::new(0.75, -0.1, 2.5),
            ..RenderConfig::default()
        };
        let renderer = Renderer::new(&config).unwrap();
        assert_eq!(
            renderer.render(&config.view).unwrap(),
            renderer.render_serial(&config.view).unwrap()
        );
    }

    #[test]
    fn view_changes_between_renders() {
        let config = RenderConfig { width: 32, height: 32, ..RenderConfig::default() };
        let renderer = Renderer::new(&config).unwrap();
        let wide = renderer.render(&config.view).unwrap();
        // Deep inside the main cardioid everything is black.
        let inside = renderer.render(&ViewTransform::new(0.2, 0.0, 20.0)).unwrap();
        assert_ne!(wide, inside);
        assert!(inside.pixels.iter().all(|&p| p == BLACK));
    }

    #[test]
    fn renderer_rejects_zero_zoom() {
        let config = RenderConfig {
            view: ViewTransform::new(0.5, 0.0, 0.0),
            ..RenderConfig::default()
        };
        assert_eq!(Renderer::new(&config).unwrap_err(), ConfigError::ZeroZoom);
    }

    #[test]
    fn render_rejects_degenerate_view() {
        let config = RenderConfig { width: 8, height: 8, ..RenderConfig::default() };
        let renderer = Renderer::new(&config).unwrap();
        let flat = ViewTransform::new(0.5, 0.0, 0.0);
        assert_eq!(renderer.render(&flat), Err(ConfigError::ZeroZoom));
        assert_eq!(renderer.render_serial(&flat), Err(ConfigError::ZeroZoom));
        assert_eq!(
            renderer.render(&ViewTransform::new(f64::NAN, 0.0, 1.0)),
            Err(ConfigError::NonFiniteView("x_translation"))
        );
    }

    #[test]
    fn raster_set_and_bytes() {
        let mut raster = Raster::new(2, 1);
        assert!(raster.set(1, 0, VIOLET));
        assert!(!raster.set(2, 0, VIOLET));
        assert_eq!(raster.get(0, 1), None);
        assert_eq!(raster.pitch(), 6);
        assert_eq!(raster.as_bytes(), vec![0, 0, 0, 127, 0, 255]);
    }
}
