//Mandelbrot escape-time renderer
extern crate sdl2;

mod config;
mod display;
mod error;
mod escape;
mod ramp;
mod render;
mod view;

use std::time::Instant;

use log::{debug, info};

use config::RenderConfig;
use render::Renderer;

fn main() -> Result<(), String> {
    env_logger::init();

    let config = RenderConfig::default();
    info!(
        "{}x{}, {} iterations, cut-off {}, view {:?}",
        config.width, config.height, config.max_iterations, config.threshold, config.view
    );
    let renderer = Renderer::new(&config).map_err(|e| e.to_string())?;

    let started = Instant::now();
    let raster = renderer.render(&config.view).map_err(|e| e.to_string())?;
    info!("rendered in {:?}", started.elapsed());
    debug!(
        "centre pixel {:?}",
        raster.get(raster.width() / 2, raster.height() / 2)
    );

    display::show(config::TITLE, &raster)
}
