//! SDL2 window that shows a finished raster until closed.

use log::info;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use crate::render::Raster;

pub fn show(title: &str, raster: &Raster) -> Result<(), String> {
    let (w, h) = (raster.width(), raster.height());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window(title, w, h)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().software().build().map_err(|e| e.to_string())?;
    let creator = canvas.texture_creator();
    let mut texture = creator
        .create_texture_static(PixelFormatEnum::RGB24, w, h)
        .map_err(|e| e.to_string())?;
    texture
        .update(None, &raster.as_bytes(), raster.pitch())
        .map_err(|e| e.to_string())?;

    info!("window \"{}\" open at {}x{}", title, w, h);

    let mut pump = sdl_context.event_pump()?;
    canvas.copy(&texture, None, None)?;
    canvas.present();

    'mainloop: loop {
        match pump.wait_event() {
            Event::KeyDown { keycode: Some(Keycode::Escape), .. } | Event::Quit { .. } => {
                break 'mainloop
            }
            Event::Window { win_event: WindowEvent::Exposed, .. }
            | Event::Window { win_event: WindowEvent::SizeChanged(..), .. } => {
                canvas.copy(&texture, None, None)?;
                canvas.present();
            }
            _ => {}
        }
    }

    info!("window closed");
    Ok(())
}
