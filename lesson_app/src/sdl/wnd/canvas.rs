use std::ops::Deref;
use lesson_lib::Surface;
use sdl3::pixels::PixelFormat;
use sdl3::render::{Texture, TextureCreator};
use sdl3::sys::pixels::SDL_PixelFormat;
use sdl3::video::WindowContext;
use crate::error::{AppError, AppResult};
use super::Window;

pub struct Canvas {
    pub canvas: sdl3::render::WindowCanvas,
}

impl From<&Window> for Canvas {
    fn from(window: &Window) -> Self {
        Canvas { canvas: window.wnd().clone().into_canvas() }
    }
}

impl Deref for Canvas {
    type Target = sdl3::render::WindowCanvas;
    fn deref(&self) -> &Self::Target {
        &self.canvas
    }
}

impl Canvas {
    /// Upload `frame` to `texture` and show it stretched over the whole window
    pub fn present_frame(&mut self, texture: &mut Texture, frame: &Surface) -> AppResult<()> {
        texture
            .update(None, bytemuck::cast_slice(frame.pixels()), frame.pitch())
            .map_err(AppError::sdl)?;

        self.canvas.clear();
        self.canvas.copy(texture, None, None).map_err(AppError::sdl)?;
        self.canvas.present();

        Ok(())
    }
}

/// Streaming texture the framebuffer is uploaded to every frame
pub fn frame_texture(
    creator: &TextureCreator<WindowContext>,
    width: u32,
    height: u32,
) -> AppResult<Texture> {
    creator
        .create_texture_streaming(
            unsafe { PixelFormat::from_ll(SDL_PixelFormat::ARGB8888) },
            width,
            height,
        )
        .map_err(AppError::sdl)
}
