pub mod canvas;

use std::ops::Deref;
use lesson_lib::WindowSpec;
use crate::error::{AppError, AppResult};
use crate::sdl;

pub struct Window {
    wnd: sdl3::video::Window,
}

impl Window {
    pub fn new(ctx: &sdl::Context, spec: &WindowSpec) -> AppResult<Self> {
        let mut builder = ctx.video().window(&spec.title, spec.width, spec.height);
        builder.position_centered();
        if spec.resizable {
            builder.resizable();
        }

        let sdl_window = builder.build().map_err(AppError::sdl)?;

        Ok(Window {
            wnd: sdl_window,
        })
    }

    pub fn wnd(&self) -> &sdl3::video::Window {
        &self.wnd
    }
}

impl Deref for Window {
    type Target = sdl3::video::Window;
    fn deref(&self) -> &Self::Target {
        &self.wnd
    }
}
