pub mod wnd;
pub(crate) mod evt;
pub mod audio;
pub mod input;
pub mod host;

use std::ops::Deref;
use crate::error::{AppError, AppResult};

pub struct Context {
    ctx: sdl3::Sdl,
    video: sdl3::VideoSubsystem,
}

impl Context {
    pub fn new() -> AppResult<Self> {
        let ctx = sdl3::init().map_err(AppError::sdl)?;
        let video = ctx.video().map_err(AppError::sdl)?;

        Ok(Context {
            ctx,
            video,
        })
    }

    pub fn video(&self) -> &sdl3::VideoSubsystem {
        &self.video
    }

    pub fn audio(&self) -> AppResult<sdl3::AudioSubsystem> {
        self.ctx.audio().map_err(AppError::sdl)
    }

    pub fn joystick(&self) -> AppResult<sdl3::JoystickSubsystem> {
        self.ctx.joystick().map_err(AppError::sdl)
    }
}

impl Deref for Context {
    type Target = sdl3::Sdl;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}
