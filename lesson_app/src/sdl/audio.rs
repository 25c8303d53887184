pub(crate) mod stream;

use std::ops::Deref;
use crate::error::AppResult;
use crate::sdl::Context;

pub struct Device {
    device: sdl3::audio::AudioDevice,
}

impl Device {
    pub fn new(ctx: &Context) -> AppResult<Self> {
        Ok(Device {
            device: ctx.audio()?.default_playback_device(),
        })
    }
}

impl Deref for Device {
    type Target = sdl3::audio::AudioDevice;
    fn deref(&self) -> &Self::Target {
        &self.device
    }
}
