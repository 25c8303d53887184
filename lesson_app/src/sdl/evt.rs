pub mod pump;

use std::ops::Deref;
use lesson_lib::InputEvent;
use crate::error::{AppError, AppResult};
use crate::sdl::Context;

pub struct EventPump {
    pump: sdl3::EventPump,
}

impl EventPump {
    pub fn new(context: &Context) -> AppResult<Self> {
        Ok(EventPump {
            pump: context.event_pump().map_err(AppError::sdl)?,
        })
    }

    /// Drain the SDL queue, keeping the events lessons understand
    pub fn poll(&mut self) -> Vec<InputEvent> {
        self.pump.poll_iter().filter_map(pump::translate).collect()
    }
}

impl Deref for EventPump {
    type Target = sdl3::EventPump;
    fn deref(&self) -> &Self::Target {
        &self.pump
    }
}
