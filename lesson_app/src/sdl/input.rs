use std::collections::HashMap;
use sdl3::joystick::Joystick;
use tracing::{error, info};
use crate::error::AppResult;
use crate::sdl::Context;

/// Joysticks opened as they get plugged in, keyed by instance id
pub struct JoystickMap {
    subsystem: sdl3::JoystickSubsystem,
    map: HashMap<u32, Joystick>,
}

impl JoystickMap {
    pub fn new(ctx: &Context) -> AppResult<Self> {
        Ok(JoystickMap {
            subsystem: ctx.joystick()?,
            map: HashMap::new(),
        })
    }

    pub fn open(&mut self, which: u32) {
        match self.subsystem.open(which) {
            Ok(joystick) => {
                info!("Opened joystick {}: {}", which, joystick.name());
                self.map.insert(which, joystick);
            }
            Err(e) => error!("Failed to open joystick {}: {}", which, e),
        }
    }

    pub fn close(&mut self, which: u32) {
        if self.map.remove(&which).is_none() {
            error!("Attempting to remove unknown joystick {}", which);
        }
    }

    /// Number of joysticks currently open
    pub fn count(&self) -> usize {
        self.map.len()
    }

    /// Rumble both motors at `strength` (0.0 to 1.0)
    pub fn rumble(&mut self, which: u32, strength: f32, duration_ms: u32) -> bool {
        let Some(joystick) = self.map.get_mut(&which) else {
            return false;
        };

        let level = (strength.clamp(0., 1.) * u16::MAX as f32) as u16;
        joystick.set_rumble(level, level, duration_ms)
    }
}
