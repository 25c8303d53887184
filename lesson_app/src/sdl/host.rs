use lesson_lib::Host;
use tracing::warn;
use crate::sdl::input::JoystickMap;

/// Window and device services handed to the running lesson
pub struct Platform {
    window: sdl3::video::Window,
    video: sdl3::VideoSubsystem,
    pub joysticks: JoystickMap,
}

impl Platform {
    pub fn new(
        window: sdl3::video::Window,
        video: sdl3::VideoSubsystem,
        joysticks: JoystickMap,
    ) -> Self {
        Platform {
            window,
            video,
            joysticks,
        }
    }
}

impl Host for Platform {
    fn set_title(&mut self, title: &str) {
        if let Err(e) = self.window.set_title(title) {
            warn!("Can't set window title: {}", e);
        }
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if let Err(e) = self.window.set_fullscreen(fullscreen) {
            warn!("Can't change fullscreen mode: {}", e);
        }
    }

    fn rumble(&mut self, which: u32, strength: f32, duration_ms: u32) -> bool {
        self.joysticks.rumble(which, strength, duration_ms)
    }

    fn joysticks(&self) -> usize {
        self.joysticks.count()
    }

    fn start_text_input(&mut self) {
        self.video.text_input().start(&self.window);
    }

    fn stop_text_input(&mut self) {
        self.video.text_input().stop(&self.window);
    }

    fn clipboard_text(&self) -> String {
        self.video.clipboard().clipboard_text().unwrap_or_default()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        if let Err(e) = self.video.clipboard().set_clipboard_text(text) {
            warn!("Can't set clipboard text: {}", e);
        }
    }
}
