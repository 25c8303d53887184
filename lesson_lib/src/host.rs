//! Services lessons request from the platform layer

/// Implemented by the frontend owning the window and devices
pub trait Host {
    fn set_title(&mut self, title: &str);

    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Rumble controller `which` at `strength` (0.0 to 1.0) for `duration_ms`. Returns false if
    /// the controller has no rumble support.
    fn rumble(&mut self, which: u32, strength: f32, duration_ms: u32) -> bool;

    /// Number of controllers currently opened
    fn joysticks(&self) -> usize;

    fn start_text_input(&mut self);

    fn stop_text_input(&mut self);

    fn clipboard_text(&self) -> String;

    fn set_clipboard_text(&mut self, text: &str);
}

/// Host without any window or device, used to run lessons offscreen
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    pub title: String,
    pub fullscreen: bool,
    pub text_input: bool,
    pub clipboard: String,
    pub rumbles: Vec<(u32, f32, u32)>,
    pub joysticks: usize,
}

impl Host for HeadlessHost {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    fn rumble(&mut self, which: u32, strength: f32, duration_ms: u32) -> bool {
        if (which as usize) < self.joysticks {
            self.rumbles.push((which, strength, duration_ms));
            true
        } else {
            false
        }
    }

    fn joysticks(&self) -> usize {
        self.joysticks
    }

    fn start_text_input(&mut self) {
        self.text_input = true;
    }

    fn stop_text_input(&mut self) {
        self.text_input = false;
    }

    fn clipboard_text(&self) -> String {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.clipboard = text.to_string();
    }
}
