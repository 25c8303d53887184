use crate::host::Host;
use crate::input::{InputEvent, Key, WindowEvent};

/// Tracks what the window manager did to the window
#[derive(Clone, Debug)]
pub struct WindowState {
    pub width: u32,
    pub height: u32,
    mouse_focus: bool,
    keyboard_focus: bool,
    minimized: bool,
    fullscreen: bool,
}

impl WindowState {
    pub fn new(width: u32, height: u32) -> WindowState {
        WindowState {
            width,
            height,
            mouse_focus: true,
            keyboard_focus: true,
            minimized: false,
            fullscreen: false,
        }
    }

    pub fn caption(&self) -> String {
        let on_off = |b| if b { "On" } else { "Off" };
        format!(
            "Window events - MouseFocus: {} KeyboardFocus: {}",
            on_off(self.mouse_focus),
            on_off(self.keyboard_focus)
        )
    }

    pub fn handle_event(&mut self, event: &InputEvent, host: &mut dyn Host) {
        match *event {
            InputEvent::Window(win_event) => {
                let update_caption = match win_event {
                    WindowEvent::Resized(w, h) => {
                        self.width = w;
                        self.height = h;
                        false
                    }
                    WindowEvent::MouseEnter => {
                        self.mouse_focus = true;
                        true
                    }
                    WindowEvent::MouseLeave => {
                        self.mouse_focus = false;
                        true
                    }
                    WindowEvent::FocusGained => {
                        self.keyboard_focus = true;
                        true
                    }
                    WindowEvent::FocusLost => {
                        self.keyboard_focus = false;
                        true
                    }
                    WindowEvent::Minimized => {
                        self.minimized = true;
                        false
                    }
                    WindowEvent::Maximized | WindowEvent::Restored => {
                        self.minimized = false;
                        false
                    }
                    _ => false,
                };

                if update_caption {
                    host.set_title(&self.caption());
                }
            }
            InputEvent::KeyDown {
                key: Key::Return,
                keymod,
                repeat: false,
            } if keymod.alt => {
                self.fullscreen = !self.fullscreen;
                if self.fullscreen {
                    self.minimized = false;
                }
                host.set_fullscreen(self.fullscreen);
            }
            _ => (),
        }
    }

    pub fn mouse_focus(&self) -> bool {
        self.mouse_focus
    }

    pub fn keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;
    use crate::input::KeyMod;

    #[test]
    fn focus_changes_update_the_caption() {
        let mut host = HeadlessHost::default();
        let mut win = WindowState::new(640, 480);

        win.handle_event(&InputEvent::Window(WindowEvent::MouseLeave), &mut host);
        assert_eq!(host.title, "Window events - MouseFocus: Off KeyboardFocus: On");

        win.handle_event(&InputEvent::Window(WindowEvent::FocusLost), &mut host);
        assert_eq!(host.title, "Window events - MouseFocus: Off KeyboardFocus: Off");

        host.title.clear();
        win.handle_event(&InputEvent::Window(WindowEvent::Resized(800, 600)), &mut host);
        assert_eq!((win.width, win.height), (800, 600));
        assert!(host.title.is_empty());
    }

    #[test]
    fn alt_return_toggles_fullscreen() {
        let mut host = HeadlessHost::default();
        let mut win = WindowState::new(640, 480);
        let alt_return = InputEvent::KeyDown {
            key: Key::Return,
            keymod: KeyMod {
                alt: true,
                ..KeyMod::NONE
            },
            repeat: false,
        };

        win.handle_event(&InputEvent::Window(WindowEvent::Minimized), &mut host);
        assert!(win.is_minimized());

        win.handle_event(&alt_return, &mut host);
        assert!(win.is_fullscreen());
        assert!(host.fullscreen);
        assert!(!win.is_minimized());

        win.handle_event(&alt_return, &mut host);
        assert!(!host.fullscreen);

        // Plain return does nothing
        win.handle_event(
            &InputEvent::KeyDown {
                key: Key::Return,
                keymod: KeyMod::NONE,
                repeat: false,
            },
            &mut host,
        );
        assert!(!win.is_fullscreen());
    }
}
