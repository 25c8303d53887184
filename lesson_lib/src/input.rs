//! Platform independent input events and the bits of input state lessons query

use fnv::FnvHashSet;

/// Keys the lessons react to. Letters and digits are folded into `Char` (lowercase).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Return,
    Escape,
    Backspace,
    Space,
    Char(char),
    Other,
}

impl Key {
    /// Parse a platform key name such as `"Up"`, `"Return"`, `"A"` or `"1"`
    pub fn from_name(name: &str) -> Key {
        match name {
            "Up" => Key::Up,
            "Down" => Key::Down,
            "Left" => Key::Left,
            "Right" => Key::Right,
            "Return" | "Enter" => Key::Return,
            "Escape" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Space" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphanumeric() => {
                        Key::Char(c.to_ascii_lowercase())
                    }
                    _ => Key::Other,
                }
            }
        }
    }

    /// Digit value for the number row keys
    pub fn digit(self) -> Option<u32> {
        match self {
            Key::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

/// Modifier keys held while a key event was generated
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct KeyMod {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyMod {
    pub const NONE: KeyMod = KeyMod {
        ctrl: false,
        alt: false,
        shift: false,
    };
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WindowEvent {
    Shown,
    Exposed,
    Resized(u32, u32),
    Minimized,
    Maximized,
    Restored,
    MouseEnter,
    MouseLeave,
    FocusGained,
    FocusLost,
    Close,
}

#[derive(Clone, PartialEq, Debug)]
pub enum InputEvent {
    Quit,
    KeyDown {
        key: Key,
        keymod: KeyMod,
        repeat: bool,
    },
    KeyUp {
        key: Key,
        keymod: KeyMod,
    },
    MouseMotion {
        x: i32,
        y: i32,
    },
    MouseButtonDown {
        button: MouseButton,
        x: i32,
        y: i32,
    },
    MouseButtonUp {
        button: MouseButton,
        x: i32,
        y: i32,
    },
    TextInput(String),
    JoyAxis {
        which: u32,
        axis: u8,
        value: i16,
    },
    JoyButtonDown {
        which: u32,
        button: u8,
    },
    JoyButtonUp {
        which: u32,
        button: u8,
    },
    JoyAdded(u32),
    JoyRemoved(u32),
    Window(WindowEvent),
}

/// Set of keys currently held down, kept up to date from key events
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    pressed: FnvHashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> KeyboardState {
        KeyboardState::default()
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, .. } => {
                self.pressed.insert(key);
            }
            InputEvent::KeyUp { key, .. } => {
                self.pressed.remove(&key);
            }
            InputEvent::Window(WindowEvent::FocusLost) => self.pressed.clear(),
            _ => (),
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
}

impl MouseState {
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMotion { x, y }
            | InputEvent::MouseButtonDown { x, y, .. }
            | InputEvent::MouseButtonUp { x, y, .. } => {
                self.x = x;
                self.y = y;
            }
            _ => (),
        }
    }
}

/// Analog stick values closer to the center than this are treated as centered
pub const JOYSTICK_DEAD_ZONE: i16 = 8000;

/// Direction of the first stick of a controller, quantized to -1, 0 or 1 per axis. Only the
/// first controller that reports any motion is followed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoyDirection {
    pub x: i8,
    pub y: i8,
    controller: Option<u32>,
}

impl JoyDirection {
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::JoyAxis { which, axis, value } => {
                if *self.controller.get_or_insert(which) != which {
                    return;
                }

                let dir = if value < -JOYSTICK_DEAD_ZONE {
                    -1
                } else if value > JOYSTICK_DEAD_ZONE {
                    1
                } else {
                    0
                };

                match axis {
                    0 => self.x = dir,
                    1 => self.y = dir,
                    _ => (),
                }
            }
            InputEvent::JoyRemoved(which) if self.controller == Some(which) => {
                *self = JoyDirection::default();
            }
            _ => (),
        }
    }

    /// Angle in degrees to point an arrow at, 0 when the stick is centered
    pub fn angle(&self) -> f64 {
        if self.x == 0 && self.y == 0 {
            0.0
        } else {
            (self.y as f64).atan2(self.x as f64).to_degrees()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("Up"), Key::Up);
        assert_eq!(Key::from_name("Return"), Key::Return);
        assert_eq!(Key::from_name("A"), Key::Char('a'));
        assert_eq!(Key::from_name("7").digit(), Some(7));
        assert_eq!(Key::from_name("Left Ctrl"), Key::Other);
    }

    #[test]
    fn keyboard_tracks_presses() {
        let mut kb = KeyboardState::new();
        let down = |key| InputEvent::KeyDown {
            key,
            keymod: KeyMod::NONE,
            repeat: false,
        };

        kb.handle_event(&down(Key::Up));
        kb.handle_event(&down(Key::Left));
        kb.handle_event(&InputEvent::KeyUp {
            key: Key::Up,
            keymod: KeyMod::NONE,
        });

        assert!(!kb.is_pressed(Key::Up));
        assert!(kb.is_pressed(Key::Left));

        // Repeats don't stack, a single release clears the key
        kb.handle_event(&down(Key::Left));
        kb.handle_event(&InputEvent::KeyUp {
            key: Key::Left,
            keymod: KeyMod::NONE,
        });
        assert!(!kb.is_pressed(Key::Left));

        kb.handle_event(&down(Key::Char('w')));
        kb.handle_event(&InputEvent::Window(WindowEvent::FocusLost));
        assert!(!kb.is_pressed(Key::Char('w')));
    }

    #[test]
    fn joystick_dead_zone() {
        let mut dir = JoyDirection::default();
        let axis = |axis, value| InputEvent::JoyAxis {
            which: 3,
            axis,
            value,
        };

        dir.handle_event(&axis(0, 7999));
        assert_eq!((dir.x, dir.y), (0, 0));
        assert_eq!(dir.angle(), 0.0);

        dir.handle_event(&axis(0, -8001));
        dir.handle_event(&axis(1, 30000));
        assert_eq!((dir.x, dir.y), (-1, 1));
        assert!((dir.angle() - 135.0).abs() < 1e-9);

        // Other controllers are ignored
        dir.handle_event(&InputEvent::JoyAxis {
            which: 1,
            axis: 0,
            value: 30000,
        });
        assert_eq!(dir.x, -1);

        dir.handle_event(&InputEvent::JoyRemoved(3));
        dir.handle_event(&InputEvent::JoyRemoved(3));
        assert_eq!(dir.x, 0);
    }
}
