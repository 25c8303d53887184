use lesson_lib::{InputEvent, Key, KeyMod, MouseButton, WindowEvent};
use sdl3::event::{Event, WindowEvent as SdlWindowEvent};
use sdl3::keyboard::{Keycode, Mod};
use sdl3::mouse::MouseButton as SdlMouseButton;

/// Convert an SDL event, `None` for the ones no lesson cares about
pub fn translate(e: Event) -> Option<InputEvent> {
    let event = match e {
        Event::Quit { .. } => InputEvent::Quit,
        Event::KeyDown { keycode: Some(keycode), keymod, repeat, .. } => InputEvent::KeyDown {
            key: key(keycode),
            keymod: key_mod(keymod),
            repeat,
        },
        Event::KeyUp { keycode: Some(keycode), keymod, .. } => InputEvent::KeyUp {
            key: key(keycode),
            keymod: key_mod(keymod),
        },
        Event::TextInput { text, .. } => InputEvent::TextInput(text),
        Event::MouseMotion { x, y, .. } => InputEvent::MouseMotion {
            x: x as i32,
            y: y as i32,
        },
        Event::MouseButtonDown { mouse_btn, x, y, .. } => InputEvent::MouseButtonDown {
            button: mouse_button(mouse_btn),
            x: x as i32,
            y: y as i32,
        },
        Event::MouseButtonUp { mouse_btn, x, y, .. } => InputEvent::MouseButtonUp {
            button: mouse_button(mouse_btn),
            x: x as i32,
            y: y as i32,
        },
        Event::JoyAxisMotion { which, axis_idx, value, .. } => InputEvent::JoyAxis {
            which,
            axis: axis_idx,
            value,
        },
        Event::JoyButtonDown { which, button_idx, .. } => InputEvent::JoyButtonDown {
            which,
            button: button_idx,
        },
        Event::JoyButtonUp { which, button_idx, .. } => InputEvent::JoyButtonUp {
            which,
            button: button_idx,
        },
        Event::JoyDeviceAdded { which, .. } => InputEvent::JoyAdded(which),
        Event::JoyDeviceRemoved { which, .. } => InputEvent::JoyRemoved(which),
        Event::Window { win_event, .. } => InputEvent::Window(window_event(win_event)?),
        _ => return None,
    };

    Some(event)
}

fn key(keycode: Keycode) -> Key {
    Key::from_name(&keycode.name())
}

fn key_mod(keymod: Mod) -> KeyMod {
    KeyMod {
        ctrl: keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD),
        alt: keymod.intersects(Mod::LALTMOD | Mod::RALTMOD),
        shift: keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
    }
}

fn mouse_button(button: SdlMouseButton) -> MouseButton {
    match button {
        SdlMouseButton::Left => MouseButton::Left,
        SdlMouseButton::Middle => MouseButton::Middle,
        SdlMouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

fn window_event(win_event: SdlWindowEvent) -> Option<WindowEvent> {
    let event = match win_event {
        SdlWindowEvent::Shown => WindowEvent::Shown,
        SdlWindowEvent::Exposed => WindowEvent::Exposed,
        SdlWindowEvent::Resized(w, h) => WindowEvent::Resized(w.max(1) as u32, h.max(1) as u32),
        SdlWindowEvent::Minimized => WindowEvent::Minimized,
        SdlWindowEvent::Maximized => WindowEvent::Maximized,
        SdlWindowEvent::Restored => WindowEvent::Restored,
        SdlWindowEvent::MouseEnter => WindowEvent::MouseEnter,
        SdlWindowEvent::MouseLeave => WindowEvent::MouseLeave,
        SdlWindowEvent::FocusGained => WindowEvent::FocusGained,
        SdlWindowEvent::FocusLost => WindowEvent::FocusLost,
        SdlWindowEvent::CloseRequested => WindowEvent::Close,
        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers() {
        let m = key_mod(Mod::LCTRLMOD | Mod::RSHIFTMOD);
        assert!(m.ctrl);
        assert!(!m.alt);
        assert!(m.shift);
        assert_eq!(key_mod(Mod::NOMOD), KeyMod::NONE);
    }

    #[test]
    fn keys_by_name() {
        assert_eq!(key(Keycode::Up), Key::Up);
        assert_eq!(key(Keycode::Return), Key::Return);
        assert_eq!(key(Keycode::W), Key::Char('w'));
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(
            window_event(SdlWindowEvent::Resized(800, 600)),
            Some(WindowEvent::Resized(800, 600))
        );
        assert_eq!(window_event(SdlWindowEvent::Moved(3, 4)), None);
    }
}
