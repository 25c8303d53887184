use crate::host::Host;
use crate::input::{InputEvent, Key};

/// Editable line of text with clipboard shortcuts
#[derive(Clone, Debug, Default)]
pub struct TextInputBuffer {
    text: String,
    ctrl: bool,
}

impl TextInputBuffer {
    pub fn new(text: &str) -> TextInputBuffer {
        TextInputBuffer {
            text: text.to_string(),
            ctrl: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the text changed
    pub fn handle_event(&mut self, event: &InputEvent, host: &mut dyn Host) -> bool {
        match event {
            InputEvent::KeyDown { key, keymod, .. } => {
                self.ctrl = keymod.ctrl;

                match key {
                    Key::Backspace => self.text.pop().is_some(),
                    Key::Char('c') if keymod.ctrl => {
                        host.set_clipboard_text(&self.text);
                        false
                    }
                    Key::Char('v') if keymod.ctrl => {
                        self.text = host.clipboard_text();
                        true
                    }
                    _ => false,
                }
            }
            InputEvent::KeyUp { keymod, .. } => {
                self.ctrl = keymod.ctrl;
                false
            }
            InputEvent::TextInput(typed) => {
                let shortcut = self.ctrl
                    && typed
                        .chars()
                        .next()
                        .is_some_and(|c| matches!(c, 'c' | 'C' | 'v' | 'V'));
                if shortcut {
                    false
                } else {
                    self.text.push_str(typed);
                    true
                }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;
    use crate::input::KeyMod;

    fn key(key: Key, ctrl: bool) -> InputEvent {
        InputEvent::KeyDown {
            key,
            keymod: KeyMod {
                ctrl,
                ..KeyMod::NONE
            },
            repeat: false,
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut host = HeadlessHost::default();
        let mut buf = TextInputBuffer::new("Some Text");

        assert!(buf.handle_event(&InputEvent::TextInput("!".into()), &mut host));
        assert_eq!(buf.text(), "Some Text!");

        for _ in 0..10 {
            buf.handle_event(&key(Key::Backspace, false), &mut host);
        }
        assert_eq!(buf.text(), "");
        assert!(!buf.handle_event(&key(Key::Backspace, false), &mut host));
    }

    #[test]
    fn clipboard_shortcuts() {
        let mut host = HeadlessHost::default();
        let mut buf = TextInputBuffer::new("copied");

        assert!(!buf.handle_event(&key(Key::Char('c'), true), &mut host));
        assert_eq!(host.clipboard, "copied");

        // The letter typed with the shortcut is not inserted
        assert!(!buf.handle_event(&InputEvent::TextInput("c".into()), &mut host));

        host.clipboard = "pasted".into();
        assert!(buf.handle_event(&key(Key::Char('v'), true), &mut host));
        assert_eq!(buf.text(), "pasted");

        buf.handle_event(
            &InputEvent::KeyUp {
                key: Key::Char('v'),
                keymod: KeyMod::NONE,
            },
            &mut host,
        );
        assert!(buf.handle_event(&InputEvent::TextInput("v".into()), &mut host));
        assert_eq!(buf.text(), "pastedv");
    }
}
