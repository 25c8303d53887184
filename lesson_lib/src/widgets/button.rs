use crate::gfx::{Point, Rect};
use crate::input::InputEvent;

pub const BUTTON_WIDTH: i32 = 300;
pub const BUTTON_HEIGHT: i32 = 200;

/// Row of the button sprite sheet to draw
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSprite {
    #[default]
    MouseOut = 0,
    MouseOver = 1,
    MouseDown = 2,
    MouseUp = 3,
}

impl ButtonSprite {
    pub fn clip(self) -> Rect {
        Rect::new(0, self as i32 * BUTTON_HEIGHT, BUTTON_WIDTH, BUTTON_HEIGHT)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MouseButtonWidget {
    pub position: Point,
    sprite: ButtonSprite,
}

impl MouseButtonWidget {
    pub fn new(x: i32, y: i32) -> MouseButtonWidget {
        MouseButtonWidget {
            position: Point::new(x, y),
            sprite: ButtonSprite::MouseOut,
        }
    }

    pub fn sprite(&self) -> ButtonSprite {
        self.sprite
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let (x, y, inside_sprite) = match *event {
            InputEvent::MouseMotion { x, y } => (x, y, ButtonSprite::MouseOver),
            InputEvent::MouseButtonDown { x, y, .. } => (x, y, ButtonSprite::MouseDown),
            InputEvent::MouseButtonUp { x, y, .. } => (x, y, ButtonSprite::MouseUp),
            _ => return,
        };

        // The far edges count as inside
        let p = self.position;
        let outside =
            x < p.x || x > p.x + BUTTON_WIDTH || y < p.y || y > p.y + BUTTON_HEIGHT;

        self.sprite = if outside {
            ButtonSprite::MouseOut
        } else {
            inside_sprite
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    #[test]
    fn states_follow_the_mouse() {
        let mut b = MouseButtonWidget::new(340, 280);
        assert_eq!(b.sprite(), ButtonSprite::MouseOut);

        b.handle_event(&InputEvent::MouseMotion { x: 640, y: 480 });
        assert_eq!(b.sprite(), ButtonSprite::MouseOver);

        b.handle_event(&InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            x: 340,
            y: 280,
        });
        assert_eq!(b.sprite(), ButtonSprite::MouseDown);

        b.handle_event(&InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            x: 500,
            y: 300,
        });
        assert_eq!(b.sprite(), ButtonSprite::MouseUp);

        b.handle_event(&InputEvent::MouseMotion { x: 339, y: 300 });
        assert_eq!(b.sprite(), ButtonSprite::MouseOut);

        assert_eq!(ButtonSprite::MouseUp.clip(), Rect::new(0, 600, 300, 200));
    }
}
