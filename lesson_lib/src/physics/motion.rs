use super::dot::{DOT_HEIGHT, DOT_WIDTH};
use crate::gfx::{Point, Rect};
use crate::input::{InputEvent, Key};

/// Dot whose speed is expressed in pixels per second so that it moves at the same pace whatever
/// the frame rate
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionDot {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
}

impl MotionDot {
    /// Pixels per second
    pub const VELOCITY: f32 = 640.;

    pub fn new() -> MotionDot {
        MotionDot::default()
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let (key, sign) = match *event {
            InputEvent::KeyDown {
                key, repeat: false, ..
            } => (key, 1.),
            InputEvent::KeyUp { key, .. } => (key, -1.),
            _ => return,
        };

        let d = Self::VELOCITY * sign;
        match key {
            Key::Up => self.vy -= d,
            Key::Down => self.vy += d,
            Key::Left => self.vx -= d,
            Key::Right => self.vx += d,
            _ => (),
        }
    }

    /// Advance by `secs` seconds, clamping to `area`
    pub fn step(&mut self, secs: f32, area: Rect) {
        let max_x = (area.right() - DOT_WIDTH) as f32;
        let max_y = (area.bottom() - DOT_HEIGHT) as f32;

        self.x = (self.x + self.vx * secs).clamp(area.x as f32, max_x.max(area.x as f32));
        self.y = (self.y + self.vy * secs).clamp(area.y as f32, max_y.max(area.y as f32));
    }

    pub fn position(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyMod;

    #[test]
    fn distance_depends_on_time_only() {
        let area = Rect::new(0, 0, 640, 480);
        let mut fast = MotionDot::new();
        let mut slow = MotionDot::new();
        let right = InputEvent::KeyDown {
            key: Key::Right,
            keymod: KeyMod::NONE,
            repeat: false,
        };
        fast.handle_event(&right);
        slow.handle_event(&right);

        for _ in 0..4 {
            fast.step(0.125, area);
        }
        slow.step(0.5, area);

        assert_eq!(fast.position(), Point::new(320, 0));
        assert_eq!(slow.position(), fast.position());

        slow.step(10., area);
        assert_eq!(slow.position(), Point::new(620, 0));
    }
}
