use super::collision::{Circle, check_rects};
use crate::gfx::{Point, Rect};
use crate::input::{InputEvent, Key};

pub const DOT_WIDTH: i32 = 20;
pub const DOT_HEIGHT: i32 = 20;

/// Width and height of the horizontal slices approximating the round dot sprite, top to bottom
const STRIPS: [(i32, i32); 11] = [
    (6, 1),
    (10, 1),
    (14, 1),
    (16, 2),
    (18, 2),
    (20, 6),
    (18, 2),
    (16, 2),
    (14, 1),
    (10, 1),
    (6, 1),
];

/// What a dot collides as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Its whole bounding box, positioned by its top-left corner
    Box,
    /// Stacked horizontal slices, positioned by the top-left corner
    Strips,
    /// A circle of radius `DOT_WIDTH / 2`, positioned by its center
    Circle,
}

/// Keyboard controlled dot moving a fixed number of pixels per frame
#[derive(Clone, Debug)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
    vx: i32,
    vy: i32,
    vel: i32,
    shape: Shape,
}

impl Dot {
    pub fn new(x: i32, y: i32, vel: i32, shape: Shape) -> Dot {
        Dot {
            x,
            y,
            vx: 0,
            vy: 0,
            vel,
            shape,
        }
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    /// Arrow key presses add to the velocity and releases take it back, so holding opposite keys
    /// cancels out
    pub fn handle_event(&mut self, event: &InputEvent) {
        let (key, sign) = match *event {
            InputEvent::KeyDown {
                key, repeat: false, ..
            } => (key, 1),
            InputEvent::KeyUp { key, .. } => (key, -1),
            _ => return,
        };

        let d = self.vel * sign;
        match key {
            Key::Up => self.vy -= d,
            Key::Down => self.vy += d,
            Key::Left => self.vx -= d,
            Key::Right => self.vx += d,
            _ => (),
        }
    }

    /// Bounding box of the sprite
    pub fn bounds(&self) -> Rect {
        let p = self.top_left();
        Rect::new(p.x, p.y, DOT_WIDTH, DOT_HEIGHT)
    }

    /// Where the sprite is drawn
    pub fn top_left(&self) -> Point {
        match self.shape {
            Shape::Circle => Point::new(self.x - DOT_WIDTH / 2, self.y - DOT_HEIGHT / 2),
            _ => Point::new(self.x, self.y),
        }
    }

    /// Collision boxes for the box and strip shapes
    pub fn colliders(&self) -> Vec<Rect> {
        match self.shape {
            Shape::Strips => {
                let mut top = self.y;
                STRIPS
                    .iter()
                    .map(|&(w, h)| {
                        let r = Rect::new(self.x + (DOT_WIDTH - w) / 2, top, w, h);
                        top += h;
                        r
                    })
                    .collect()
            }
            _ => vec![self.bounds()],
        }
    }

    pub fn circle(&self) -> Circle {
        let c = self.bounds().center();
        Circle::new(c.x, c.y, DOT_WIDTH / 2)
    }

    /// Move along x then y, undoing each half of the move that leaves `area` or for which
    /// `blocked` returns true
    pub fn step<F>(&mut self, area: Rect, blocked: F)
    where
        F: Fn(&Dot) -> bool,
    {
        self.x += self.vx;
        if !self.inside(&area) || blocked(self) {
            self.x -= self.vx;
        }

        self.y += self.vy;
        if !self.inside(&area) || blocked(self) {
            self.y -= self.vy;
        }
    }

    /// Move while clamping to `area` and stopping flush against `wall` when coming from outside
    /// of it
    pub fn step_against(&mut self, area: Rect, wall: Option<Rect>) {
        self.x += self.vx;
        if self.x < area.x {
            self.x = area.x;
        } else if self.x > area.right() - DOT_WIDTH {
            self.x = area.right() - DOT_WIDTH;
        } else if let Some(wall) = wall.filter(|w| check_rects(&self.bounds(), w)) {
            if self.vx > 0 && self.x + DOT_WIDTH - self.vx <= wall.x {
                self.x = wall.x - DOT_WIDTH;
            } else if self.vx < 0 && self.x - self.vx >= wall.right() {
                self.x = wall.right();
            }
        }

        self.y += self.vy;
        if self.y < area.y {
            self.y = area.y;
        } else if self.y > area.bottom() - DOT_HEIGHT {
            self.y = area.bottom() - DOT_HEIGHT;
        } else if let Some(wall) = wall.filter(|w| check_rects(&self.bounds(), w)) {
            if self.vy > 0 && self.y + DOT_HEIGHT - self.vy <= wall.y {
                self.y = wall.y - DOT_HEIGHT;
            } else if self.vy < 0 && self.y - self.vy >= wall.bottom() {
                self.y = wall.bottom();
            }
        }
    }

    fn inside(&self, area: &Rect) -> bool {
        let b = self.bounds();
        b.x >= area.x && b.y >= area.y && b.right() <= area.right() && b.bottom() <= area.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyMod;
    use crate::physics::check_colliders;

    fn press(dot: &mut Dot, key: Key) {
        dot.handle_event(&InputEvent::KeyDown {
            key,
            keymod: KeyMod::NONE,
            repeat: false,
        });
    }

    fn release(dot: &mut Dot, key: Key) {
        dot.handle_event(&InputEvent::KeyUp {
            key,
            keymod: KeyMod::NONE,
        });
    }

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        w: 640,
        h: 480,
    };

    #[test]
    fn velocity_follows_keys() {
        let mut dot = Dot::new(0, 0, 10, Shape::Box);
        press(&mut dot, Key::Right);
        press(&mut dot, Key::Left);
        assert_eq!(dot.velocity(), (0, 0));
        release(&mut dot, Key::Left);
        press(&mut dot, Key::Down);
        assert_eq!(dot.velocity(), (10, 10));

        // Key repeat doesn't accelerate
        dot.handle_event(&InputEvent::KeyDown {
            key: Key::Down,
            keymod: KeyMod::NONE,
            repeat: true,
        });
        assert_eq!(dot.velocity(), (10, 10));
    }

    #[test]
    fn strips_cover_the_sprite() {
        let dot = Dot::new(100, 50, 1, Shape::Strips);
        let strips = dot.colliders();
        assert_eq!(strips.len(), 11);
        assert_eq!(strips[0], Rect::new(107, 50, 6, 1));
        assert_eq!(strips[5], Rect::new(100, 57, 20, 6));
        assert_eq!(strips[10].bottom(), 70);
    }

    #[test]
    fn step_reverts_blocked_axis() {
        let other = Dot::new(30, 0, 1, Shape::Strips);
        let mut dot = Dot::new(9, 0, 1, Shape::Strips);
        press(&mut dot, Key::Right);
        press(&mut dot, Key::Down);

        let theirs = other.colliders();
        dot.step(SCREEN, |d| check_colliders(&d.colliders(), &theirs));
        assert_eq!((dot.x, dot.y), (10, 1));

        // Touching is not colliding for strip lists, one more pixel is
        dot.step(SCREEN, |d| check_colliders(&d.colliders(), &theirs));
        assert_eq!((dot.x, dot.y), (10, 2));
    }

    #[test]
    fn step_keeps_inside_the_screen() {
        let mut dot = Dot::new(0, 0, 10, Shape::Box);
        press(&mut dot, Key::Left);
        dot.step(SCREEN, |_| false);
        assert_eq!(dot.x, 0);
    }

    #[test]
    fn circles_are_positioned_by_center() {
        let mut dot = Dot::new(10, 10, 1, Shape::Circle);
        assert_eq!(dot.top_left(), Point::new(0, 0));
        assert_eq!(dot.circle(), Circle::new(10, 10, 10));

        press(&mut dot, Key::Up);
        dot.step(SCREEN, |_| false);
        assert_eq!(dot.y, 10);
    }

    #[test]
    fn snaps_against_walls() {
        let wall = Rect::new(300, 40, 40, 400);
        let mut dot = Dot::new(275, 100, 10, Shape::Box);
        press(&mut dot, Key::Right);

        dot.step_against(SCREEN, Some(wall));
        assert_eq!(dot.x, 280);
        dot.step_against(SCREEN, Some(wall));
        assert_eq!(dot.x, 280);

        let mut dot = Dot::new(630, 0, 10, Shape::Box);
        press(&mut dot, Key::Right);
        press(&mut dot, Key::Up);
        dot.step_against(SCREEN, None);
        assert_eq!((dot.x, dot.y), (620, 0));
    }
}
