use crate::gfx::Rect;

/// Screen sized window into a larger level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub rect: Rect,
}

impl Camera {
    pub fn new(width: i32, height: i32) -> Camera {
        Camera {
            rect: Rect::new(0, 0, width, height),
        }
    }

    /// Center the camera on `target` without showing anything outside of `level`
    pub fn follow(&mut self, target: Rect, level: Rect) {
        let c = target.center();
        let r = &mut self.rect;

        r.x = (c.x - r.w / 2).clamp(level.x, (level.right() - r.w).max(level.x));
        r.y = (c.y - r.h / 2).clamp(level.y, (level.bottom() - r.h).max(level.y));
    }

    pub fn x(&self) -> i32 {
        self.rect.x
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }
}

/// Background scrolling left by one pixel per frame, drawn twice side by side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollingBackground {
    offset: i32,
    width: i32,
}

impl ScrollingBackground {
    pub fn new(width: i32) -> ScrollingBackground {
        ScrollingBackground { offset: 0, width }
    }

    pub fn scroll(&mut self) {
        self.offset -= 1;
        if self.offset < -self.width {
            self.offset += self.width;
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// X positions of the two copies of the background
    pub fn positions(&self) -> [i32; 2] {
        [self.offset, self.offset + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_is_clamped_to_the_level() {
        let level = Rect::new(0, 0, 1280, 960);
        let mut cam = Camera::new(640, 480);

        cam.follow(Rect::new(0, 0, 20, 20), level);
        assert_eq!((cam.x(), cam.y()), (0, 0));

        cam.follow(Rect::new(640, 480, 20, 20), level);
        assert_eq!((cam.x(), cam.y()), (330, 250));

        cam.follow(Rect::new(1260, 940, 20, 20), level);
        assert_eq!((cam.x(), cam.y()), (640, 480));
    }

    #[test]
    fn background_wraps() {
        let mut bg = ScrollingBackground::new(3);
        for _ in 0..3 {
            bg.scroll();
        }
        assert_eq!(bg.positions(), [-3, 0]);
        bg.scroll();
        assert_eq!(bg.offset(), -1);
    }
}
