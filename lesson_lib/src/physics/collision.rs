use crate::gfx::Rect;

/// Box test where touching edges count as a collision
pub fn check_rects(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.x || a.x > b.right() || a.bottom() < b.y || a.y > b.bottom())
}

/// True if any box of `a` intersects any box of `b`. Touching edges do not collide here.
pub fn check_colliders(a: &[Rect], b: &[Rect]) -> bool {
    a.iter()
        .any(|ra| b.iter().any(|rb| ra.has_intersection(rb)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, r: i32) -> Circle {
        Circle { x, y, r }
    }

    pub fn overlaps_circle(&self, other: &Circle) -> bool {
        let total = self.r + other.r;
        distance_squared(self.x, self.y, other.x, other.y) < total * total
    }

    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        let close_x = self.x.clamp(rect.x, rect.right().max(rect.x));
        let close_y = self.y.clamp(rect.y, rect.bottom().max(rect.y));

        distance_squared(self.x, self.y, close_x, close_y) < self.r * self.r
    }
}

fn distance_squared(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_boxes() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(check_rects(&a, &b));
        assert!(!check_colliders(&[a], &[b]));
        assert!(!check_rects(&a, &Rect::new(11, 0, 10, 10)));
    }

    #[test]
    fn collider_lists() {
        let a = [Rect::new(0, 0, 2, 2), Rect::new(50, 50, 2, 2)];
        let b = [Rect::new(20, 20, 5, 5), Rect::new(51, 51, 5, 5)];
        assert!(check_colliders(&a, &b));
        assert!(!check_colliders(&a[..1], &b));
        assert!(!check_colliders(&[], &b));
    }

    #[test]
    fn circles() {
        let c = Circle::new(0, 0, 10);
        assert!(c.overlaps_circle(&Circle::new(19, 0, 10)));
        assert!(!c.overlaps_circle(&Circle::new(20, 0, 10)));

        assert!(c.overlaps_rect(&Rect::new(9, -5, 10, 10)));
        assert!(!c.overlaps_rect(&Rect::new(10, -5, 10, 10)));
        // Corner distance is sqrt(72)
        assert!(c.overlaps_rect(&Rect::new(6, 6, 4, 4)));
        assert!(!c.overlaps_rect(&Rect::new(8, 8, 4, 4)));
        // Center inside the box
        assert!(c.overlaps_rect(&Rect::new(-5, -5, 10, 10)));
    }
}
