use std::cmp::{max, min};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point { x, y }
    }
}

/// Integer rectangle. `w` and `h` are signed so that arithmetic on positions never has to cast,
/// a rectangle with a non-positive dimension is empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// One past the rightmost column
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    pub const fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// True if both rectangles share at least one pixel. Rectangles that only touch along an edge
    /// do not intersect, and an empty rectangle never intersects anything.
    pub fn has_intersection(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.has_intersection(other) {
            return None;
        }

        let x = max(self.x, other.x);
        let y = max(self.y, other.y);
        let r = min(self.right(), other.right());
        let b = min(self.bottom(), other.bottom());

        Some(Rect::new(x, y, r - x, b - y))
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Rect {
        Rect { x, y, w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.has_intersection(&b));
        assert_eq!(a.intersection(&b), None);

        let c = Rect::new(9, 9, 10, 10);
        assert!(a.has_intersection(&c));
        assert_eq!(a.intersection(&c), Some(Rect::new(9, 9, 1, 1)));
    }

    #[test]
    fn empty_rects_never_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.has_intersection(&Rect::new(5, 5, 0, 4)));
        assert!(!Rect::new(5, 5, 3, -1).has_intersection(&a));
    }

    #[test]
    fn point_containment_excludes_far_edges() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(r.contains_point(Point::new(2, 2)));
        assert!(r.contains_point(Point::new(4, 4)));
        assert!(!r.contains_point(Point::new(5, 4)));
    }
}
