//! The renderer: primitive drawing and texture copies into a target surface

use super::blend::modulate;
use super::color::Color;
use super::rect::{Point, Rect};
use super::surface::Surface;
use super::texture::{Access, BlendMode, Texture};
use crate::error::{LessonError, LessonResult};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    pub fn horizontal(self) -> bool {
        matches!(self, Flip::Horizontal | Flip::Both)
    }

    pub fn vertical(self) -> bool {
        matches!(self, Flip::Vertical | Flip::Both)
    }
}

/// Draws into either the frame buffer or a target texture. All coordinates are relative to the
/// current viewport and everything except [`Canvas::clear`] is clipped to it.
pub struct Canvas<'a> {
    target: &'a mut Surface,
    draw_color: Color,
    viewport: Option<Rect>,
}

impl<'a> Canvas<'a> {
    pub fn new(target: &'a mut Surface) -> Canvas<'a> {
        Canvas {
            target,
            draw_color: Color::WHITE,
            viewport: None,
        }
    }

    /// Render into `texture` instead of the screen
    pub fn for_texture(texture: &'a mut Texture) -> LessonResult<Canvas<'a>> {
        if texture.access() != Access::Target {
            return Err(LessonError::BadTextureAccess(texture.access()));
        }

        Ok(Canvas::new(texture.surface_mut()))
    }

    pub fn output_size(&self) -> (u32, u32) {
        (self.target.width(), self.target.height())
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// `None` resets the viewport to the whole target
    pub fn set_viewport(&mut self, viewport: Option<Rect>) {
        self.viewport = viewport;
    }

    /// Current drawing area in target coordinates
    pub fn viewport(&self) -> Rect {
        let full = self.target.rect();
        match self.viewport {
            Some(vp) => vp.intersection(&full).unwrap_or(Rect::new(vp.x, vp.y, 0, 0)),
            None => full,
        }
    }

    fn origin(&self) -> Point {
        self.viewport
            .map(|vp| Point::new(vp.x, vp.y))
            .unwrap_or_default()
    }

    /// Fill the whole target with the draw color, regardless of the viewport
    pub fn clear(&mut self) {
        self.target.fill(self.draw_color);
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        let origin = self.origin();
        let rect = rect.offset(origin.x, origin.y);
        if let Some(area) = rect.intersection(&self.viewport()) {
            self.target.fill_rect(area, self.draw_color);
        }
    }

    /// One pixel wide outline
    pub fn draw_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, 1));
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.w, 1));
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.h));
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.h));
    }

    pub fn draw_point(&mut self, x: i32, y: i32) {
        let origin = self.origin();
        let p = Point::new(x + origin.x, y + origin.y);
        if self.viewport().contains_point(p) {
            self.target.set_pixel(p.x, p.y, self.draw_color);
        }
    }

    /// Bresenham line, both end points included
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.draw_point(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Copy `src` of `texture` (all of it if `None`) stretched to `dst` (the whole viewport if
    /// `None`)
    pub fn copy(&mut self, texture: &Texture, src: Option<Rect>, dst: Option<Rect>) {
        self.copy_ex(texture, src, dst, 0.0, None, Flip::None);
    }

    /// Like [`Canvas::copy`] with a clockwise rotation of `angle` degrees around `center`
    /// (relative to `dst`, its middle if `None`) and optional mirroring.
    pub fn copy_ex(
        &mut self,
        texture: &Texture,
        src: Option<Rect>,
        dst: Option<Rect>,
        angle: f64,
        center: Option<Point>,
        flip: Flip,
    ) {
        let tex_rect = texture.surface().rect();
        let Some(src) = src.unwrap_or(tex_rect).intersection(&tex_rect) else {
            return;
        };

        let viewport = self.viewport();
        let origin = self.origin();
        let dst = dst
            .unwrap_or(Rect::new(0, 0, viewport.w, viewport.h))
            .offset(origin.x, origin.y);
        if dst.is_empty() {
            return;
        }

        let center = center.unwrap_or(Point::new(dst.w / 2, dst.h / 2));
        let pivot_x = (dst.x + center.x) as f64;
        let pivot_y = (dst.y + center.y) as f64;
        let (sin, cos) = angle.to_radians().sin_cos();

        // Screen space bounding box of the rotated destination
        let corners = [
            (dst.x, dst.y),
            (dst.right(), dst.y),
            (dst.x, dst.bottom()),
            (dst.right(), dst.bottom()),
        ];
        let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
        let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
        for (x, y) in corners {
            let fx = x as f64 - pivot_x;
            let fy = y as f64 - pivot_y;
            let rx = cos * fx - sin * fy + pivot_x;
            let ry = sin * fx + cos * fy + pivot_y;
            min_x = min_x.min(rx);
            min_y = min_y.min(ry);
            max_x = max_x.max(rx);
            max_y = max_y.max(ry);
        }
        let bounds = Rect::new(
            min_x.floor() as i32,
            min_y.floor() as i32,
            (max_x.ceil() - min_x.floor()) as i32,
            (max_y.ceil() - min_y.floor()) as i32,
        );
        let Some(area) = bounds.intersection(&viewport) else {
            return;
        };

        let blend = texture.blend_mode() == BlendMode::Blend;
        let surface = texture.surface();

        for ty in area.y..area.bottom() {
            for tx in area.x..area.right() {
                // Undo the rotation to find where this target pixel lands inside `dst`
                let fx = tx as f64 + 0.5 - pivot_x;
                let fy = ty as f64 + 0.5 - pivot_y;
                let lx = cos * fx + sin * fy + pivot_x - dst.x as f64;
                let ly = -sin * fx + cos * fy + pivot_y - dst.y as f64;
                if lx < 0.0 || ly < 0.0 || lx >= dst.w as f64 || ly >= dst.h as f64 {
                    continue;
                }

                let mut u = (lx * src.w as f64 / dst.w as f64) as i32;
                let mut v = (ly * src.h as f64 / dst.h as f64) as i32;
                if flip.horizontal() {
                    u = src.w - 1 - u;
                }
                if flip.vertical() {
                    v = src.h - 1 - v;
                }

                if let Some(texel) = surface.pixel(src.x + u, src.y + v) {
                    let color = modulate(texel, texture.color_mod(), texture.alpha());
                    self.target.blend_at(tx, ty, color, blend);
                }
            }
        }
    }
}
