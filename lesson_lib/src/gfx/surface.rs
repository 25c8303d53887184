//! CPU-side pixel buffer

use super::blend::blend_pixel;
use super::color::Color;
use super::rect::{Point, Rect};
use crate::error::{LessonError, LessonResult};

/// A `width` x `height` buffer of ARGB8888 pixels stored row by row with no padding, so the pitch
/// is always `width * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Transparent black surface
    pub fn new(width: u32, height: u32) -> Surface {
        Surface::filled(width, height, Color::rgba(0, 0, 0, 0))
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Surface {
        Surface {
            width,
            height,
            pixels: vec![color.to_argb8888(); width as usize * height as usize],
        }
    }

    /// Build a surface from tightly packed RGBA8 bytes as produced by most image decoders
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> LessonResult<Surface> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(LessonError::BadPixelCount {
                width,
                height,
                got: rgba.len() / 4,
            });
        }

        let pixels = bytemuck::cast_slice::<u8, [u8; 4]>(rgba)
            .iter()
            .map(|&[r, g, b, a]| Color::rgba(r, g, b, a).to_argb8888())
            .collect();

        Ok(Surface {
            width,
            height,
            pixels,
        })
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> LessonResult<Surface> {
        if pixels.len() != width as usize * height as usize {
            return Err(LessonError::BadPixelCount {
                width,
                height,
                got: pixels.len(),
            });
        }

        Ok(Surface {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Raw ARGB8888 value at `(x, y)`, `None` outside of the surface
    pub fn pixel32(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.pixel32(x, y).map(Color::from_argb8888)
    }

    /// Overwrite a single pixel, coordinates outside of the surface are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_argb8888();
        }
    }

    pub(crate) fn blend_at(&mut self, x: i32, y: i32, src: Color, blend: bool) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = if blend {
                blend_pixel(self.pixels[i], src)
            } else {
                src.to_argb8888()
            };
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_argb8888());
    }

    /// Fill `rect` clipped to the surface bounds
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersection(&self.rect()) else {
            return;
        };

        let value = color.to_argb8888();
        let stride = self.width as usize;
        for y in area.y..area.bottom() {
            let start = y as usize * stride + area.x as usize;
            self.pixels[start..start + area.w as usize].fill(value);
        }
    }

    /// Copy `src_rect` of `src` (the whole surface if `None`) to `dst` at its natural size.
    /// Pixels are alpha-blended so color-keyed areas leave the destination untouched.
    pub fn blit(&mut self, src: &Surface, src_rect: Option<Rect>, dst: Point) {
        let src_rect = src_rect.unwrap_or_else(|| src.rect());
        let dst_rect = Rect::new(dst.x, dst.y, src_rect.w, src_rect.h);
        self.blit_scaled(src, Some(src_rect), Some(dst_rect));
    }

    /// Nearest-neighbour stretch of `src_rect` into `dst_rect`. Either rect defaults to the
    /// whole surface it refers to.
    pub fn blit_scaled(&mut self, src: &Surface, src_rect: Option<Rect>, dst_rect: Option<Rect>) {
        let src_rect = src_rect.unwrap_or_else(|| src.rect());
        let dst_rect = dst_rect.unwrap_or_else(|| self.rect());
        if src_rect.is_empty() || dst_rect.is_empty() {
            return;
        }

        let Some(area) = dst_rect.intersection(&self.rect()) else {
            return;
        };

        for y in area.y..area.bottom() {
            let sy = src_rect.y + ((y - dst_rect.y) as i64 * src_rect.h as i64 / dst_rect.h as i64) as i32;
            for x in area.x..area.right() {
                let sx =
                    src_rect.x + ((x - dst_rect.x) as i64 * src_rect.w as i64 / dst_rect.w as i64) as i32;
                if let Some(color) = src.pixel(sx, sy) {
                    self.blend_at(x, y, color, true);
                }
            }
        }
    }

    /// Make every pixel whose RGB matches `key` fully transparent. Returns the number of pixels
    /// that were keyed out.
    pub fn set_color_key(&mut self, key: Color) -> usize {
        let transparent = Color::TRANSPARENT.to_argb8888();
        let mut count = 0;
        for p in self.pixels.iter_mut() {
            if Color::from_argb8888(*p).same_rgb(key) {
                *p = transparent;
                count += 1;
            }
        }
        count
    }

    /// Replace every pixel exactly equal to `from` with `to`
    pub fn replace_color(&mut self, from: u32, to: u32) -> usize {
        let mut count = 0;
        for p in self.pixels.iter_mut().filter(|p| **p == from) {
            *p = to;
            count += 1;
        }
        count
    }

    /// Reallocate the buffer, previous contents are discarded
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize];
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_is_clipped() {
        let mut s = Surface::new(4, 4);
        s.fill_rect(Rect::new(2, 2, 10, 10), Color::RED);
        assert_eq!(s.pixel(1, 1), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(s.pixel(2, 2), Some(Color::RED));
        assert_eq!(s.pixel(3, 3), Some(Color::RED));
        assert_eq!(s.pixel(4, 4), None);
    }

    #[test]
    fn color_key_and_blit() {
        let mut sprite = Surface::filled(2, 1, Color::CYAN);
        sprite.set_pixel(1, 0, Color::RED);
        assert_eq!(sprite.set_color_key(Color::CYAN), 1);

        let mut screen = Surface::filled(3, 1, Color::WHITE);
        screen.blit(&sprite, None, Point::new(1, 0));
        assert_eq!(screen.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(screen.pixel(1, 0), Some(Color::WHITE));
        assert_eq!(screen.pixel(2, 0), Some(Color::RED));
    }

    #[test]
    fn scaled_blit_stretches() {
        let mut src = Surface::new(2, 1);
        src.set_pixel(0, 0, Color::RED);
        src.set_pixel(1, 0, Color::BLUE);

        let mut dst = Surface::new(4, 2);
        dst.blit_scaled(&src, None, None);
        assert_eq!(dst.pixel(1, 1), Some(Color::RED));
        assert_eq!(dst.pixel(2, 0), Some(Color::BLUE));
        assert_eq!(dst.pixel(3, 1), Some(Color::BLUE));
    }

    #[test]
    fn from_rgba8_checks_length() {
        assert!(Surface::from_rgba8(2, 2, &[0; 12]).is_err());
        let s = Surface::from_rgba8(1, 1, &[1, 2, 3, 4]).unwrap();
        assert_eq!(s.pixel(0, 0), Some(Color::rgba(1, 2, 3, 4)));
    }
}
