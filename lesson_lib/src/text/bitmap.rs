use crate::error::LessonResult;
use crate::gfx::{Canvas, Rect, Texture};

/// Font built out of a 16x16 grid of glyph cells, one per byte value
pub struct BitmapFont {
    sheet: Texture,
    chars: Vec<Rect>,
    space: i32,
    new_line: i32,
}

impl BitmapFont {
    /// Measure every glyph of `sheet`. The texture must be streaming since its pixels are read
    /// back while locked. Whatever color the top-left pixel has is treated as background.
    pub fn build(mut sheet: Texture) -> LessonResult<BitmapFont> {
        sheet.lock()?;

        let cell_w = (sheet.width() / 16) as i32;
        let cell_h = (sheet.height() / 16) as i32;
        let bg = sheet.pixel32(0, 0)?;

        let is_glyph = |x: i32, y: i32| -> LessonResult<bool> {
            Ok(sheet.pixel32(x as u32, y as u32)? != bg)
        };

        let mut chars = Vec::with_capacity(256);
        let mut top = cell_h;
        let mut base_a = cell_h;

        for index in 0..256 {
            let cell_x = cell_w * (index % 16);
            let cell_y = cell_h * (index / 16);
            let mut rect = Rect::new(cell_x, cell_y, cell_w, cell_h);

            // Left side
            'left: for col in 0..cell_w {
                for row in 0..cell_h {
                    if is_glyph(cell_x + col, cell_y + row)? {
                        rect.x = cell_x + col;
                        break 'left;
                    }
                }
            }

            // Right side
            'right: for col in (0..cell_w).rev() {
                for row in 0..cell_h {
                    if is_glyph(cell_x + col, cell_y + row)? {
                        rect.w = cell_x + col - rect.x + 1;
                        break 'right;
                    }
                }
            }

            'top: for row in 0..cell_h {
                for col in 0..cell_w {
                    if is_glyph(cell_x + col, cell_y + row)? {
                        top = top.min(row);
                        break 'top;
                    }
                }
            }

            // The bottom of 'A' is used as the baseline
            if index == b'A' as i32 {
                'base: for row in (0..cell_h).rev() {
                    for col in 0..cell_w {
                        if is_glyph(cell_x + col, cell_y + row)? {
                            base_a = row;
                            break 'base;
                        }
                    }
                }
            }

            chars.push(rect);
        }

        sheet.unlock()?;

        for rect in chars.iter_mut() {
            rect.y += top;
            rect.h -= top;
        }

        debug!(
            "Bitmap font: {}x{} cells, top {}, baseline {}",
            cell_w, cell_h, top, base_a
        );

        Ok(BitmapFont {
            sheet,
            chars,
            space: cell_w / 2,
            new_line: base_a - top,
        })
    }

    pub fn glyph(&self, byte: u8) -> Rect {
        self.chars[byte as usize]
    }

    pub fn space(&self) -> i32 {
        self.space
    }

    pub fn new_line(&self) -> i32 {
        self.new_line
    }

    pub fn render(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str) {
        let (mut cur_x, mut cur_y) = (x, y);

        for b in text.bytes() {
            match b {
                b' ' => cur_x += self.space,
                b'\n' => {
                    cur_y += self.new_line;
                    cur_x = x;
                }
                _ => {
                    let clip = self.chars[b as usize];
                    canvas.copy(
                        &self.sheet,
                        Some(clip),
                        Some(Rect::new(cur_x, cur_y, clip.w, clip.h)),
                    );
                    cur_x += clip.w + 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{Access, Color, Surface};

    /// 64x64 sheet of 4x4 cells with an 'A' two pixels wide spanning rows 1..=3 and a one pixel
    /// 'B' on row 2
    fn sheet() -> Texture {
        let mut s = Surface::filled(64, 64, Color::BLACK);
        for y in 1..=3 {
            s.set_pixel(5, 16 + y, Color::WHITE);
            s.set_pixel(6, 16 + y, Color::WHITE);
        }
        s.set_pixel(8, 18, Color::RED);
        Texture::with_access(s, Access::Streaming)
    }

    #[test]
    fn glyph_metrics() {
        let font = BitmapFont::build(sheet()).unwrap();

        assert_eq!(font.space(), 2);
        assert_eq!(font.new_line(), 2);
        assert_eq!(font.glyph(b'A'), Rect::new(5, 17, 2, 3));
        assert_eq!(font.glyph(b'B'), Rect::new(8, 17, 1, 3));
        // Empty cells keep the whole cell
        assert_eq!(font.glyph(0), Rect::new(0, 1, 4, 3));
    }

    #[test]
    fn static_sheet_is_rejected() {
        let s = Texture::from_surface(Surface::new(16, 16));
        assert!(BitmapFont::build(s).is_err());
    }

    #[test]
    fn render_advances() {
        let font = BitmapFont::build(sheet()).unwrap();
        let mut screen = Surface::filled(16, 8, Color::BLUE);
        {
            let mut canvas = Canvas::new(&mut screen);
            font.render(&mut canvas, 0, 0, "AB\nA");
        }

        assert_eq!(screen.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(screen.pixel(1, 2), Some(Color::WHITE));
        assert_eq!(screen.pixel(2, 0), Some(Color::BLUE));
        assert_eq!(screen.pixel(3, 1), Some(Color::RED));
        // Second line starts back at x and new_line pixels lower
        assert_eq!(screen.pixel(0, 2 + 2), Some(Color::WHITE));
    }
}
