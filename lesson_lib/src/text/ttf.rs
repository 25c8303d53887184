use crate::error::{LessonError, LessonResult};
use crate::gfx::{Color, Surface, Texture};
use fnv::FnvHashMap;
use fontdue::{FontSettings, Metrics};
use std::path::Path;

/// Coverage above which a pixel is considered inside the glyph when rendering without
/// anti-aliasing
const SOLID_THRESHOLD: u8 = 0x80;

struct Glyph {
    metrics: Metrics,
    coverage: Vec<u8>,
}

/// A TrueType font rasterized at a fixed size
pub struct Font {
    font: fontdue::Font,
    px: f32,
    ascent: f32,
    descent: f32,
    /// Printable ASCII is rasterized once at load time
    cache: FnvHashMap<char, Glyph>,
}

impl Font {
    pub fn load(path: &Path, point_size: f32) -> LessonResult<Font> {
        let bytes = std::fs::read(path).map_err(|e| {
            warn!("Can't open font {}: {}", path.display(), e);
            LessonError::Io(e)
        })?;

        Font::from_bytes(&bytes, point_size).map_err(|reason| LessonError::Font {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_bytes(bytes: &[u8], point_size: f32) -> Result<Font, String> {
        let settings = FontSettings {
            scale: point_size,
            ..FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings).map_err(|e| e.to_string())?;

        let (ascent, descent) = match font.horizontal_line_metrics(point_size) {
            Some(m) => (m.ascent, m.descent),
            None => (point_size, 0.),
        };

        let mut cache = FnvHashMap::default();
        for c in (0x20u8..0x7f).map(char::from) {
            let (metrics, coverage) = font.rasterize(c, point_size);
            cache.insert(c, Glyph { metrics, coverage });
        }

        Ok(Font {
            font,
            px: point_size,
            ascent,
            descent,
            cache,
        })
    }

    pub fn point_size(&self) -> f32 {
        self.px
    }

    /// Height of a line of text in pixels
    pub fn height(&self) -> u32 {
        (self.ascent - self.descent).ceil().max(1.) as u32
    }

    /// Dimensions of the surface `text` would be rendered to
    pub fn size_of(&self, text: &str) -> (u32, u32) {
        let width: f32 = text
            .chars()
            .map(|c| match self.cache.get(&c) {
                Some(g) => g.metrics.advance_width,
                None => self.font.metrics(c, self.px).advance_width,
            })
            .sum();

        (width.ceil().max(1.) as u32, self.height())
    }

    /// Render without anti-aliasing, every pixel is either `color` or transparent
    pub fn render_solid(&self, text: &str, color: Color) -> Surface {
        self.render(text, solid_alpha, color)
    }

    /// Render with glyph coverage turned into alpha
    pub fn render_blended(&self, text: &str, color: Color) -> Surface {
        self.render(text, blended_alpha, color)
    }

    /// Convenience wrapper returning a texture ready to be copied to the canvas
    pub fn texture(&self, text: &str, color: Color) -> Texture {
        Texture::from_surface(self.render_blended(text, color))
    }

    fn render(&self, text: &str, alpha: fn(u8, u8) -> u8, color: Color) -> Surface {
        let (width, height) = self.size_of(text);
        let mut surface = Surface::filled(width, height, Color::rgba(color.r, color.g, color.b, 0));
        let baseline = self.ascent.ceil() as i32;
        let mut pen = 0f32;

        for c in text.chars() {
            let owned;
            let glyph = match self.cache.get(&c) {
                Some(g) => g,
                None => {
                    let (metrics, coverage) = self.font.rasterize(c, self.px);
                    owned = Glyph { metrics, coverage };
                    &owned
                }
            };

            let m = &glyph.metrics;
            let left = pen.round() as i32 + m.xmin;
            let top = baseline - m.ymin - m.height as i32;
            let bitmap = Coverage {
                width: m.width,
                height: m.height,
                data: &glyph.coverage,
            };
            composite(&mut surface, &bitmap, left, top, alpha, color);

            pen += m.advance_width;
        }

        surface
    }
}

/// Alpha of a pixel rendered without anti-aliasing
fn solid_alpha(coverage: u8, max: u8) -> u8 {
    if coverage >= SOLID_THRESHOLD { max } else { 0 }
}

fn blended_alpha(coverage: u8, max: u8) -> u8 {
    ((coverage as u32 * max as u32) / 255) as u8
}

/// Rasterized glyph, one coverage byte per pixel
struct Coverage<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

/// Draw a glyph with its top left corner at `(left, top)`. Where glyphs overlap the strongest
/// alpha wins.
fn composite(
    surface: &mut Surface,
    glyph: &Coverage,
    left: i32,
    top: i32,
    alpha: fn(u8, u8) -> u8,
    color: Color,
) {
    for gy in 0..glyph.height {
        for gx in 0..glyph.width {
            let a = alpha(glyph.data[gy * glyph.width + gx], color.a);
            if a == 0 {
                continue;
            }

            let (x, y) = (left + gx as i32, top + gy as i32);
            let current = surface.pixel(x, y).map(|p| p.a).unwrap_or(0);
            if a > current {
                surface.set_pixel(x, y, Color::rgba(color.r, color.g, color.b, a));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_a_font() {
        assert!(Font::from_bytes(b"definitely not a font", 16.).is_err());
    }

    #[test]
    fn missing_font_file() {
        let err = Font::load(Path::new("no/such/font.ttf"), 16.).err();
        assert!(matches!(err, Some(LessonError::Io(_))));
    }

    #[test]
    fn solid_rendering_thresholds_coverage() {
        assert_eq!(solid_alpha(SOLID_THRESHOLD - 1, 0xff), 0);
        assert_eq!(solid_alpha(SOLID_THRESHOLD, 0xff), 0xff);
        assert_eq!(solid_alpha(0xff, 0xff), 0xff);
        assert_eq!(solid_alpha(0xff, 0x40), 0x40);
        assert_eq!(solid_alpha(0, 0xff), 0);
    }

    #[test]
    fn blended_rendering_scales_coverage() {
        assert_eq!(blended_alpha(0, 0xff), 0);
        assert_eq!(blended_alpha(0xff, 0xff), 0xff);
        assert_eq!(blended_alpha(0x80, 0xff), 0x80);
        // Text alpha scales the result
        assert_eq!(blended_alpha(0xff, 0x80), 0x80);
        assert_eq!(blended_alpha(0x80, 0x80), 0x40);
    }

    #[test]
    fn glyphs_are_placed_and_clipped() {
        let red = Color::RED;
        let mut surface = Surface::filled(4, 3, Color::rgba(0xff, 0, 0, 0));
        let glyph = Coverage {
            width: 2,
            height: 2,
            data: &[0xff, 0x10, 0x90, 0xff],
        };

        composite(&mut surface, &glyph, 1, 1, solid_alpha, red);
        assert_eq!(surface.pixel(1, 1), Some(red));
        assert_eq!(surface.pixel(2, 1).map(|p| p.a), Some(0));
        assert_eq!(surface.pixel(1, 2), Some(red));
        assert_eq!(surface.pixel(2, 2), Some(red));
        assert_eq!(surface.pixel(0, 0).map(|p| p.a), Some(0));

        // Partly off the surface
        composite(&mut surface, &glyph, 3, -1, solid_alpha, red);
        assert_eq!(surface.pixel(3, 0), Some(red));
    }

    #[test]
    fn overlapping_glyphs_keep_the_strongest_alpha() {
        let color = Color::WHITE;
        let mut surface = Surface::filled(2, 1, Color::rgba(0xff, 0xff, 0xff, 0));
        let strong = Coverage {
            width: 1,
            height: 1,
            data: &[0xff],
        };
        let weak = Coverage {
            width: 2,
            height: 1,
            data: &[0x40, 0x40],
        };

        composite(&mut surface, &strong, 0, 0, blended_alpha, color);
        composite(&mut surface, &weak, 0, 0, blended_alpha, color);
        assert_eq!(surface.pixel(0, 0).map(|p| p.a), Some(0xff));
        assert_eq!(surface.pixel(1, 0).map(|p| p.a), Some(0x40));
    }
}
