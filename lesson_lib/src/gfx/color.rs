/// 8-bit per channel RGBA color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(0xff, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 0xff, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xff);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0);
    /// Color key used by every sprite sheet in the lesson assets
    pub const CYAN: Color = Color::rgb(0, 0xff, 0xff);
    /// What a color-keyed pixel is replaced with
    pub const TRANSPARENT: Color = Color::rgba(0xff, 0xff, 0xff, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub const fn to_argb8888(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_argb8888(pixel: u32) -> Color {
        Color {
            a: (pixel >> 24) as u8,
            r: (pixel >> 16) as u8,
            g: (pixel >> 8) as u8,
            b: pixel as u8,
        }
    }

    /// Same color ignoring alpha
    pub fn same_rgb(self, other: Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Color {
        Color::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        let c = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb8888(), 0x7812_3456);
        assert_eq!(Color::from_argb8888(0x7812_3456), c);
        assert_eq!(Color::CYAN.to_argb8888(), 0xff00_ffff);
    }

    #[test]
    fn rgb_comparison_ignores_alpha() {
        assert!(Color::rgba(0, 0xff, 0xff, 0).same_rgb(Color::CYAN));
        assert!(!Color::WHITE.same_rgb(Color::CYAN));
    }
}
