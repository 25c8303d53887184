use super::color::Color;

/// Source-over blend of `src` on top of the ARGB8888 pixel `dst`. The result is always opaque if
/// the destination was.
pub(crate) fn blend_pixel(dst: u32, src: Color) -> u32 {
    match src.a {
        0 => dst,
        0xff => src.to_argb8888(),
        a => {
            let d = Color::from_argb8888(dst);
            let a = a as u32;
            let inv = 255 - a;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
            let out_a = (a + d.a as u32 * inv / 255).min(255) as u8;

            Color::rgba(mix(src.r, d.r), mix(src.g, d.g), mix(src.b, d.b), out_a).to_argb8888()
        }
    }
}

/// Apply texture color and alpha modulation to a sampled texel
pub(crate) fn modulate(texel: Color, color_mod: Color, alpha_mod: u8) -> Color {
    let m = |c: u8, m: u8| ((c as u32 * m as u32) / 255) as u8;

    Color::rgba(
        m(texel.r, color_mod.r),
        m(texel.g, color_mod.g),
        m(texel.b, color_mod.b),
        m(texel.a, alpha_mod),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_alpha_mixes_channels() {
        let out = Color::from_argb8888(blend_pixel(
            Color::BLACK.to_argb8888(),
            Color::rgba(0xff, 0xff, 0xff, 0x80),
        ));
        assert_eq!(out.r, 0x80);
        assert_eq!(out.a, 0xff);
    }

    #[test]
    fn extremes_short_circuit() {
        let dst = Color::BLUE.to_argb8888();
        assert_eq!(blend_pixel(dst, Color::rgba(1, 2, 3, 0)), dst);
        assert_eq!(blend_pixel(dst, Color::RED), Color::RED.to_argb8888());
    }

    #[test]
    fn modulation_scales_channels() {
        let out = modulate(Color::WHITE, Color::rgb(0xff, 0, 0x80), 0x40);
        assert_eq!(out, Color::rgba(0xff, 0, 0x80, 0x40));
    }
}
