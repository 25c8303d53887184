//! Text rendering, either from TrueType fonts or from bitmap glyph sheets

mod bitmap;
mod ttf;

pub use bitmap::BitmapFont;
pub use ttf::Font;
