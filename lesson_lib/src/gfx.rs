//! Software 2D rendering: pixel buffers, textures and the canvas that draws them.
//!
//! Everything here works on plain `u32` pixels in ARGB8888 layout so the finished frame can be
//! handed over to the platform layer as a single streaming texture upload.

mod blend;
pub mod canvas;
pub mod color;
pub mod rect;
pub mod surface;
pub mod texture;

pub use canvas::{Canvas, Flip};
pub use color::Color;
pub use rect::{Point, Rect};
pub use surface::Surface;
pub use texture::{Access, BlendMode, Texture};
