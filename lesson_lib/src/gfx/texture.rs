//! Renderable images
//!
//! A texture is a surface plus the state the canvas applies when copying it: color modulation,
//! alpha modulation and blending. Streaming textures can additionally be locked to access their
//! pixels directly and target textures can be drawn into through a [`Canvas`](super::Canvas).

use super::color::Color;
use super::surface::Surface;
use crate::error::{LessonError, LessonResult};

/// How a texture is meant to be accessed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    /// Uploaded once, never changes
    Static,
    /// Pixels can be rewritten between `lock` and `unlock`
    Streaming,
    /// Can be used as a render target
    Target,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlendMode {
    /// Texels overwrite the destination
    None,
    /// Source-over alpha blending
    #[default]
    Blend,
}

#[derive(Clone, Debug)]
pub struct Texture {
    surface: Surface,
    access: Access,
    color_mod: Color,
    alpha_mod: u8,
    blend_mode: BlendMode,
    locked: bool,
}

impl Texture {
    pub fn from_surface(surface: Surface) -> Texture {
        Texture::with_access(surface, Access::Static)
    }

    pub fn with_access(surface: Surface, access: Access) -> Texture {
        Texture {
            surface,
            access,
            color_mod: Color::WHITE,
            alpha_mod: 0xff,
            blend_mode: BlendMode::Blend,
            locked: false,
        }
    }

    /// Transparent texture of the given size
    pub fn blank(width: u32, height: u32, access: Access) -> Texture {
        Texture::with_access(Surface::new(width, height), access)
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color_mod = Color::rgb(r, g, b);
    }

    pub fn color_mod(&self) -> Color {
        self.color_mod
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha_mod = alpha;
    }

    pub fn alpha(&self) -> u8 {
        self.alpha_mod
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Start direct pixel access. Only streaming textures can be locked and only once at a time.
    pub fn lock(&mut self) -> LessonResult<()> {
        if self.access != Access::Streaming {
            return Err(LessonError::BadTextureAccess(self.access));
        }
        if self.locked {
            return Err(LessonError::TextureLocked);
        }

        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> LessonResult<()> {
        if !self.locked {
            return Err(LessonError::TextureNotLocked);
        }

        self.locked = false;
        Ok(())
    }

    pub fn pixels(&self) -> LessonResult<&[u32]> {
        self.check_locked()?;
        Ok(self.surface.pixels())
    }

    pub fn pixels_mut(&mut self) -> LessonResult<&mut [u32]> {
        self.check_locked()?;
        Ok(self.surface.pixels_mut())
    }

    /// Row length in bytes of the locked pixels
    pub fn pitch(&self) -> usize {
        self.surface.pitch()
    }

    pub fn pixel32(&self, x: u32, y: u32) -> LessonResult<u32> {
        self.check_locked()?;
        self.surface
            .pixel32(x as i32, y as i32)
            .ok_or_else(|| LessonError::InvalidState(format!("pixel {x}x{y} is out of bounds")))
    }

    /// Replace the whole texture contents while locked
    pub fn copy_pixels(&mut self, pixels: &[u32]) -> LessonResult<()> {
        self.check_locked()?;

        let dst = self.surface.pixels_mut();
        if dst.len() != pixels.len() {
            return Err(LessonError::BadPixelCount {
                width: self.surface.width(),
                height: self.surface.height(),
                got: pixels.len(),
            });
        }
        dst.copy_from_slice(pixels);
        Ok(())
    }

    fn check_locked(&self) -> LessonResult<()> {
        if self.locked {
            Ok(())
        } else {
            Err(LessonError::TextureNotLocked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_textures_cannot_be_locked() {
        let mut t = Texture::blank(2, 2, Access::Static);
        assert!(matches!(t.lock(), Err(LessonError::BadTextureAccess(Access::Static))));
    }

    #[test]
    fn lock_cycle() {
        let mut t = Texture::blank(2, 1, Access::Streaming);
        assert!(t.pixels().is_err());
        assert!(t.unlock().is_err());

        t.lock().unwrap();
        assert!(matches!(t.lock(), Err(LessonError::TextureLocked)));
        t.copy_pixels(&[1, 2]).unwrap();
        assert_eq!(t.pixel32(1, 0).unwrap(), 2);
        assert!(t.copy_pixels(&[1, 2, 3]).is_err());
        t.unlock().unwrap();

        assert!(t.pixel32(0, 0).is_err());
        assert_eq!(t.surface().pixels(), &[1, 2]);
    }
}
