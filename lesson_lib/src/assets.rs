//! Loading of lesson media from disk
//!
//! Every lesson keeps its files in its own `lessonNN` directory below the asset root.

use crate::audio::Sound;
use crate::error::{LessonError, LessonResult};
use crate::gfx::{Access, Color, Surface, Texture};
use crate::text::Font;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new<P: AsRef<Path>>(root: P) -> Assets {
        Assets {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/lessonNN/<name>`
    pub fn path(&self, lesson: u32, name: &str) -> PathBuf {
        self.root.join(format!("lesson{lesson:02}")).join(name)
    }

    pub fn image(&self, lesson: u32, name: &str) -> LessonResult<Surface> {
        load_png(&self.path(lesson, name))
    }

    pub fn texture(&self, lesson: u32, name: &str) -> LessonResult<Texture> {
        Ok(Texture::from_surface(self.image(lesson, name)?))
    }

    /// Texture with every pixel of the `key` color made transparent
    pub fn texture_keyed(&self, lesson: u32, name: &str, key: Color) -> LessonResult<Texture> {
        let mut surface = self.image(lesson, name)?;
        surface.set_color_key(key);
        Ok(Texture::from_surface(surface))
    }

    /// Streaming texture whose pixels can be modified after loading
    pub fn streaming_texture(&self, lesson: u32, name: &str) -> LessonResult<Texture> {
        Ok(Texture::with_access(self.image(lesson, name)?, Access::Streaming))
    }

    pub fn font(&self, lesson: u32, name: &str, point_size: f32) -> LessonResult<Font> {
        Font::load(&self.path(lesson, name), point_size)
    }

    pub fn sound(&self, lesson: u32, name: &str) -> LessonResult<Sound> {
        Sound::load(&self.path(lesson, name))
    }

    pub fn text(&self, lesson: u32, name: &str) -> LessonResult<String> {
        let path = self.path(lesson, name);
        std::fs::read_to_string(&path).map_err(|e| {
            warn!("Can't read {}: {}", path.display(), e);
            LessonError::Io(e)
        })
    }
}

/// Decode a PNG file into an RGBA surface. Palette and low bit depth images are expanded,
/// 16 bit channels are not supported.
pub fn load_png(path: &Path) -> LessonResult<Surface> {
    let file = File::open(path).map_err(|e| {
        warn!("Can't open image {}: {}", path.display(), e);
        LessonError::Io(e)
    })?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    let unsupported = |reason: &str| LessonError::UnsupportedImage {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if info.bit_depth != png::BitDepth::Eight {
        return Err(unsupported("only 8 bit channels are supported"));
    }

    let bytes = &buf[..info.buffer_size()];
    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 0xff])
            .collect(),
        png::ColorType::Grayscale => bytes.iter().flat_map(|&g| [g, g, g, 0xff]).collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => return Err(unsupported("palette was not expanded")),
    };

    debug!("Loaded {} ({}x{})", path.display(), info.width, info.height);

    Surface::from_rgba8(info.width, info.height, &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lesson_lib_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("lesson10")).unwrap();
        dir
    }

    #[test]
    fn lesson_paths() {
        let assets = Assets::new("assets");
        assert_eq!(
            assets.path(7, "texture.png"),
            Path::new("assets").join("lesson07").join("texture.png")
        );
    }

    #[test]
    fn rgb_png_is_opaque() {
        let dir = scratch_dir("rgb");
        let path = dir.join("lesson10").join("rgb.png");
        write_png(&path, 2, 1, png::ColorType::Rgb, &[0xff, 0, 0, 0, 0xff, 0xff]);

        let s = load_png(&path).unwrap();
        assert_eq!((s.width(), s.height()), (2, 1));
        assert_eq!(s.pixel(0, 0), Some(Color::RED));
        assert_eq!(s.pixel(1, 0), Some(Color::CYAN));

        let keyed = Assets::new(&dir)
            .texture_keyed(10, "rgb.png", Color::CYAN)
            .unwrap();
        assert_eq!(keyed.surface().pixel(1, 0).map(|c| c.a), Some(0));
        assert_eq!(keyed.surface().pixel(0, 0), Some(Color::RED));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_png(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, LessonError::Io(_)));
    }
}
