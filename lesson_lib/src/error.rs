use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type LessonResult<T> = ::std::result::Result<T, LessonError>;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not decode PNG image: {0}")]
    Png(#[from] png::DecodingError),
    #[error("Could not decode WAV file: {0}")]
    Wav(#[from] hound::Error),
    #[error("Unsupported image format in {path}: {reason}")]
    UnsupportedImage { path: PathBuf, reason: String },
    #[error("Unsupported audio format in {path}: {reason}")]
    UnsupportedAudio { path: PathBuf, reason: String },
    #[error("Could not load font {path}: {reason}")]
    Font { path: PathBuf, reason: String },
    #[error("Bad tile map: {0}")]
    BadTileMap(String),
    #[error("Texture is already locked")]
    TextureLocked,
    #[error("Texture is not locked")]
    TextureNotLocked,
    #[error("Texture access {0:?} does not allow this operation")]
    BadTextureAccess(crate::gfx::Access),
    #[error("Pixel buffer of {got} pixels does not match a {width}x{height} texture")]
    BadPixelCount { width: u32, height: u32, got: usize },
    #[error("Unknown lesson {0}")]
    UnknownLesson(u32),
    #[error("Invalid state error: {0}")]
    InvalidState(String),
}
