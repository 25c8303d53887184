//! Sound effects and music
//!
//! Everything is converted to interleaved 16 bit stereo at [`SAMPLE_RATE`] when loaded so that the
//! mixer only ever has to add samples together. The frontend pulls mixed samples from the
//! [`Mixer`] and pushes them to the audio device.

mod mixer;
mod sound;

pub use mixer::{CHANNELS, MAX_VOLUME, Mixer};
pub use sound::Sound;

/// Output sample rate in Hz
pub const SAMPLE_RATE: u32 = 44_100;
