use std::ops::Deref;
use lesson_lib::audio::SAMPLE_RATE;
use sdl3::audio::{AudioFormat, AudioSpec};
use crate::error::{AppError, AppResult};
use crate::sdl::audio::Device;

/// Bytes in one interleaved 16 bit stereo frame
const FRAME_BYTES: usize = 4;

pub struct Stream {
    stream: sdl3::audio::AudioStreamOwner,
}

impl Stream {
    pub fn new(dev: &Device) -> AppResult<Self> {
        let spec = AudioSpec {
            freq: Some(SAMPLE_RATE as i32),
            channels: Some(2),
            format: Some(AudioFormat::s16_sys()),
        };

        let stream = dev
            .deref()
            .clone()
            .open_device_stream(Some(&spec))
            .map_err(AppError::sdl)?;

        Ok(Stream {
            stream,
        })
    }

    pub fn play(&mut self, data: &[i16]) -> AppResult<()> {
        self.stream.put_data_i16(data).map_err(AppError::sdl)
    }

    pub fn resume(&mut self) -> AppResult<()> {
        self.stream.resume().map_err(AppError::sdl)
    }

    /// Stereo frames waiting to be played
    pub fn queued_frames(&self) -> usize {
        match self.stream.queued_bytes() {
            Ok(bytes) => bytes.max(0) as usize / FRAME_BYTES,
            Err(_) => 0,
        }
    }
}
