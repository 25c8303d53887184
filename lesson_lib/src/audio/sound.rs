use super::SAMPLE_RATE;
use crate::error::{LessonError, LessonResult};
use hound::{SampleFormat, WavReader};
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

/// Decoded PCM audio, interleaved stereo at the mixer's sample rate
#[derive(Clone, Debug)]
pub struct Sound {
    samples: Rc<[i16]>,
}

impl Sound {
    pub fn load(path: &Path) -> LessonResult<Sound> {
        let reader = WavReader::open(path).map_err(|e| {
            warn!("Can't open sound {}: {}", path.display(), e);
            e
        })?;

        let sound = Sound::decode(reader).map_err(|e| match e {
            LessonError::UnsupportedAudio { reason, .. } => LessonError::UnsupportedAudio {
                path: path.to_path_buf(),
                reason,
            },
            e => e,
        })?;

        debug!("Loaded {} ({} frames)", path.display(), sound.frames());

        Ok(sound)
    }

    /// Decode a WAV stream of 8, 16, 24 or 32 bit integer or 32 bit float samples, mono or stereo
    pub fn decode<R: Read>(reader: WavReader<R>) -> LessonResult<Sound> {
        let spec = reader.spec();
        let unsupported = |reason: String| LessonError::UnsupportedAudio {
            path: Default::default(),
            reason,
        };

        if spec.channels != 1 && spec.channels != 2 {
            return Err(unsupported(format!("{} channels", spec.channels)));
        }

        let samples: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 8) => reader
                .into_samples::<i8>()
                .map(|s| s.map(|s| (s as i16) << 8))
                .collect::<Result<_, _>>()?,
            (SampleFormat::Int, 16) => reader.into_samples::<i16>().collect::<Result<_, _>>()?,
            (SampleFormat::Int, bits @ (24 | 32)) => {
                let shift = bits - 16;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|s| (s >> shift) as i16))
                    .collect::<Result<_, _>>()?
            }
            (SampleFormat::Float, 32) => reader
                .into_samples::<f32>()
                .map(|s| s.map(|s| (s.clamp(-1., 1.) * i16::MAX as f32) as i16))
                .collect::<Result<_, _>>()?,
            (format, bits) => {
                return Err(unsupported(format!("{bits} bit {format:?} samples")));
            }
        };

        Ok(Sound::from_samples(spec.channels, spec.sample_rate, &samples))
    }

    /// Build a sound from interleaved samples with `channels` (1 or 2) channels at `rate` Hz
    pub fn from_samples(channels: u16, rate: u32, samples: &[i16]) -> Sound {
        let stereo: Vec<i16> = if channels == 1 {
            samples.iter().flat_map(|&s| [s, s]).collect()
        } else {
            samples.to_vec()
        };

        let stereo = if rate == SAMPLE_RATE || rate == 0 {
            stereo
        } else {
            resample(&stereo, rate, SAMPLE_RATE)
        };

        Sound {
            samples: stereo.into(),
        }
    }

    /// Number of stereo frames
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub(crate) fn shared(&self) -> Rc<[i16]> {
        self.samples.clone()
    }
}

/// Linear interpolation of interleaved stereo samples from `from` Hz to `to` Hz
fn resample(stereo: &[i16], from: u32, to: u32) -> Vec<i16> {
    let frames = stereo.len() / 2;
    if frames == 0 {
        return Vec::new();
    }

    let out_frames = (frames as u64 * to as u64 / from as u64) as usize;
    let step = from as f64 / to as f64;
    let mut out = Vec::with_capacity(out_frames * 2);

    for i in 0..out_frames {
        let pos = i as f64 * step;
        let idx = pos as usize;
        let frac = pos - idx as f64;
        let next = (idx + 1).min(frames - 1);

        for c in 0..2 {
            let a = stereo[idx * 2 + c] as f64;
            let b = stereo[next * 2 + c] as f64;
            out.push((a + (b - a) * frac).round() as i16);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::io::Cursor;

    #[test]
    fn mono_is_duplicated() {
        let s = Sound::from_samples(1, SAMPLE_RATE, &[1, -2, 3]);
        assert_eq!(s.samples(), &[1, 1, -2, -2, 3, 3]);
        assert_eq!(s.frames(), 3);
    }

    #[test]
    fn upsampling_interpolates() {
        let s = Sound::from_samples(2, SAMPLE_RATE / 2, &[0, 0, 100, -100]);
        assert_eq!(s.frames(), 4);
        assert_eq!(&s.samples()[..6], &[0, 0, 50, -50, 100, -100]);
    }

    #[test]
    fn decode_wav() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Cursor::new(Vec::new());
        {
            let mut w = WavWriter::new(&mut bytes, spec).unwrap();
            for s in [0i16, 1000, -1000] {
                w.write_sample(s).unwrap();
            }
            w.finalize().unwrap();
        }
        bytes.set_position(0);

        let sound = Sound::decode(WavReader::new(bytes).unwrap()).unwrap();
        assert_eq!(sound.samples(), &[0, 0, 1000, 1000, -1000, -1000]);
    }

    #[test]
    fn too_many_channels() {
        let spec = WavSpec {
            channels: 4,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Cursor::new(Vec::new());
        {
            let mut w = WavWriter::new(&mut bytes, spec).unwrap();
            for _ in 0..4 {
                w.write_sample(0i16).unwrap();
            }
            w.finalize().unwrap();
        }
        bytes.set_position(0);

        let err = Sound::decode(WavReader::new(bytes).unwrap()).unwrap_err();
        assert!(matches!(err, LessonError::UnsupportedAudio { .. }));
    }
}
