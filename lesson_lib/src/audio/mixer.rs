use super::sound::Sound;
use std::rc::Rc;

/// Number of simultaneous sound effects
pub const CHANNELS: usize = 8;

pub const MAX_VOLUME: u8 = 128;

#[derive(Clone, Debug)]
struct Voice {
    samples: Rc<[i16]>,
    /// Next frame to play
    pos: usize,
    /// Remaining repetitions once the current one is over, negative loops forever
    loops: i32,
}

impl Voice {
    fn new(sound: &Sound, loops: i32) -> Option<Voice> {
        if sound.frames() == 0 {
            return None;
        }

        Some(Voice {
            samples: sound.shared(),
            pos: 0,
            loops,
        })
    }

    /// Returns the next frame, `None` once the voice is finished
    fn next_frame(&mut self) -> Option<(i16, i16)> {
        let frames = self.samples.len() / 2;

        if self.pos >= frames {
            match self.loops {
                0 => return None,
                n if n > 0 => self.loops -= 1,
                _ => (),
            }
            self.pos = 0;
        }

        let i = self.pos * 2;
        self.pos += 1;

        Some((self.samples[i], self.samples[i + 1]))
    }
}

/// Software mixer with a fixed number of effect channels and one music slot
#[derive(Debug)]
pub struct Mixer {
    channels: [Option<Voice>; CHANNELS],
    music: Option<Voice>,
    music_paused: bool,
    volume: u8,
}

impl Default for Mixer {
    fn default() -> Mixer {
        Mixer::new()
    }
}

impl Mixer {
    pub fn new() -> Mixer {
        Mixer {
            channels: Default::default(),
            music: None,
            music_paused: false,
            volume: MAX_VOLUME,
        }
    }

    /// Play `sound` on `channel`, or on the first free channel if `None`. The sound is repeated
    /// `loops` more times, -1 repeats forever. Returns the channel used or `None` if every
    /// channel is busy.
    pub fn play_channel(
        &mut self,
        channel: Option<usize>,
        sound: &Sound,
        loops: i32,
    ) -> Option<usize> {
        let channel = match channel {
            Some(c) if c < CHANNELS => c,
            Some(c) => {
                warn!("Invalid mixer channel {}", c);
                return None;
            }
            None => match self.channels.iter().position(Option::is_none) {
                Some(c) => c,
                None => {
                    warn!("No free mixer channel");
                    return None;
                }
            },
        };

        self.channels[channel] = Voice::new(sound, loops);
        Some(channel)
    }

    pub fn halt_channel(&mut self, channel: usize) {
        if let Some(c) = self.channels.get_mut(channel) {
            *c = None;
        }
    }

    pub fn playing(&self, channel: usize) -> bool {
        matches!(self.channels.get(channel), Some(Some(_)))
    }

    pub fn play_music(&mut self, sound: &Sound, loops: i32) {
        self.music = Voice::new(sound, loops);
        self.music_paused = false;
    }

    pub fn pause_music(&mut self) {
        if self.music.is_some() {
            self.music_paused = true;
        }
    }

    pub fn resume_music(&mut self) {
        self.music_paused = false;
    }

    pub fn halt_music(&mut self) {
        self.music = None;
        self.music_paused = false;
    }

    /// True while music is loaded, even if paused
    pub fn playing_music(&self) -> bool {
        self.music.is_some()
    }

    pub fn paused_music(&self) -> bool {
        self.music_paused
    }

    /// Master volume, clamped to `0..=MAX_VOLUME`
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_VOLUME);
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Produce `frames` stereo frames of interleaved output
    pub fn mix(&mut self, frames: usize) -> Vec<i16> {
        let mut acc = vec![0i32; frames * 2];

        let music = if self.music_paused {
            None
        } else {
            Some(&mut self.music)
        };

        for slot in self.channels.iter_mut().chain(music) {
            let Some(voice) = slot else {
                continue;
            };

            for frame in acc.chunks_exact_mut(2) {
                match voice.next_frame() {
                    Some((l, r)) => {
                        frame[0] += l as i32;
                        frame[1] += r as i32;
                    }
                    None => {
                        *slot = None;
                        break;
                    }
                }
            }
        }

        let volume = self.volume as i32;
        acc.into_iter()
            .map(|s| {
                (s * volume / MAX_VOLUME as i32).clamp(i16::MIN as i32, i16::MAX as i32) as i16
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SAMPLE_RATE;

    fn tone(value: i16, frames: usize) -> Sound {
        Sound::from_samples(1, SAMPLE_RATE, &vec![value; frames])
    }

    #[test]
    fn first_free_channel() {
        let mut m = Mixer::new();
        let s = tone(1, 4);
        for c in 0..CHANNELS {
            assert_eq!(m.play_channel(None, &s, 0), Some(c));
        }
        assert_eq!(m.play_channel(None, &s, 0), None);
        m.halt_channel(3);
        assert_eq!(m.play_channel(None, &s, 0), Some(3));
        assert_eq!(m.play_channel(Some(CHANNELS), &s, 0), None);
    }

    #[test]
    fn voices_are_summed_and_finish() {
        let mut m = Mixer::new();
        m.play_channel(None, &tone(100, 2), 0);
        m.play_channel(None, &tone(10, 3), 0);

        assert_eq!(m.mix(4), vec![110, 110, 110, 110, 10, 10, 0, 0]);
        assert!(!m.playing(0));
        assert!(!m.playing(1));
    }

    #[test]
    fn saturation_and_volume() {
        let mut m = Mixer::new();
        m.play_channel(None, &tone(30000, 1), 0);
        m.play_channel(None, &tone(30000, 1), 0);
        assert_eq!(m.mix(1), vec![i16::MAX, i16::MAX]);

        m.set_volume(200);
        assert_eq!(m.volume(), MAX_VOLUME);
        m.set_volume(64);
        m.play_channel(None, &tone(1000, 1), 0);
        assert_eq!(m.mix(1), vec![500, 500]);
    }

    #[test]
    fn music_state() {
        let mut m = Mixer::new();
        assert!(!m.playing_music());

        m.play_music(&tone(7, 2), -1);
        assert!(m.playing_music());
        assert_eq!(m.mix(3), vec![7; 6]);

        m.pause_music();
        assert!(m.paused_music());
        assert!(m.playing_music());
        assert_eq!(m.mix(1), vec![0, 0]);

        m.resume_music();
        assert_eq!(m.mix(1), vec![7, 7]);

        m.halt_music();
        assert!(!m.playing_music());
        assert!(!m.paused_music());
    }

    #[test]
    fn finite_loops() {
        let mut m = Mixer::new();
        m.play_channel(Some(2), &tone(1, 1), 2);
        assert_eq!(m.mix(4), vec![1, 1, 1, 1, 1, 1, 0, 0]);
    }
}
