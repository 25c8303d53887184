use crate::gfx::{Rect, Surface};

/// Cycles through a list of clips, holding each one for a number of ticks
#[derive(Clone, Debug)]
pub struct Animation {
    clips: Vec<Rect>,
    ticks_per_clip: usize,
    counter: usize,
}

impl Animation {
    pub fn new(clips: Vec<Rect>, ticks_per_clip: usize) -> Animation {
        Animation {
            clips,
            ticks_per_clip: ticks_per_clip.max(1),
            counter: 0,
        }
    }

    /// Move one tick forward, wrapping after the last clip
    pub fn tick(&mut self) {
        self.counter += 1;
        if self.counter / self.ticks_per_clip >= self.clips.len() {
            self.counter = 0;
        }
    }

    pub fn index(&self) -> usize {
        self.counter / self.ticks_per_clip
    }

    pub fn clip(&self) -> Rect {
        self.clips.get(self.index()).copied().unwrap_or_default()
    }
}

/// Fake video source handing out a new frame every few calls
pub struct DataStream {
    frames: Vec<Surface>,
    current: usize,
    delay: u32,
}

impl DataStream {
    /// Calls between two frame changes
    const DELAY: u32 = 4;

    pub fn new(frames: Vec<Surface>) -> DataStream {
        DataStream {
            frames,
            current: 0,
            delay: Self::DELAY,
        }
    }

    /// Pixels of the current frame, `None` if there are no frames
    pub fn buffer(&mut self) -> Option<&[u32]> {
        if self.frames.is_empty() {
            return None;
        }

        self.delay -= 1;
        if self.delay == 0 {
            self.current += 1;
            self.delay = Self::DELAY;
        }
        if self.current >= self.frames.len() {
            self.current = 0;
        }

        Some(self.frames[self.current].pixels())
    }

    pub fn current(&self) -> usize {
        self.current
    }
}
