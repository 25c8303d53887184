//! Headless core of the lesson gallery
//!
//! Every lesson draws into a software framebuffer and mixes its audio in memory, the frontend only
//! has to forward platform events, show the frame and queue the samples.

// Pixel and tile code indexes a lot of parallel arrays
#![allow(clippy::needless_range_loop)]
// Most casts here convert between pixel coordinates and sizes
#![allow(clippy::cast_lossless)]
// Several lessons only have an argument-less `new`
#![allow(clippy::new_without_default)]

#[macro_use]
extern crate log;

pub mod assets;
pub mod audio;
pub mod error;
pub mod gfx;
pub mod host;
pub mod input;
pub mod lessons;
pub mod particles;
pub mod physics;
pub mod save_data;
pub mod text;
pub mod tiles;
pub mod timing;
pub mod widgets;

pub use assets::Assets;
pub use error::{LessonError, LessonResult};
pub use gfx::Surface;
pub use host::{HeadlessHost, Host};
pub use input::{InputEvent, Key, KeyMod, MouseButton, WindowEvent};
pub use lessons::{LessonId, WindowSpec};

use audio::Mixer;
use gfx::Canvas;
use input::{KeyboardState, MouseState};
use lessons::{Context, Lesson};

/// Runs one lesson: owns it along with the framebuffer it renders to, the mixer and input state
pub struct Runtime {
    id: LessonId,
    lesson: Box<dyn Lesson>,
    /// Framebuffer, always the size of the window's drawable area
    frame: Surface,
    mixer: Mixer,
    keyboard: KeyboardState,
    mouse: MouseState,
    running: bool,
    closed: bool,
}

impl Runtime {
    /// Build lesson `id`, loading all of its media from `assets`
    pub fn new(id: LessonId, assets: &Assets) -> LessonResult<Runtime> {
        let lesson = lessons::create(id, assets)?;
        let spec = lesson.window();

        Ok(Runtime {
            id,
            lesson,
            frame: Surface::new(spec.width, spec.height),
            mixer: Mixer::new(),
            keyboard: KeyboardState::new(),
            mouse: MouseState::default(),
            running: true,
            closed: false,
        })
    }

    pub fn id(&self) -> LessonId {
        self.id
    }

    pub fn window(&self) -> WindowSpec {
        self.lesson.window()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.mixer.set_volume(volume);
    }

    /// Last rendered frame
    pub fn frame(&self) -> &Surface {
        &self.frame
    }

    pub fn start(&mut self, ticks: u64, host: &mut dyn Host) -> LessonResult<()> {
        let mut ctx = Context::new(
            ticks,
            host,
            &mut self.mixer,
            &self.keyboard,
            self.mouse,
        );

        let res = self.lesson.start(&mut ctx);
        if ctx.quit_requested() || res.is_err() {
            self.running = false;
        }

        res
    }

    pub fn handle_event(&mut self, event: &InputEvent, ticks: u64, host: &mut dyn Host) {
        match *event {
            InputEvent::Quit => {
                debug!("Quit requested");
                self.running = false;
            }
            InputEvent::Window(WindowEvent::Resized(w, h)) => {
                self.frame.resize(w, h);
            }
            _ => (),
        }

        self.keyboard.handle_event(event);
        self.mouse.handle_event(event);

        let mut ctx = Context::new(
            ticks,
            host,
            &mut self.mixer,
            &self.keyboard,
            self.mouse,
        );
        self.lesson.handle_event(event, &mut ctx);

        if ctx.quit_requested() {
            self.running = false;
        }
    }

    /// Update the lesson and render a new frame
    pub fn run_frame(&mut self, ticks: u64, host: &mut dyn Host) -> LessonResult<&Surface> {
        let mut ctx = Context::new(
            ticks,
            host,
            &mut self.mixer,
            &self.keyboard,
            self.mouse,
        );

        self.lesson.update(&mut ctx);

        let mut canvas = Canvas::new(&mut self.frame);
        self.lesson.render(&mut canvas, &mut ctx)?;

        if ctx.quit_requested() {
            self.running = false;
        }

        Ok(&self.frame)
    }

    /// Mix `frames` stereo frames of audio, interleaved
    pub fn mix_audio(&mut self, frames: usize) -> Vec<i16> {
        self.mixer.mix(frames)
    }

    /// Let the lesson release what it holds. Only the first call does anything.
    pub fn close(&mut self, ticks: u64, host: &mut dyn Host) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.running = false;

        let mut ctx = Context::new(
            ticks,
            host,
            &mut self.mixer,
            &self.keyboard,
            self.mouse,
        );
        self.lesson.close(&mut ctx);

        info!("Lesson {:02} closed", self.id.number());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfx::Color;

    fn runtime(id: LessonId) -> Runtime {
        Runtime::new(id, &Assets::new("/nonexistent")).unwrap()
    }

    #[test]
    fn frame_matches_window() {
        let rt = runtime(LessonId::Geometry);
        let spec = rt.window();
        assert_eq!((rt.frame().width(), rt.frame().height()), (spec.width, spec.height));
    }

    #[test]
    fn quit_event_stops() {
        let mut host = HeadlessHost::default();
        let mut rt = runtime(LessonId::Geometry);

        rt.start(0, &mut host).unwrap();
        assert!(rt.is_running());

        rt.handle_event(&InputEvent::Quit, 10, &mut host);
        assert!(!rt.is_running());
    }

    #[test]
    fn resize_resizes_the_frame() {
        let mut host = HeadlessHost::default();
        let mut rt = runtime(LessonId::Geometry);

        rt.handle_event(&InputEvent::Window(WindowEvent::Resized(320, 200)), 0, &mut host);
        let frame = rt.run_frame(0, &mut host).unwrap();
        assert_eq!((frame.width(), frame.height()), (320, 200));
        // Geometry scales with the window
        assert_eq!(frame.pixel(100, 60), Some(Color::RED));
    }

    #[test]
    fn lesson_quit_stops_runtime() {
        let mut host = HeadlessHost::default();
        let mut rt = runtime(LessonId::HelloWindow);

        rt.start(0, &mut host).unwrap();
        rt.run_frame(1000, &mut host).unwrap();
        assert!(rt.is_running());
        rt.run_frame(2000, &mut host).unwrap();
        assert!(!rt.is_running());
    }

    #[test]
    fn held_keys_are_tracked() {
        let mut host = HeadlessHost::default();
        let mut rt = runtime(LessonId::Geometry);

        rt.handle_event(
            &InputEvent::KeyDown {
                key: Key::Char('w'),
                keymod: KeyMod::NONE,
                repeat: false,
            },
            0,
            &mut host,
        );
        assert!(rt.keyboard.is_pressed(Key::Char('w')));
    }

    #[test]
    fn silence_when_nothing_plays() {
        let mut rt = runtime(LessonId::Geometry);
        let samples = rt.mix_audio(64);
        assert_eq!(samples.len(), 128);
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn close_runs_once() {
        let mut host = HeadlessHost::default();
        let mut rt = runtime(LessonId::Geometry);

        rt.close(0, &mut host);
        assert!(rt.closed);
        assert!(!rt.is_running());
        rt.close(1, &mut host);
    }
}
