use std::thread;
use std::time::{Duration, Instant};
use lesson_lib::timing::FrameCap;
use lesson_lib::{Assets, InputEvent, LessonId, Runtime};
use tracing::{info, warn};
use crate::config::Config;
use crate::error::AppResult;
use crate::sdl;
use crate::sdl::audio::stream::Stream;
use crate::sdl::host::Platform;
use crate::sdl::input::JoystickMap;
use crate::sdl::wnd::canvas::{self, Canvas};

/// Stereo frames kept queued on the audio device
const AUDIO_LATENCY: usize = 2048;

pub struct App {
    runtime: Runtime,
    // Field order matters: SDL objects must go before the context
    event_pump: sdl::evt::EventPump,
    wnd: sdl::wnd::Window,
    platform: Platform,
    audio: Option<Stream>,
    _ctx: sdl::Context,
}

impl App {
    /// Load the configured lesson then open a window for it
    pub fn new(config: &Config) -> AppResult<Self> {
        let id = LessonId::from_number(config.lesson)?;
        let assets = Assets::new(&config.assets);
        let mut runtime = Runtime::new(id, &assets)?;
        runtime.set_volume(config.volume);

        let ctx = sdl::Context::new()?;
        let spec = runtime.window();
        let wnd = sdl::wnd::Window::new(&ctx, &spec)?;
        let event_pump = sdl::evt::EventPump::new(&ctx)?;
        let joysticks = JoystickMap::new(&ctx)?;
        let platform = Platform::new(wnd.wnd().clone(), ctx.video().clone(), joysticks);

        let audio = if config.audio_enabled {
            match open_audio(&ctx) {
                Ok(stream) => Some(stream),
                Err(e) => {
                    warn!("Running without sound: {}", e);
                    None
                }
            }
        } else {
            None
        };

        info!("Running lesson {:02} \"{}\"", id.number(), spec.title);

        Ok(App {
            runtime,
            event_pump,
            wnd,
            platform,
            audio,
            _ctx: ctx,
        })
    }

    /// Run the lesson until it quits. The lesson is closed whatever happens.
    pub fn run(&mut self) -> AppResult<()> {
        let start = Instant::now();

        let res = self.main_loop(start);
        self.runtime.close(ticks(start), &mut self.platform);

        res
    }

    fn main_loop(&mut self, start: Instant) -> AppResult<()> {
        self.runtime.start(ticks(start), &mut self.platform)?;

        let mut canvas = Canvas::from(&self.wnd);
        let texture_creator = canvas.texture_creator();

        let (mut width, mut height) = (self.runtime.frame().width(), self.runtime.frame().height());
        let mut texture = canvas::frame_texture(&texture_creator, width, height)?;

        let cap = self.runtime.window().frame_cap.map(FrameCap::new);

        // Main loop
        while self.runtime.is_running() {
            let frame_start = Instant::now();

            for event in self.event_pump.poll() {
                match event {
                    InputEvent::JoyAdded(which) => self.platform.joysticks.open(which),
                    InputEvent::JoyRemoved(which) => self.platform.joysticks.close(which),
                    _ => (),
                }

                self.runtime.handle_event(&event, ticks(start), &mut self.platform);
            }

            if !self.runtime.is_running() {
                break;
            }

            let frame = self.runtime.run_frame(ticks(start), &mut self.platform)?;

            if frame.width() != width || frame.height() != height {
                width = frame.width();
                height = frame.height();
                texture = canvas::frame_texture(&texture_creator, width, height)?;
            }

            canvas.present_frame(&mut texture, frame)?;

            self.queue_audio()?;

            // Frame timing
            if let Some(cap) = cap {
                let elapsed = frame_start.elapsed().as_millis() as u64;
                let delay = cap.delay(elapsed);
                if delay > 0 {
                    thread::sleep(Duration::from_millis(delay));
                }
            }
        }

        Ok(())
    }

    fn queue_audio(&mut self) -> AppResult<()> {
        let Some(stream) = self.audio.as_mut() else {
            return Ok(());
        };

        let queued = stream.queued_frames();
        if queued < AUDIO_LATENCY {
            let samples = self.runtime.mix_audio(AUDIO_LATENCY - queued);
            stream.play(&samples)?;
        }

        Ok(())
    }
}

// Audio stream: must be created and used in main thread
fn open_audio(ctx: &sdl::Context) -> AppResult<Stream> {
    let device = sdl::audio::Device::new(ctx)?;
    let mut stream = Stream::new(&device)?;
    stream.resume()?;
    Ok(stream)
}

/// Milliseconds since `start`
fn ticks(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
