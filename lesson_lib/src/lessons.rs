//! The lessons themselves
//!
//! Every lesson implements [`Lesson`]. A [`Runtime`](crate::Runtime) owns one, feeds it events,
//! lets it update once per frame and hands it a canvas over the framebuffer to draw into.
//! Anything a lesson needs from the outside world (ticks, the mixer, held keys, the window) goes
//! through [`Context`].

mod basics;
mod devices;
mod events;
mod motion;
mod pixels;
mod text;
mod textures;

use crate::assets::Assets;
use crate::audio::Mixer;
use crate::error::{LessonError, LessonResult};
use crate::gfx::{Canvas, Rect, Texture};
use crate::host::Host;
use crate::input::{InputEvent, KeyboardState, MouseState};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// Window a lesson wants to be shown in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Frames per second the main loop is held to, unbounded if `None`
    pub frame_cap: Option<u32>,
    pub resizable: bool,
}

impl WindowSpec {
    pub fn new(title: &str) -> WindowSpec {
        WindowSpec {
            title: title.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            frame_cap: Some(60),
            resizable: false,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> WindowSpec {
        self.width = width;
        self.height = height;
        self
    }

    pub fn uncapped(mut self) -> WindowSpec {
        self.frame_cap = None;
        self
    }

    pub fn resizable(mut self) -> WindowSpec {
        self.resizable = true;
        self
    }
}

/// What a lesson gets to see of the world while handling an event, updating or rendering
pub struct Context<'a> {
    /// Milliseconds since the frontend started
    pub ticks: u64,
    pub host: &'a mut dyn Host,
    pub mixer: &'a mut Mixer,
    pub keyboard: &'a KeyboardState,
    pub mouse: MouseState,
    quit: bool,
}

impl<'a> Context<'a> {
    pub fn new(
        ticks: u64,
        host: &'a mut dyn Host,
        mixer: &'a mut Mixer,
        keyboard: &'a KeyboardState,
        mouse: MouseState,
    ) -> Context<'a> {
        Context {
            ticks,
            host,
            mixer,
            keyboard,
            mouse,
            quit: false,
        }
    }

    /// Ask the runtime to leave the main loop after the current step
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

pub trait Lesson {
    fn window(&self) -> WindowSpec;

    /// Called once before the first event is delivered
    fn start(&mut self, _ctx: &mut Context) -> LessonResult<()> {
        Ok(())
    }

    fn handle_event(&mut self, _event: &InputEvent, _ctx: &mut Context) {}

    /// Called once per frame, before `render`
    fn update(&mut self, _ctx: &mut Context) {}

    fn render(&mut self, canvas: &mut Canvas, ctx: &mut Context) -> LessonResult<()>;

    /// Called once when the main loop is over, even if `start` failed
    fn close(&mut self, _ctx: &mut Context) {}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, FromPrimitive)]
pub enum LessonId {
    HelloWindow = 1,
    Image = 2,
    EventDriven = 3,
    KeyPresses = 4,
    StretchedImage = 5,
    PngImage = 6,
    TextureLoading = 7,
    Geometry = 8,
    Viewports = 9,
    ColorKeying = 10,
    ClipRendering = 11,
    ColorModulation = 12,
    AlphaBlending = 13,
    AnimatedSprite = 14,
    RotationFlipping = 15,
    TrueTypeFonts = 16,
    MouseEvents = 17,
    KeyStates = 18,
    Joysticks = 19,
    ForceFeedback = 20,
    SoundEffects = 21,
    Timing = 22,
    AdvancedTimers = 23,
    FrameRate = 24,
    CappedFrameRate = 25,
    Motion = 26,
    Collision = 27,
    PerPixelCollision = 28,
    CircularCollision = 29,
    Scrolling = 30,
    ScrollingBackground = 31,
    TextInput = 32,
    FileIo = 33,
    WindowEvents = 35,
    Particles = 38,
    Tiling = 39,
    TextureManipulation = 40,
    BitmapFonts = 41,
    TextureStreaming = 42,
    RenderToTexture = 43,
    FrameIndependentMovement = 44,
    TimerCallbacks = 45,
}

impl LessonId {
    pub const ALL: [LessonId; 42] = [
        LessonId::HelloWindow,
        LessonId::Image,
        LessonId::EventDriven,
        LessonId::KeyPresses,
        LessonId::StretchedImage,
        LessonId::PngImage,
        LessonId::TextureLoading,
        LessonId::Geometry,
        LessonId::Viewports,
        LessonId::ColorKeying,
        LessonId::ClipRendering,
        LessonId::ColorModulation,
        LessonId::AlphaBlending,
        LessonId::AnimatedSprite,
        LessonId::RotationFlipping,
        LessonId::TrueTypeFonts,
        LessonId::MouseEvents,
        LessonId::KeyStates,
        LessonId::Joysticks,
        LessonId::ForceFeedback,
        LessonId::SoundEffects,
        LessonId::Timing,
        LessonId::AdvancedTimers,
        LessonId::FrameRate,
        LessonId::CappedFrameRate,
        LessonId::Motion,
        LessonId::Collision,
        LessonId::PerPixelCollision,
        LessonId::CircularCollision,
        LessonId::Scrolling,
        LessonId::ScrollingBackground,
        LessonId::TextInput,
        LessonId::FileIo,
        LessonId::WindowEvents,
        LessonId::Particles,
        LessonId::Tiling,
        LessonId::TextureManipulation,
        LessonId::BitmapFonts,
        LessonId::TextureStreaming,
        LessonId::RenderToTexture,
        LessonId::FrameIndependentMovement,
        LessonId::TimerCallbacks,
    ];

    pub fn from_number(number: u32) -> LessonResult<LessonId> {
        LessonId::from_u32(number).ok_or(LessonError::UnknownLesson(number))
    }

    /// Lesson number, also the name of its asset directory
    pub fn number(self) -> u32 {
        self as u32
    }
}

/// Build a lesson, loading all of its media
pub fn create(id: LessonId, assets: &Assets) -> LessonResult<Box<dyn Lesson>> {
    let n = id.number();

    info!("Loading lesson {:02} ({:?})", n, id);

    let lesson: Box<dyn Lesson> = match id {
        LessonId::HelloWindow => Box::new(basics::HelloWindow::new()),
        LessonId::Image => Box::new(
            basics::Picture::load(assets, n, "hello_world.png", "Image on screen")?
                .quit_after(2000),
        ),
        LessonId::EventDriven => Box::new(basics::Picture::load(
            assets,
            n,
            "x.png",
            "Event driven programming",
        )?),
        LessonId::KeyPresses => Box::new(basics::KeyPresses::load(assets, n)?),
        LessonId::StretchedImage => Box::new(basics::Stretched::load(assets, n)?),
        LessonId::PngImage => Box::new(basics::Picture::load(
            assets,
            n,
            "loaded.png",
            "Loading PNG images",
        )?),
        LessonId::TextureLoading => Box::new(
            basics::Picture::load(assets, n, "texture.png", "Texture loading and rendering")?
                .stretched(),
        ),
        LessonId::Geometry => Box::new(basics::Geometry),
        LessonId::Viewports => Box::new(basics::Viewports::load(assets, n)?),
        LessonId::ColorKeying => Box::new(textures::ColorKeying::load(assets, n)?),
        LessonId::ClipRendering => Box::new(textures::ClipRendering::load(assets, n)?),
        LessonId::ColorModulation => Box::new(textures::ColorModulation::load(assets, n)?),
        LessonId::AlphaBlending => Box::new(textures::AlphaBlending::load(assets, n)?),
        LessonId::AnimatedSprite => Box::new(textures::AnimatedSprite::load(assets, n)?),
        LessonId::RotationFlipping => Box::new(textures::RotationFlipping::load(assets, n)?),
        LessonId::TrueTypeFonts => Box::new(text::TrueTypeFont::load(assets, n)?),
        LessonId::MouseEvents => Box::new(devices::MouseEvents::load(assets, n)?),
        LessonId::KeyStates => Box::new(devices::KeyStates::load(assets, n)?),
        LessonId::Joysticks => Box::new(devices::JoystickArrow::load(assets, n)?),
        LessonId::ForceFeedback => Box::new(devices::ForceFeedback::load(assets, n)?),
        LessonId::SoundEffects => Box::new(devices::SoundEffects::load(assets, n)?),
        LessonId::Timing => Box::new(text::Timing::load(assets, n)?),
        LessonId::AdvancedTimers => Box::new(text::AdvancedTimers::load(assets, n)?),
        LessonId::FrameRate => Box::new(text::FrameRate::load(assets, n, None)?),
        LessonId::CappedFrameRate => Box::new(text::FrameRate::load(assets, n, Some(60))?),
        LessonId::Motion => Box::new(motion::Motion::load(assets, n, false)?),
        LessonId::Collision => Box::new(motion::Motion::load(assets, n, true)?),
        LessonId::PerPixelCollision => Box::new(motion::PerPixelCollision::load(assets, n)?),
        LessonId::CircularCollision => Box::new(motion::CircularCollision::load(assets, n)?),
        LessonId::Scrolling => Box::new(motion::Scrolling::load(assets, n)?),
        LessonId::ScrollingBackground => Box::new(motion::ScrollingBackdrop::load(assets, n)?),
        LessonId::TextInput => Box::new(text::TextInput::load(assets, n)?),
        LessonId::FileIo => Box::new(text::FileIo::load(assets, n)?),
        LessonId::WindowEvents => Box::new(events::WindowEvents::load(assets, n)?),
        LessonId::Particles => Box::new(motion::Particles::load(assets, n)?),
        LessonId::Tiling => Box::new(motion::Tiling::load(assets, n)?),
        LessonId::TextureManipulation => Box::new(pixels::TextureManipulation::load(assets, n)?),
        LessonId::BitmapFonts => Box::new(text::BitmapText::load(assets, n)?),
        LessonId::TextureStreaming => Box::new(pixels::TextureStreaming::load(assets, n)?),
        LessonId::RenderToTexture => Box::new(pixels::RenderToTexture::new()),
        LessonId::FrameIndependentMovement => {
            Box::new(motion::FrameIndependent::load(assets, n)?)
        }
        LessonId::TimerCallbacks => Box::new(events::TimerCallbacks::load(assets, n)?),
    };

    Ok(lesson)
}

/// Destination rectangle for drawing `texture` unscaled at `(x, y)`
pub(crate) fn place(texture: &Texture, x: i32, y: i32) -> Rect {
    Rect::new(x, y, texture.width() as i32, texture.height() as i32)
}

/// Destination rectangle for drawing `texture` unscaled in the middle of the canvas
pub(crate) fn centered(texture: &Texture, canvas: &Canvas) -> Rect {
    let (w, h) = canvas.output_size();
    place(
        texture,
        (w as i32 - texture.width() as i32) / 2,
        (h as i32 - texture.height() as i32) / 2,
    )
}

#[cfg(test)]
mod tests;
