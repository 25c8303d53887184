use super::*;
use crate::gfx::{Color, Surface};
use crate::host::HeadlessHost;

struct Harness {
    host: HeadlessHost,
    mixer: Mixer,
    keyboard: KeyboardState,
    screen: Surface,
}

impl Harness {
    fn new() -> Harness {
        Harness {
            host: HeadlessHost::default(),
            mixer: Mixer::new(),
            keyboard: KeyboardState::new(),
            screen: Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    fn start(&mut self, lesson: &mut dyn Lesson, ticks: u64) {
        let mut ctx = Context::new(
            ticks,
            &mut self.host,
            &mut self.mixer,
            &self.keyboard,
            MouseState::default(),
        );
        lesson.start(&mut ctx).unwrap();
    }

    /// Run one update and render, returns true if the lesson asked to quit
    fn frame(&mut self, lesson: &mut dyn Lesson, ticks: u64) -> bool {
        let mut ctx = Context::new(
            ticks,
            &mut self.host,
            &mut self.mixer,
            &self.keyboard,
            MouseState::default(),
        );
        lesson.update(&mut ctx);
        let mut canvas = Canvas::new(&mut self.screen);
        lesson.render(&mut canvas, &mut ctx).unwrap();
        ctx.quit_requested()
    }
}

#[test]
fn lesson_numbers() {
    assert_eq!(LessonId::from_number(1).unwrap(), LessonId::HelloWindow);
    assert_eq!(LessonId::from_number(45).unwrap(), LessonId::TimerCallbacks);

    for n in [0, 34, 36, 37, 46] {
        assert!(matches!(
            LessonId::from_number(n),
            Err(LessonError::UnknownLesson(m)) if m == n
        ));
    }

    for id in LessonId::ALL {
        assert_eq!(LessonId::from_number(id.number()).unwrap(), id);
    }
}

#[test]
fn window_spec_builders() {
    let spec = WindowSpec::new("Test").size(320, 200).uncapped().resizable();
    assert_eq!(spec.title, "Test");
    assert_eq!((spec.width, spec.height), (320, 200));
    assert_eq!(spec.frame_cap, None);
    assert!(spec.resizable);

    assert_eq!(WindowSpec::new("Test").frame_cap, Some(60));
}

#[test]
fn missing_media_fails_to_load() {
    let assets = Assets::new("/nonexistent/lesson/assets");

    assert!(create(LessonId::Image, &assets).is_err());
    assert!(create(LessonId::SoundEffects, &assets).is_err());
    // Nothing to load for these
    assert!(create(LessonId::HelloWindow, &assets).is_ok());
    assert!(create(LessonId::Geometry, &assets).is_ok());
}

#[test]
fn hello_window_quits_after_two_seconds() {
    let assets = Assets::new("/nonexistent");
    let mut lesson = create(LessonId::HelloWindow, &assets).unwrap();
    let mut h = Harness::new();

    h.start(lesson.as_mut(), 500);
    assert!(!h.frame(lesson.as_mut(), 500));
    assert!(!h.frame(lesson.as_mut(), 2499));
    assert_eq!(h.screen.pixel(0, 0), Some(Color::rgb(0x1f, 0x1f, 0xff)));

    assert!(h.frame(lesson.as_mut(), 2500));
}

#[test]
fn geometry() {
    let mut lesson = basics::Geometry;
    let mut h = Harness::new();

    h.frame(&mut lesson, 0);

    let s = &h.screen;
    assert_eq!(s.pixel(10, 10), Some(Color::WHITE));
    assert_eq!(s.pixel(200, 150), Some(Color::RED));
    // Outline corner
    assert_eq!(s.pixel(106, 80), Some(Color::BLUE));
    assert_eq!(s.pixel(10, 240), Some(Color::GREEN));
    // Dotted vertical line drawn last
    assert_eq!(s.pixel(320, 0), Some(Color::YELLOW));
    assert_eq!(s.pixel(320, 1), Some(Color::WHITE));
    assert_eq!(s.pixel(320, 240), Some(Color::YELLOW));
}

#[test]
fn render_to_texture_spins() {
    let mut lesson = pixels::RenderToTexture::new();
    let mut h = Harness::new();

    h.start(&mut lesson, 0);
    for _ in 0..180 {
        h.frame(&mut lesson, 0);
    }
    assert_eq!(lesson.angle(), 360.);
    assert_eq!(h.screen.pixel(200, 150), Some(Color::RED));

    h.frame(&mut lesson, 0);
    assert_eq!(lesson.angle(), 2.);
}

#[test]
fn placement_helpers() {
    let texture = Texture::blank(100, 50, crate::gfx::Access::Static);
    let mut screen = Surface::new(640, 480);
    let canvas = Canvas::new(&mut screen);

    assert_eq!(place(&texture, 3, 4), Rect::new(3, 4, 100, 50));
    assert_eq!(centered(&texture, &canvas), Rect::new(270, 215, 100, 50));
}
