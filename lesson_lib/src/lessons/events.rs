//! Window manager events and timer callbacks (lessons 35 and 45)

use super::{Context, Lesson, WindowSpec, centered};
use crate::assets::Assets;
use crate::error::LessonResult;
use crate::gfx::{Canvas, Color, Texture};
use crate::input::InputEvent;
use crate::timing::{TimerId, TimerQueue};
use crate::widgets::WindowState;
use std::cell::Cell;
use std::rc::Rc;

/// Resizable window reporting focus changes in its caption. Alt+Return toggles fullscreen.
pub struct WindowEvents {
    image: Texture,
    state: WindowState,
}

impl WindowEvents {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<WindowEvents> {
        Ok(WindowEvents {
            image: assets.texture(lesson, "window.png")?,
            state: WindowState::new(super::SCREEN_WIDTH, super::SCREEN_HEIGHT),
        })
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }
}

impl Lesson for WindowEvents {
    fn window(&self) -> WindowSpec {
        WindowSpec::new(&self.state.caption()).resizable()
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        self.state.handle_event(event, ctx.host);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        if self.state.is_minimized() {
            return Ok(());
        }

        canvas.set_draw_color(Color::WHITE);
        canvas.clear();
        let dst = centered(&self.image, canvas);
        canvas.copy(&self.image, None, Some(dst));

        Ok(())
    }
}

/// Logs a message from a one shot timer three seconds after starting
pub struct TimerCallbacks {
    splash: Texture,
    timers: TimerQueue,
    timer: Option<TimerId>,
    fired: Rc<Cell<bool>>,
}

impl TimerCallbacks {
    const DELAY: u64 = 3000;

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<TimerCallbacks> {
        Ok(TimerCallbacks {
            splash: assets.texture(lesson, "splash.png")?,
            timers: TimerQueue::new(),
            timer: None,
            fired: Rc::new(Cell::new(false)),
        })
    }

    pub fn fired(&self) -> bool {
        self.fired.get()
    }
}

impl Lesson for TimerCallbacks {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Timer callbacks")
    }

    fn start(&mut self, ctx: &mut Context) -> LessonResult<()> {
        let fired = Rc::clone(&self.fired);
        let id = self.timers.add(ctx.ticks, Self::DELAY, move |_| {
            info!("Callback called back with message: 3 seconds waited!");
            fired.set(true);
            0
        });
        self.timer = Some(id);

        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) {
        self.timers.poll(ctx.ticks);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        canvas.set_draw_color(Color::WHITE);
        canvas.clear();
        canvas.copy(&self.splash, None, None);
        Ok(())
    }

    fn close(&mut self, _ctx: &mut Context) {
        if let Some(id) = self.timer.take() {
            self.timers.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Mixer;
    use crate::gfx::{Access, Surface};
    use crate::host::HeadlessHost;
    use crate::input::{KeyboardState, MouseState, WindowEvent};

    #[test]
    fn timer_fires_once_after_three_seconds() {
        let mut lesson = TimerCallbacks {
            splash: Texture::blank(4, 4, Access::Static),
            timers: TimerQueue::new(),
            timer: None,
            fired: Rc::new(Cell::new(false)),
        };
        let mut host = HeadlessHost::default();
        let mut mixer = Mixer::new();
        let keyboard = KeyboardState::new();

        let mut ctx = Context::new(1000, &mut host, &mut mixer, &keyboard, MouseState::default());
        lesson.start(&mut ctx).unwrap();

        ctx.ticks = 3999;
        lesson.update(&mut ctx);
        assert!(!lesson.fired());

        ctx.ticks = 4000;
        lesson.update(&mut ctx);
        assert!(lesson.fired());
        assert!(lesson.timers.is_empty());
    }

    #[test]
    fn minimized_window_is_not_drawn() {
        let mut lesson = WindowEvents {
            image: Texture::from_surface(Surface::filled(4, 4, Color::RED)),
            state: WindowState::new(640, 480),
        };
        let mut host = HeadlessHost::default();
        let mut mixer = Mixer::new();
        let keyboard = KeyboardState::new();
        let mut screen = Surface::filled(8, 8, Color::BLACK);

        let mut ctx = Context::new(0, &mut host, &mut mixer, &keyboard, MouseState::default());
        lesson.handle_event(&InputEvent::Window(WindowEvent::Minimized), &mut ctx);
        lesson
            .render(&mut Canvas::new(&mut screen), &mut ctx)
            .unwrap();
        assert_eq!(screen.pixel(4, 4), Some(Color::BLACK));

        lesson.handle_event(&InputEvent::Window(WindowEvent::Restored), &mut ctx);
        lesson
            .render(&mut Canvas::new(&mut screen), &mut ctx)
            .unwrap();
        assert_eq!(screen.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(screen.pixel(4, 4), Some(Color::RED));
    }
}
