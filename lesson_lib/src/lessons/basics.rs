//! Window, surfaces, textures and primitive drawing (lessons 1 to 9)

use super::{Context, Lesson, WindowSpec, SCREEN_HEIGHT, SCREEN_WIDTH, place};
use crate::assets::Assets;
use crate::error::LessonResult;
use crate::gfx::{Canvas, Color, Rect, Surface, Texture};
use crate::input::{InputEvent, Key};

/// Blue window closing itself after two seconds
pub struct HelloWindow {
    started: u64,
}

impl HelloWindow {
    const LIFETIME: u64 = 2000;

    pub fn new() -> HelloWindow {
        HelloWindow { started: 0 }
    }
}

impl Lesson for HelloWindow {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Hello window")
    }

    fn start(&mut self, ctx: &mut Context) -> LessonResult<()> {
        self.started = ctx.ticks;
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) {
        if ctx.ticks.saturating_sub(self.started) >= Self::LIFETIME {
            ctx.request_quit();
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        canvas.set_draw_color(Color::rgb(0x1f, 0x1f, 0xff));
        canvas.clear();
        Ok(())
    }
}

/// Single image shown until the window is closed, or for a fixed time
pub struct Picture {
    title: &'static str,
    image: Texture,
    stretch: bool,
    quit_after: Option<u64>,
    started: u64,
}

impl Picture {
    pub fn load(
        assets: &Assets,
        lesson: u32,
        file: &str,
        title: &'static str,
    ) -> LessonResult<Picture> {
        Ok(Picture {
            title,
            image: assets.texture(lesson, file)?,
            stretch: false,
            quit_after: None,
            started: 0,
        })
    }

    pub fn quit_after(mut self, ms: u64) -> Picture {
        self.quit_after = Some(ms);
        self
    }

    /// Scale the image to the whole window instead of drawing it at its own size
    pub fn stretched(mut self) -> Picture {
        self.stretch = true;
        self
    }
}

impl Lesson for Picture {
    fn window(&self) -> WindowSpec {
        WindowSpec::new(self.title)
    }

    fn start(&mut self, ctx: &mut Context) -> LessonResult<()> {
        self.started = ctx.ticks;
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) {
        if let Some(ms) = self.quit_after {
            if ctx.ticks.saturating_sub(self.started) >= ms {
                ctx.request_quit();
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        canvas.set_draw_color(Color::WHITE);
        canvas.clear();

        let dst = if self.stretch {
            None
        } else {
            Some(place(&self.image, 0, 0))
        };
        canvas.copy(&self.image, None, dst);

        Ok(())
    }
}

/// Shows a different image for each arrow key
pub struct KeyPresses {
    press: Texture,
    up: Texture,
    down: Texture,
    left: Texture,
    right: Texture,
    current: Option<Key>,
}

impl KeyPresses {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<KeyPresses> {
        Ok(KeyPresses {
            press: assets.texture(lesson, "press.png")?,
            up: assets.texture(lesson, "up.png")?,
            down: assets.texture(lesson, "down.png")?,
            left: assets.texture(lesson, "left.png")?,
            right: assets.texture(lesson, "right.png")?,
            current: None,
        })
    }

    fn current(&self) -> &Texture {
        match self.current {
            Some(Key::Up) => &self.up,
            Some(Key::Down) => &self.down,
            Some(Key::Left) => &self.left,
            Some(Key::Right) => &self.right,
            _ => &self.press,
        }
    }
}

impl Lesson for KeyPresses {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Key presses")
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        if let InputEvent::KeyDown { key, .. } = *event {
            match key {
                Key::Escape => ctx.request_quit(),
                Key::Up | Key::Down | Key::Left | Key::Right => self.current = Some(key),
                _ => self.current = None,
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let image = self.current();
        canvas.copy(image, None, Some(place(image, 0, 0)));
        Ok(())
    }
}

/// Image converted once to the screen size and blitted every frame
pub struct Stretched {
    screen: Texture,
}

impl Stretched {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<Stretched> {
        let image = assets.image(lesson, "stretch.png")?;

        let mut screen = Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        screen.blit_scaled(&image, None, None);

        Ok(Stretched {
            screen: Texture::from_surface(screen),
        })
    }
}

impl Lesson for Stretched {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Optimized surface loading and soft stretching")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        canvas.copy(&self.screen, None, None);
        Ok(())
    }
}

/// Filled and outlined rectangles, a line and a dotted line
pub struct Geometry;

impl Lesson for Geometry {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Geometry rendering")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let (w, h) = canvas.output_size();
        let (w, h) = (w as i32, h as i32);

        canvas.set_draw_color(Color::WHITE);
        canvas.clear();

        canvas.set_draw_color(Color::RED);
        canvas.fill_rect(Rect::new(w / 4, h / 4, w / 2, h / 2));

        canvas.set_draw_color(Color::BLUE);
        canvas.draw_rect(Rect::new(w / 6, h / 6, w * 2 / 3, h * 2 / 3));

        canvas.set_draw_color(Color::GREEN);
        canvas.draw_line(0, h / 2, w, h / 2);

        canvas.set_draw_color(Color::YELLOW);
        for y in (0..h).step_by(4) {
            canvas.draw_point(w / 2, y);
        }

        Ok(())
    }
}

/// The same image drawn in three viewports
pub struct Viewports {
    image: Texture,
}

impl Viewports {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<Viewports> {
        Ok(Viewports {
            image: assets.texture(lesson, "viewport.png")?,
        })
    }
}

impl Lesson for Viewports {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("The viewport")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let (w, h) = canvas.output_size();
        let (w, h) = (w as i32, h as i32);

        canvas.set_draw_color(Color::WHITE);
        canvas.clear();

        let viewports = [
            Rect::new(0, 0, w / 2, h / 2),
            Rect::new(w / 2, 0, w / 2, h / 2),
            Rect::new(0, h / 2, w, h / 2),
        ];
        for viewport in viewports {
            canvas.set_viewport(Some(viewport));
            canvas.copy(&self.image, None, None);
        }
        canvas.set_viewport(None);

        Ok(())
    }
}
