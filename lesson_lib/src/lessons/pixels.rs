//! Direct pixel access: texture manipulation, streaming and render targets (lessons 40, 42, 43)

use super::{Context, Lesson, WindowSpec, SCREEN_HEIGHT, SCREEN_WIDTH, centered};
use crate::assets::Assets;
use crate::error::LessonResult;
use crate::gfx::{Access, Canvas, Color, Flip, Point, Rect, Texture};
use crate::widgets::DataStream;

/// Make every pixel of a streaming texture matching `key` transparent, going through
/// lock/unlock. Returns how many pixels were replaced.
pub(crate) fn key_out(texture: &mut Texture, key: Color) -> LessonResult<usize> {
    let transparent = Color::TRANSPARENT.to_argb8888();

    texture.lock()?;
    let mut replaced = 0;
    for p in texture.pixels_mut()?.iter_mut() {
        if Color::from_argb8888(*p).same_rgb(key) {
            *p = transparent;
            replaced += 1;
        }
    }
    texture.unlock()?;

    Ok(replaced)
}

fn clear_white(canvas: &mut Canvas) {
    canvas.set_draw_color(Color::WHITE);
    canvas.clear();
}

pub struct TextureManipulation {
    foo: Texture,
}

impl TextureManipulation {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<TextureManipulation> {
        let mut foo = assets.streaming_texture(lesson, "foo.png")?;
        let keyed = key_out(&mut foo, Color::CYAN)?;
        debug!("{} pixels keyed out", keyed);

        Ok(TextureManipulation { foo })
    }
}

impl Lesson for TextureManipulation {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Texture manipulation")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        let dst = centered(&self.foo, canvas);
        canvas.copy(&self.foo, None, Some(dst));
        Ok(())
    }
}

/// Walk cycle fed frame by frame from a fake video source into a streaming texture
pub struct TextureStreaming {
    stream: DataStream,
    texture: Texture,
}

impl TextureStreaming {
    const FRAMES: usize = 4;

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<TextureStreaming> {
        let frames = (0..Self::FRAMES)
            .map(|i| assets.image(lesson, &format!("foo_walk_{i}.png")))
            .collect::<LessonResult<Vec<_>>>()?;

        let (w, h) = frames
            .first()
            .map(|f| (f.width(), f.height()))
            .unwrap_or((0, 0));

        Ok(TextureStreaming {
            stream: DataStream::new(frames),
            texture: Texture::blank(w, h, Access::Streaming),
        })
    }

    fn stream_frame(&mut self) -> LessonResult<()> {
        let Some(pixels) = self.stream.buffer() else {
            return Ok(());
        };

        self.texture.lock()?;
        let copied = self.texture.copy_pixels(pixels);
        self.texture.unlock()?;

        copied
    }
}

impl Lesson for TextureStreaming {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Texture streaming")
    }

    fn update(&mut self, _ctx: &mut Context) {
        if let Err(e) = self.stream_frame() {
            warn!("Can't stream frame: {}", e);
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        let dst = centered(&self.texture, canvas);
        canvas.copy(&self.texture, None, Some(dst));
        Ok(())
    }
}

/// Scene drawn into a texture which is then spun around the middle of the screen
pub struct RenderToTexture {
    target: Texture,
    angle: f64,
}

impl RenderToTexture {
    pub fn new() -> RenderToTexture {
        RenderToTexture {
            target: Texture::blank(SCREEN_WIDTH, SCREEN_HEIGHT, Access::Target),
            angle: 0.,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    fn draw_scene(&mut self) -> LessonResult<()> {
        let mut canvas = Canvas::for_texture(&mut self.target)?;
        let (w, h) = canvas.output_size();
        let (w, h) = (w as i32, h as i32);

        clear_white(&mut canvas);

        canvas.set_draw_color(Color::RED);
        canvas.fill_rect(Rect::new(w / 4, h / 4, w / 2, h / 2));

        canvas.set_draw_color(Color::GREEN);
        canvas.draw_rect(Rect::new(w / 6, h / 6, w * 2 / 3, h * 2 / 3));

        canvas.set_draw_color(Color::BLUE);
        canvas.draw_line(0, h / 2, w, h / 2);

        canvas.set_draw_color(Color::YELLOW);
        for y in (0..h).step_by(4) {
            canvas.draw_point(w / 2, y);
        }

        Ok(())
    }
}

impl Lesson for RenderToTexture {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Render to texture")
    }

    fn update(&mut self, _ctx: &mut Context) {
        self.angle += 2.;
        if self.angle > 360. {
            self.angle -= 360.;
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        self.draw_scene()?;

        let (w, h) = canvas.output_size();
        let center = Point::new(w as i32 / 2, h as i32 / 2);
        let dst = Rect::new(0, 0, self.target.width() as i32, self.target.height() as i32);

        clear_white(canvas);
        canvas.copy_ex(&self.target, None, Some(dst), self.angle, Some(center), Flip::None);

        Ok(())
    }
}
