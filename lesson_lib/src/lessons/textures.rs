//! Texture state: keying, clipping, modulation, blending, animation and rotation
//! (lessons 10 to 15)

use super::{Context, Lesson, WindowSpec, centered, place};
use crate::assets::Assets;
use crate::error::LessonResult;
use crate::gfx::{BlendMode, Canvas, Color, Flip, Rect, Texture};
use crate::input::{InputEvent, Key};
use crate::widgets::Animation;

fn clear_white(canvas: &mut Canvas) {
    canvas.set_draw_color(Color::WHITE);
    canvas.clear();
}

pub struct ColorKeying {
    background: Texture,
    foo: Texture,
}

impl ColorKeying {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<ColorKeying> {
        Ok(ColorKeying {
            background: assets.texture(lesson, "background.png")?,
            foo: assets.texture_keyed(lesson, "foo.png", Color::CYAN)?,
        })
    }
}

impl Lesson for ColorKeying {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Color keying")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        canvas.copy(&self.background, None, Some(place(&self.background, 0, 0)));
        canvas.copy(&self.foo, None, Some(place(&self.foo, 240, 190)));
        Ok(())
    }
}

/// Four dots cut out of one sprite sheet, one per corner
pub struct ClipRendering {
    sheet: Texture,
    clips: [Rect; 4],
}

impl ClipRendering {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<ClipRendering> {
        Ok(ClipRendering {
            sheet: assets.texture_keyed(lesson, "dots.png", Color::CYAN)?,
            clips: [
                Rect::new(0, 0, 100, 100),
                Rect::new(100, 0, 100, 100),
                Rect::new(0, 100, 100, 100),
                Rect::new(100, 100, 100, 100),
            ],
        })
    }
}

impl Lesson for ClipRendering {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Clip rendering and sprite sheets")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let (w, h) = canvas.output_size();
        let (w, h) = (w as i32, h as i32);

        clear_white(canvas);

        let [top_left, top_right, bottom_left, bottom_right] = self.clips;
        let corners = [
            (top_left, 0, 0),
            (top_right, w - top_right.w, 0),
            (bottom_left, 0, h - bottom_left.h),
            (bottom_right, w - bottom_right.w, h - bottom_right.h),
        ];
        for (clip, x, y) in corners {
            canvas.copy(&self.sheet, Some(clip), Some(Rect::new(x, y, clip.w, clip.h)));
        }

        Ok(())
    }
}

/// Q/W/E raise red, green and blue, A/S/D lower them. Components wrap around.
pub struct ColorModulation {
    texture: Texture,
    r: u8,
    g: u8,
    b: u8,
}

impl ColorModulation {
    const STEP: u8 = 32;

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<ColorModulation> {
        Ok(ColorModulation {
            texture: assets.texture(lesson, "colors.png")?,
            r: 0xff,
            g: 0xff,
            b: 0xff,
        })
    }
}

impl Lesson for ColorModulation {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Color modulation")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        if let InputEvent::KeyDown {
            key: Key::Char(c), ..
        } = *event
        {
            match c {
                'q' => self.r = self.r.wrapping_add(Self::STEP),
                'w' => self.g = self.g.wrapping_add(Self::STEP),
                'e' => self.b = self.b.wrapping_add(Self::STEP),
                'a' => self.r = self.r.wrapping_sub(Self::STEP),
                's' => self.g = self.g.wrapping_sub(Self::STEP),
                'd' => self.b = self.b.wrapping_sub(Self::STEP),
                _ => (),
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        self.texture.set_color(self.r, self.g, self.b);
        canvas.copy(&self.texture, None, Some(place(&self.texture, 0, 0)));
        Ok(())
    }
}

/// W/S fade the front image in and out over the back one
pub struct AlphaBlending {
    back: Texture,
    front: Texture,
    alpha: u8,
}

impl AlphaBlending {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<AlphaBlending> {
        let mut front = assets.texture_keyed(lesson, "fadeout.png", Color::CYAN)?;
        front.set_blend_mode(BlendMode::Blend);

        Ok(AlphaBlending {
            back: assets.texture_keyed(lesson, "fadein.png", Color::CYAN)?,
            front,
            alpha: 0xff,
        })
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }
}

impl Lesson for AlphaBlending {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Alpha blending")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        match *event {
            InputEvent::KeyDown {
                key: Key::Char('w'),
                ..
            } => self.alpha = self.alpha.saturating_add(32),
            InputEvent::KeyDown {
                key: Key::Char('s'),
                ..
            } => self.alpha = self.alpha.saturating_sub(32),
            _ => (),
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        self.front.set_alpha(self.alpha);
        canvas.copy(&self.back, None, Some(place(&self.back, 0, 0)));
        canvas.copy(&self.front, None, Some(place(&self.front, 0, 0)));
        Ok(())
    }
}

/// Four frame walk cycle, each frame held for six rendered frames
pub struct AnimatedSprite {
    sheet: Texture,
    walk: Animation,
}

impl AnimatedSprite {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<AnimatedSprite> {
        let clips = vec![
            Rect::new(0, 0, 64, 205),
            Rect::new(64, 0, 64, 205),
            Rect::new(128, 0, 64, 205),
            Rect::new(196, 0, 64, 205),
        ];

        Ok(AnimatedSprite {
            sheet: assets.texture_keyed(lesson, "foo.png", Color::CYAN)?,
            walk: Animation::new(clips, 6),
        })
    }
}

impl Lesson for AnimatedSprite {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Animated sprites and vsync")
    }

    fn update(&mut self, _ctx: &mut Context) {
        self.walk.tick();
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let (w, h) = canvas.output_size();
        let clip = self.walk.clip();

        clear_white(canvas);
        let dst = Rect::new(
            (w as i32 - clip.w) / 2,
            (h as i32 - clip.h) / 2,
            clip.w,
            clip.h,
        );
        canvas.copy(&self.sheet, Some(clip), Some(dst));

        Ok(())
    }
}

/// A/D rotate the arrow, Q/W/E/S pick the mirroring
pub struct RotationFlipping {
    arrow: Texture,
    angle: f64,
    flip: Flip,
}

impl RotationFlipping {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<RotationFlipping> {
        Ok(RotationFlipping {
            arrow: assets.texture_keyed(lesson, "arrow.png", Color::CYAN)?,
            angle: 0.,
            flip: Flip::None,
        })
    }
}

impl Lesson for RotationFlipping {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Rotation and flipping")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        if let InputEvent::KeyDown {
            key: Key::Char(c), ..
        } = *event
        {
            match c {
                'a' => self.angle -= 32.,
                'd' => self.angle += 32.,
                'q' => self.flip = Flip::Horizontal,
                'w' => self.flip = Flip::None,
                'e' => self.flip = Flip::Vertical,
                's' => self.flip = Flip::Both,
                _ => (),
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        let dst = centered(&self.arrow, canvas);
        canvas.copy_ex(&self.arrow, None, Some(dst), self.angle, None, self.flip);
        Ok(())
    }
}
