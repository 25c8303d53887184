//! Keyboard driven dots: motion, collisions, scrolling, particles and tiles
//! (lessons 26 to 31, 38, 39 and 44)

use super::{Context, Lesson, WindowSpec, SCREEN_HEIGHT, SCREEN_WIDTH, place};
use crate::assets::Assets;
use crate::error::LessonResult;
use crate::gfx::{Canvas, Color, Point, Rect, Texture};
use crate::input::InputEvent;
use crate::particles::{Emitter, ParticleColor};
use crate::physics::{Camera, Dot, MotionDot, ScrollingBackground, Shape, check_colliders};
use crate::tiles::{LEVEL_HEIGHT, LEVEL_WIDTH, TileMap};

const SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
const LEVEL: Rect = Rect::new(0, 0, LEVEL_WIDTH, LEVEL_HEIGHT);

/// The wall dots bump into in the collision lessons
const WALL: Rect = Rect::new(300, 40, 40, 400);

fn load_dot(assets: &Assets, lesson: u32) -> LessonResult<Texture> {
    assets.texture_keyed(lesson, "dot.png", Color::CYAN)
}

fn draw_at(canvas: &mut Canvas, texture: &Texture, p: Point) {
    canvas.copy(texture, None, Some(place(texture, p.x, p.y)));
}

fn clear_white(canvas: &mut Canvas) {
    canvas.set_draw_color(Color::WHITE);
    canvas.clear();
}

/// Dot moved with the arrow keys and kept on screen, optionally stopped by a wall
pub struct Motion {
    texture: Texture,
    dot: Dot,
    wall: Option<Rect>,
}

impl Motion {
    pub fn load(assets: &Assets, lesson: u32, with_wall: bool) -> LessonResult<Motion> {
        Ok(Motion {
            texture: load_dot(assets, lesson)?,
            dot: Dot::new(0, 0, 10, Shape::Box),
            wall: with_wall.then_some(WALL),
        })
    }

    pub fn dot(&self) -> &Dot {
        &self.dot
    }
}

impl Lesson for Motion {
    fn window(&self) -> WindowSpec {
        match self.wall {
            Some(_) => WindowSpec::new("Collision detection"),
            None => WindowSpec::new("Motion"),
        }
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, _ctx: &mut Context) {
        self.dot.step_against(SCREEN, self.wall);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);

        if let Some(wall) = self.wall {
            canvas.set_draw_color(Color::BLACK);
            canvas.draw_rect(wall);
        }
        draw_at(canvas, &self.texture, self.dot.top_left());

        Ok(())
    }
}

/// Two dots colliding through a stack of thin boxes that follow the round sprite closely
pub struct PerPixelCollision {
    texture: Texture,
    dot: Dot,
    other: Dot,
}

impl PerPixelCollision {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<PerPixelCollision> {
        Ok(PerPixelCollision {
            texture: load_dot(assets, lesson)?,
            dot: Dot::new(0, 0, 1, Shape::Strips),
            other: Dot::new(SCREEN.w / 4, SCREEN.h / 4, 1, Shape::Strips),
        })
    }
}

impl Lesson for PerPixelCollision {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Per-pixel collision detection")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, _ctx: &mut Context) {
        let obstacle = self.other.colliders();
        self.dot
            .step(SCREEN, |d| check_colliders(&d.colliders(), &obstacle));
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        draw_at(canvas, &self.texture, self.dot.top_left());
        draw_at(canvas, &self.texture, self.other.top_left());
        Ok(())
    }
}

/// Circular dot stopped by a wall and by another circle
pub struct CircularCollision {
    texture: Texture,
    dot: Dot,
    other: Dot,
}

impl CircularCollision {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<CircularCollision> {
        let radius = crate::physics::DOT_WIDTH / 2;

        Ok(CircularCollision {
            texture: load_dot(assets, lesson)?,
            dot: Dot::new(radius, radius, 1, Shape::Circle),
            other: Dot::new(SCREEN.w / 4, SCREEN.h / 4, 1, Shape::Circle),
        })
    }

    pub fn dot(&self) -> &Dot {
        &self.dot
    }
}

impl Lesson for CircularCollision {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Circular collision detection")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, _ctx: &mut Context) {
        let other = self.other.circle();
        self.dot.step(SCREEN, |d| {
            let c = d.circle();
            c.overlaps_rect(&WALL) || c.overlaps_circle(&other)
        });
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);

        canvas.set_draw_color(Color::BLACK);
        canvas.draw_rect(WALL);
        draw_at(canvas, &self.texture, self.dot.top_left());
        draw_at(canvas, &self.texture, self.other.top_left());

        Ok(())
    }
}

/// Dot roaming a level larger than the screen, with the camera following it
pub struct Scrolling {
    background: Texture,
    texture: Texture,
    dot: Dot,
    camera: Camera,
}

impl Scrolling {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<Scrolling> {
        Ok(Scrolling {
            background: assets.texture(lesson, "bg.png")?,
            texture: load_dot(assets, lesson)?,
            dot: Dot::new(0, 0, 10, Shape::Box),
            camera: Camera::new(SCREEN.w, SCREEN.h),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

impl Lesson for Scrolling {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Scrolling")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, _ctx: &mut Context) {
        self.dot.step(LEVEL, |_| false);
        self.camera.follow(self.dot.bounds(), LEVEL);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let cam = self.camera.rect;

        clear_white(canvas);
        canvas.copy(&self.background, Some(cam), Some(Rect::new(0, 0, cam.w, cam.h)));

        let p = self.dot.top_left();
        draw_at(canvas, &self.texture, Point::new(p.x - cam.x, p.y - cam.y));

        Ok(())
    }
}

/// Endlessly scrolling background
pub struct ScrollingBackdrop {
    background: Texture,
    scroll: ScrollingBackground,
}

impl ScrollingBackdrop {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<ScrollingBackdrop> {
        let background = assets.texture(lesson, "bg.png")?;
        let scroll = ScrollingBackground::new(background.width() as i32);

        Ok(ScrollingBackdrop { background, scroll })
    }
}

impl Lesson for ScrollingBackdrop {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Scrolling backgrounds")
    }

    fn update(&mut self, _ctx: &mut Context) {
        self.scroll.scroll();
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        for x in self.scroll.positions() {
            draw_at(canvas, &self.background, Point::new(x, 0));
        }
        Ok(())
    }
}

/// Dot trailing a cloud of shimmering particles
pub struct Particles {
    texture: Texture,
    red: Texture,
    green: Texture,
    blue: Texture,
    shimmer: Texture,
    dot: Dot,
    emitter: Emitter,
}

impl Particles {
    const ALPHA: u8 = 185;

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<Particles> {
        let particle = |name| -> LessonResult<Texture> {
            let mut texture = assets.texture_keyed(lesson, name, Color::CYAN)?;
            texture.set_alpha(Self::ALPHA);
            Ok(texture)
        };

        let dot = Dot::new(0, 0, 10, Shape::Box);

        Ok(Particles {
            texture: load_dot(assets, lesson)?,
            red: particle("red.png")?,
            green: particle("green.png")?,
            blue: particle("blue.png")?,
            shimmer: particle("shimmer.png")?,
            emitter: Emitter::new(dot.x, dot.y),
            dot,
        })
    }
}

impl Lesson for Particles {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Particle engines")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, _ctx: &mut Context) {
        self.dot.step(SCREEN, |_| false);
        self.emitter.renew(self.dot.x, self.dot.y);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        draw_at(canvas, &self.texture, self.dot.top_left());

        for p in self.emitter.particles() {
            let texture = match p.color {
                ParticleColor::Red => &self.red,
                ParticleColor::Green => &self.green,
                ParticleColor::Blue => &self.blue,
            };
            draw_at(canvas, texture, Point::new(p.x, p.y));
            if p.shimmer() {
                draw_at(canvas, &self.shimmer, Point::new(p.x, p.y));
            }
        }
        self.emitter.advance();

        Ok(())
    }
}

/// Dot walking a tile map, blocked by the wall tiles
pub struct Tiling {
    sheet: Texture,
    texture: Texture,
    map: TileMap,
    dot: Dot,
    camera: Camera,
}

impl Tiling {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<Tiling> {
        let map = TileMap::parse(&assets.text(lesson, "lazy.map")?)?;

        Ok(Tiling {
            sheet: assets.texture(lesson, "tiles.png")?,
            texture: load_dot(assets, lesson)?,
            map,
            dot: Dot::new(0, 0, 10, Shape::Box),
            camera: Camera::new(SCREEN.w, SCREEN.h),
        })
    }
}

impl Lesson for Tiling {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Tiling")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, _ctx: &mut Context) {
        let map = &self.map;
        self.dot.step(LEVEL, |d| map.touches_wall(&d.bounds()));
        self.camera.follow(self.dot.bounds(), LEVEL);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        let cam = self.camera.rect;

        clear_white(canvas);
        for tile in self.map.visible(&cam) {
            let dst = tile.rect.offset(-cam.x, -cam.y);
            canvas.copy(&self.sheet, Some(tile.kind.clip()), Some(dst));
        }

        let p = self.dot.top_left();
        draw_at(canvas, &self.texture, Point::new(p.x - cam.x, p.y - cam.y));

        Ok(())
    }
}

/// Dot moving at a constant speed in pixels per second whatever the frame rate
pub struct FrameIndependent {
    texture: Texture,
    dot: MotionDot,
    last_step: Option<u64>,
}

impl FrameIndependent {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<FrameIndependent> {
        Ok(FrameIndependent {
            texture: load_dot(assets, lesson)?,
            dot: MotionDot::new(),
            last_step: None,
        })
    }
}

impl Lesson for FrameIndependent {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Frame independent movement").uncapped()
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.dot.handle_event(event);
    }

    fn update(&mut self, ctx: &mut Context) {
        let last = self.last_step.replace(ctx.ticks).unwrap_or(ctx.ticks);
        let secs = ctx.ticks.saturating_sub(last) as f32 / 1000.;
        self.dot.step(secs, SCREEN);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        draw_at(canvas, &self.texture, self.dot.position());
        Ok(())
    }
}
