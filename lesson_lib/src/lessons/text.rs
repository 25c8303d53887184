//! Lessons drawing text: TrueType rendering, timers, frame rate, text entry, the save file
//! editor and the bitmap font (lessons 16, 22 to 25, 32, 33 and 41)

use super::pixels::key_out;
use super::{Context, Lesson, WindowSpec, centered, place};
use crate::assets::Assets;
use crate::error::LessonResult;
use crate::gfx::{Canvas, Color, Texture};
use crate::input::{InputEvent, Key};
use crate::save_data::{SaveData, TOTAL_DATA};
use crate::text::{BitmapFont, Font};
use crate::timing::{FpsCounter, Timer};
use crate::widgets::TextInputBuffer;
use std::path::PathBuf;

const FONT_FILE: &str = "lazy.ttf";
const FONT_SIZE: f32 = 18.;

/// Render a line without anti-aliasing. Empty text is rendered as a single space so the line
/// keeps its height.
fn solid(font: &Font, text: &str, color: Color) -> Texture {
    let text = if text.is_empty() { " " } else { text };
    Texture::from_surface(font.render_solid(text, color))
}

/// `x` that centers `texture` horizontally
fn center_x(texture: &Texture, canvas: &Canvas) -> i32 {
    (canvas.output_size().0 as i32 - texture.width() as i32) / 2
}

fn clear_white(canvas: &mut Canvas) {
    canvas.set_draw_color(Color::WHITE);
    canvas.clear();
}

pub struct TrueTypeFont {
    text: Texture,
}

impl TrueTypeFont {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<TrueTypeFont> {
        let font = assets.font(lesson, FONT_FILE, 20.)?;

        Ok(TrueTypeFont {
            text: font.texture("The quick brown fox jumps over the lazy dog", Color::BLACK),
        })
    }
}

impl Lesson for TrueTypeFont {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("True type fonts").size(540, 480)
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        let dst = centered(&self.text, canvas);
        canvas.copy(&self.text, None, Some(dst));
        Ok(())
    }
}

/// Milliseconds since the lesson started, Return restarts the count
pub struct Timing {
    font: Font,
    prompt: Texture,
    start: u64,
}

impl Timing {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<Timing> {
        let font = assets.font(lesson, FONT_FILE, FONT_SIZE)?;
        let prompt = solid(&font, "Press Enter to Reset Start Time.", Color::BLACK);

        Ok(Timing {
            font,
            prompt,
            start: 0,
        })
    }
}

impl Lesson for Timing {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Timing")
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        if let InputEvent::KeyDown {
            key: Key::Return, ..
        } = event
        {
            self.start = ctx.ticks;
        }
    }

    fn render(&mut self, canvas: &mut Canvas, ctx: &mut Context) -> LessonResult<()> {
        let elapsed = ctx.ticks.saturating_sub(self.start);
        let time = solid(
            &self.font,
            &format!("Milliseconds since start time {elapsed}"),
            Color::BLACK,
        );
        let (_, h) = canvas.output_size();

        clear_white(canvas);
        let x = center_x(&self.prompt, canvas);
        canvas.copy(&self.prompt, None, Some(place(&self.prompt, x, 0)));
        let y = (h as i32 - time.height() as i32) / 2;
        canvas.copy(&time, None, Some(place(&time, 200, y)));

        Ok(())
    }
}

/// Stopwatch: S starts or stops it, P pauses or resumes it
pub struct AdvancedTimers {
    font: Font,
    start_prompt: Texture,
    pause_prompt: Texture,
    timer: Timer,
}

impl AdvancedTimers {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<AdvancedTimers> {
        let font = assets.font(lesson, FONT_FILE, FONT_SIZE)?;
        let start_prompt = solid(&font, "Press S to Start or Stop the Timer", Color::BLACK);
        let pause_prompt = solid(&font, "Press P to Pause or Unpause the Timer", Color::BLACK);

        Ok(AdvancedTimers {
            font,
            start_prompt,
            pause_prompt,
            timer: Timer::new(),
        })
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

impl Lesson for AdvancedTimers {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Advanced timers")
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        let now = ctx.ticks;
        match *event {
            InputEvent::KeyDown {
                key: Key::Char('s'),
                ..
            } => {
                if self.timer.is_started() {
                    self.timer.stop();
                } else {
                    self.timer.start(now);
                }
            }
            InputEvent::KeyDown {
                key: Key::Char('p'),
                ..
            } => {
                if self.timer.is_paused() {
                    self.timer.resume(now);
                } else {
                    self.timer.pause(now);
                }
            }
            _ => (),
        }
    }

    fn render(&mut self, canvas: &mut Canvas, ctx: &mut Context) -> LessonResult<()> {
        let secs = self.timer.ticks(ctx.ticks) as f32 / 1000.;
        let time = solid(
            &self.font,
            &format!("Seconds since start time {secs}"),
            Color::BLACK,
        );
        let (_, h) = canvas.output_size();

        clear_white(canvas);
        let x = center_x(&self.start_prompt, canvas);
        canvas.copy(&self.start_prompt, None, Some(place(&self.start_prompt, x, 0)));
        let x = center_x(&self.pause_prompt, canvas);
        let y = self.start_prompt.height() as i32;
        canvas.copy(&self.pause_prompt, None, Some(place(&self.pause_prompt, x, y)));
        let y = (h as i32 - time.height() as i32) / 2;
        canvas.copy(&time, None, Some(place(&time, 200, y)));

        Ok(())
    }
}

/// Average frame rate since the lesson started. Used both capped and uncapped.
pub struct FrameRate {
    font: Font,
    cap: Option<u32>,
    fps: Option<FpsCounter>,
}

impl FrameRate {
    pub fn load(assets: &Assets, lesson: u32, cap: Option<u32>) -> LessonResult<FrameRate> {
        Ok(FrameRate {
            font: assets.font(lesson, FONT_FILE, FONT_SIZE)?,
            cap,
            fps: None,
        })
    }
}

impl Lesson for FrameRate {
    fn window(&self) -> WindowSpec {
        let title = if self.cap.is_some() {
            "Capping frame rate"
        } else {
            "Calculating frame rate"
        };

        WindowSpec {
            frame_cap: self.cap,
            ..WindowSpec::new(title)
        }
    }

    fn start(&mut self, ctx: &mut Context) -> LessonResult<()> {
        self.fps = Some(FpsCounter::new(ctx.ticks));
        Ok(())
    }

    fn render(&mut self, canvas: &mut Canvas, ctx: &mut Context) -> LessonResult<()> {
        let fps = self.fps.get_or_insert_with(|| FpsCounter::new(ctx.ticks));
        let label = if self.cap.is_some() {
            "Average Frames Per Second (With Cap)"
        } else {
            "Average Frames Per Second"
        };
        let text = solid(
            &self.font,
            &format!("{label} {}", fps.average(ctx.ticks)),
            Color::BLACK,
        );
        let (_, h) = canvas.output_size();

        clear_white(canvas);
        let y = (h as i32 - text.height() as i32) / 2;
        canvas.copy(&text, None, Some(place(&text, 200, y)));

        fps.frame_rendered();

        Ok(())
    }
}

/// Editable line of text with clipboard support
pub struct TextInput {
    font: Font,
    prompt: Texture,
    buffer: TextInputBuffer,
    text: Texture,
}

impl TextInput {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<TextInput> {
        let font = assets.font(lesson, FONT_FILE, FONT_SIZE)?;
        let prompt = solid(&font, "Enter Text:", Color::BLACK);
        let buffer = TextInputBuffer::new("Some Text");
        let text = solid(&font, buffer.text(), Color::BLACK);

        Ok(TextInput {
            font,
            prompt,
            buffer,
            text,
        })
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }
}

impl Lesson for TextInput {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Text input and clipboard handling")
    }

    fn start(&mut self, ctx: &mut Context) -> LessonResult<()> {
        ctx.host.start_text_input();
        Ok(())
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        if self.buffer.handle_event(event, ctx.host) {
            self.text = solid(&self.font, self.buffer.text(), Color::BLACK);
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        let x = center_x(&self.prompt, canvas);
        let y = self.prompt.height() as i32;
        canvas.copy(&self.prompt, None, Some(place(&self.prompt, x, 0)));
        canvas.copy(&self.text, None, Some(place(&self.text, x, y)));
        Ok(())
    }

    fn close(&mut self, ctx: &mut Context) {
        ctx.host.stop_text_input();
    }
}

/// Editor for the ten values of the save file. Up and Down select, Left and Right change the
/// selected value. The file is written back when the lesson closes.
pub struct FileIo {
    font: Font,
    path: PathBuf,
    data: SaveData,
    current: usize,
    prompt: Texture,
    values: Vec<Texture>,
}

impl FileIo {
    const HIGHLIGHT: Color = Color::RED;

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<FileIo> {
        let path = assets.path(lesson, "nums.bin");
        let data = SaveData::load_or_create(&path)?;
        let font = assets.font(lesson, FONT_FILE, FONT_SIZE)?;
        let prompt = solid(&font, "Enter Data:", Color::BLACK);

        let mut editor = FileIo {
            font,
            path,
            data,
            current: 0,
            prompt,
            values: Vec::with_capacity(TOTAL_DATA),
        };
        editor.values = (0..TOTAL_DATA).map(|i| editor.value_texture(i)).collect();

        Ok(editor)
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn value_texture(&self, index: usize) -> Texture {
        let color = if index == self.current {
            Self::HIGHLIGHT
        } else {
            Color::BLACK
        };
        solid(&self.font, &self.data.values[index].to_string(), color)
    }

    fn refresh(&mut self, index: usize) {
        self.values[index] = self.value_texture(index);
    }

    fn select(&mut self, index: usize) {
        let previous = self.current;
        self.current = index;
        self.refresh(previous);
        self.refresh(index);
    }
}

impl Lesson for FileIo {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("File reading and writing")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        let InputEvent::KeyDown { key, .. } = *event else {
            return;
        };

        let cur = self.current;
        match key {
            Key::Up => self.select((cur + TOTAL_DATA - 1) % TOTAL_DATA),
            Key::Down => self.select((cur + 1) % TOTAL_DATA),
            Key::Left => {
                self.data.values[cur] = self.data.values[cur].wrapping_sub(1);
                self.refresh(cur);
            }
            Key::Right => {
                self.data.values[cur] = self.data.values[cur].wrapping_add(1);
                self.refresh(cur);
            }
            _ => (),
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);

        let x = center_x(&self.prompt, canvas);
        canvas.copy(&self.prompt, None, Some(place(&self.prompt, x, 0)));

        let mut y = self.prompt.height() as i32;
        for value in &self.values {
            canvas.copy(value, None, Some(place(value, x, y)));
            y += value.height() as i32;
        }

        Ok(())
    }

    fn close(&mut self, _ctx: &mut Context) {
        match self.data.save(&self.path) {
            Ok(()) => info!("Saved data to '{}'", self.path.display()),
            Err(e) => warn!("Can't write '{}': {}", self.path.display(), e),
        }
    }
}

pub struct BitmapText {
    font: BitmapFont,
}

impl BitmapText {
    const TEXT: &'static str = "Bitmap Font:\nABDCEFGHIJKLMNOPQRSTUVWXYZ\n\
                                abcdefghijklmnopqrstuvwxyz\n0123456789";

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<BitmapText> {
        let mut sheet = assets.streaming_texture(lesson, "lazyfont.png")?;
        key_out(&mut sheet, Color::CYAN)?;

        Ok(BitmapText {
            font: BitmapFont::build(sheet)?,
        })
    }
}

impl Lesson for BitmapText {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Bitmap fonts")
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        self.font.render(canvas, 0, 0, Self::TEXT);
        Ok(())
    }
}
