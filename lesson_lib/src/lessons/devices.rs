//! Mouse, keyboard state, game controllers and audio (lessons 17 to 21)

use super::{Context, Lesson, WindowSpec, centered, place};
use crate::assets::Assets;
use crate::audio::Sound;
use crate::error::LessonResult;
use crate::gfx::{Canvas, Color, Flip, Rect, Texture};
use crate::input::{InputEvent, JoyDirection, Key};
use crate::widgets::{BUTTON_HEIGHT, BUTTON_WIDTH, MouseButtonWidget};

fn clear_white(canvas: &mut Canvas) {
    canvas.set_draw_color(Color::WHITE);
    canvas.clear();
}

/// Warn once if no controller is attached. Controllers plugged in before launch are only reported
/// by the first batch of events, so this waits for the first update.
fn check_joysticks(checked: &mut bool, ctx: &mut Context) -> bool {
    if *checked {
        return false;
    }
    *checked = true;

    let missing = ctx.host.joysticks() == 0;
    if missing {
        warn!("No joystick connected");
    }
    missing
}

/// One button in each corner of the window, each showing the state of the mouse relative to it
pub struct MouseEvents {
    sheet: Texture,
    buttons: [MouseButtonWidget; 4],
}

impl MouseEvents {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<MouseEvents> {
        let right = super::SCREEN_WIDTH as i32 - BUTTON_WIDTH;
        let bottom = super::SCREEN_HEIGHT as i32 - BUTTON_HEIGHT;

        Ok(MouseEvents {
            sheet: assets.texture_keyed(lesson, "button.png", Color::CYAN)?,
            buttons: [
                MouseButtonWidget::new(0, 0),
                MouseButtonWidget::new(right, 0),
                MouseButtonWidget::new(0, bottom),
                MouseButtonWidget::new(right, bottom),
            ],
        })
    }

    pub fn buttons(&self) -> &[MouseButtonWidget] {
        &self.buttons
    }
}

impl Lesson for MouseEvents {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Mouse events")
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        for button in self.buttons.iter_mut() {
            button.handle_event(event);
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);

        for button in &self.buttons {
            let clip = button.sprite().clip();
            let p = button.position;
            let dst = Rect::new(p.x, p.y, clip.w, clip.h);
            canvas.copy(&self.sheet, Some(clip), Some(dst));
        }

        Ok(())
    }
}

/// Picks an image from the keys currently held instead of from key events
pub struct KeyStates {
    press: Texture,
    up: Texture,
    down: Texture,
    left: Texture,
    right: Texture,
}

impl KeyStates {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<KeyStates> {
        Ok(KeyStates {
            press: assets.texture(lesson, "press.png")?,
            up: assets.texture(lesson, "up.png")?,
            down: assets.texture(lesson, "down.png")?,
            left: assets.texture(lesson, "left.png")?,
            right: assets.texture(lesson, "right.png")?,
        })
    }
}

impl Lesson for KeyStates {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Key states")
    }

    fn render(&mut self, canvas: &mut Canvas, ctx: &mut Context) -> LessonResult<()> {
        let held = |c| ctx.keyboard.is_pressed(Key::Char(c));
        let image = if held('w') {
            &self.up
        } else if held('s') {
            &self.down
        } else if held('a') {
            &self.left
        } else if held('d') {
            &self.right
        } else {
            &self.press
        };

        clear_white(canvas);
        canvas.copy(image, None, Some(place(image, 0, 0)));

        Ok(())
    }
}

/// Arrow pointing where the first controller's stick is pushed
pub struct JoystickArrow {
    arrow: Texture,
    direction: JoyDirection,
    checked: bool,
}

impl JoystickArrow {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<JoystickArrow> {
        Ok(JoystickArrow {
            arrow: assets.texture_keyed(lesson, "arrow.png", Color::CYAN)?,
            direction: JoyDirection::default(),
            checked: false,
        })
    }
}

impl Lesson for JoystickArrow {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Game controllers and joysticks")
    }

    fn update(&mut self, ctx: &mut Context) {
        check_joysticks(&mut self.checked, ctx);
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut Context) {
        self.direction.handle_event(event);
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        let dst = centered(&self.arrow, canvas);
        let angle = self.direction.angle();
        canvas.copy_ex(&self.arrow, None, Some(dst), angle, None, Flip::None);
        Ok(())
    }
}

/// Rumbles the controller whenever one of its buttons is pressed
pub struct ForceFeedback {
    splash: Texture,
    checked: bool,
}

impl ForceFeedback {
    const STRENGTH: f32 = 0.8;
    const DURATION_MS: u32 = 500;

    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<ForceFeedback> {
        Ok(ForceFeedback {
            splash: assets.texture(lesson, "splash.png")?,
            checked: false,
        })
    }
}

impl Lesson for ForceFeedback {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Force feedback")
    }

    fn update(&mut self, ctx: &mut Context) {
        check_joysticks(&mut self.checked, ctx);
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        if let InputEvent::JoyButtonDown { which, .. } = *event {
            if !ctx.host.rumble(which, Self::STRENGTH, Self::DURATION_MS) {
                warn!("Unable to play rumble on controller {}", which);
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        canvas.copy(&self.splash, None, None);
        Ok(())
    }
}

/// 1 to 4 play sound effects, 9 plays, pauses or resumes the music and 0 stops it
pub struct SoundEffects {
    prompt: Texture,
    music: Sound,
    effects: [Sound; 4],
}

impl SoundEffects {
    pub fn load(assets: &Assets, lesson: u32) -> LessonResult<SoundEffects> {
        Ok(SoundEffects {
            prompt: assets.texture(lesson, "prompt.png")?,
            music: assets.sound(lesson, "beat.wav")?,
            effects: [
                assets.sound(lesson, "scratch.wav")?,
                assets.sound(lesson, "high.wav")?,
                assets.sound(lesson, "medium.wav")?,
                assets.sound(lesson, "low.wav")?,
            ],
        })
    }
}

impl Lesson for SoundEffects {
    fn window(&self) -> WindowSpec {
        WindowSpec::new("Sound effects and music")
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context) {
        let InputEvent::KeyDown { key, .. } = *event else {
            return;
        };

        match key.digit() {
            Some(d @ 1..=4) => {
                let effect = &self.effects[d as usize - 1];
                if ctx.mixer.play_channel(None, effect, 0).is_none() {
                    debug!("No free channel for effect {}", d);
                }
            }
            Some(9) => {
                let mixer = &mut *ctx.mixer;
                if !mixer.playing_music() {
                    mixer.play_music(&self.music, -1);
                } else if mixer.paused_music() {
                    mixer.resume_music();
                } else {
                    mixer.pause_music();
                }
            }
            Some(0) => ctx.mixer.halt_music(),
            _ => (),
        }
    }

    fn render(&mut self, canvas: &mut Canvas, _ctx: &mut Context) -> LessonResult<()> {
        clear_white(canvas);
        canvas.copy(&self.prompt, None, None);
        Ok(())
    }

    fn close(&mut self, ctx: &mut Context) {
        ctx.mixer.halt_music();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Mixer;
    use crate::host::HeadlessHost;
    use crate::input::{KeyboardState, MouseState};

    #[test]
    fn missing_joystick_is_reported_once() {
        let mut host = HeadlessHost::default();
        let mut mixer = Mixer::new();
        let keyboard = KeyboardState::new();
        let mut ctx = Context::new(0, &mut host, &mut mixer, &keyboard, MouseState::default());

        let mut checked = false;
        assert!(check_joysticks(&mut checked, &mut ctx));
        assert!(!check_joysticks(&mut checked, &mut ctx));
    }

    #[test]
    fn joystick_attached_before_first_update() {
        let mut host = HeadlessHost::default();
        let mut mixer = Mixer::new();
        let keyboard = KeyboardState::new();

        // Added by the first poll, before any update
        host.joysticks = 1;
        let mut ctx = Context::new(0, &mut host, &mut mixer, &keyboard, MouseState::default());

        let mut checked = false;
        assert!(!check_joysticks(&mut checked, &mut ctx));
        assert!(checked);
    }

    #[test]
    fn button_press_rumbles_its_controller() {
        let mut lesson = ForceFeedback {
            splash: Texture::blank(1, 1, crate::gfx::Access::Static),
            checked: false,
        };
        let mut host = HeadlessHost {
            joysticks: 2,
            ..HeadlessHost::default()
        };
        let mut mixer = Mixer::new();
        let keyboard = KeyboardState::new();
        let mut ctx = Context::new(0, &mut host, &mut mixer, &keyboard, MouseState::default());

        lesson.update(&mut ctx);
        assert!(lesson.checked);
        lesson.handle_event(&InputEvent::JoyButtonDown { which: 1, button: 0 }, &mut ctx);
        assert_eq!(host.rumbles, vec![(1, 0.8, 500)]);
    }
}
