//! Small stateful helpers shared by the interactive lessons

mod button;
mod sprite;
mod text_input;
mod window_state;

pub use button::{BUTTON_HEIGHT, BUTTON_WIDTH, ButtonSprite, MouseButtonWidget};
pub use sprite::{Animation, DataStream};
pub use text_input::TextInputBuffer;
pub use window_state::WindowState;
