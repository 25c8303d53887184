//! Moving dots, collision tests and the cameras following them

mod camera;
mod collision;
mod dot;
mod motion;

pub use camera::{Camera, ScrollingBackground};
pub use collision::{Circle, check_colliders, check_rects};
pub use dot::{DOT_HEIGHT, DOT_WIDTH, Dot, Shape};
pub use motion::MotionDot;
