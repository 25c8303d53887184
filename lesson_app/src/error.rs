use std::fmt::Display;
use lesson_lib::LessonError;
use thiserror::Error;

pub type AppResult<T> = ::std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("Lesson error: {0}")]
    Lesson(#[from] LessonError),
    #[error("Could not read config file: {0}")]
    Config(#[from] ini::Error),
    #[error("Bad config value {key} = {value}")]
    BadConfigValue { key: String, value: String },
}

impl AppError {
    /// For use with `map_err` on any of the SDL calls, whatever error type they return
    pub fn sdl<E: Display>(e: E) -> AppError {
        AppError::Sdl(e.to_string())
    }
}
