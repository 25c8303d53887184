use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use lesson_lib::LessonId;
use tracing::{error, Level};
use crate::config::{Config, DEFAULT_CONFIG};
use crate::error::AppResult;

mod app;
mod config;
mod error;
mod sdl;

/// Gallery of small 2D multimedia lessons
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lesson number to run, overrides the config file
    #[arg(short, long)]
    lesson: Option<u32>,
    /// Asset root directory, overrides the config file
    #[arg(short, long)]
    assets: Option<PathBuf>,
    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,
    /// List the available lessons and exit
    #[arg(long)]
    list: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    } else {
        tracing_subscriber::fmt::init();
    }
}

fn run(args: Args) -> AppResult<()> {
    if args.list {
        for id in LessonId::ALL {
            println!("{:02} {:?}", id.number(), id);
        }
        return Ok(());
    }

    let mut config = Config::load(&args.config)?;
    if let Some(lesson) = args.lesson {
        config.lesson = lesson;
    }
    if let Some(assets) = args.assets {
        config.assets = assets;
    }

    let mut app = app::App::new(&config)?;
    app.run()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("The app failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
