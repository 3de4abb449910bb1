use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use carousel::constants::{FPS, RENDER_HEIGHT, RENDER_WIDTH};

/// Image carousel viewer: arrow keys, on-screen buttons, dots or swipes.
#[derive(Debug, Parser)]
#[command(name = "carousel", version)]
pub struct Args {
    /// Directory holding the slide images (png, jpg, jpeg, bmp, gif)
    pub image_directory: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2, value_parser = clap::value_parser!(i32).range(320..))]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2, value_parser = clap::value_parser!(i32).range(240..))]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Shuffle slide order instead of sorting by file name
    #[arg(long)]
    pub shuffle: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
