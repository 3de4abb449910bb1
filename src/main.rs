use anyhow::{Context, Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

mod config;
mod engine;
mod slide;
mod texture_loader;

use carousel::constants::*;

use crate::config::Args;
use crate::engine::CarouselEngine;
use crate::slide::Slide;
use crate::texture_loader::{load_slide_sources, load_texture};

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder().with_max_level(args.log_level()).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let sources = load_slide_sources(&args.image_directory, args.shuffle)
        .with_context(|| format!("failed to load slides from {}", args.image_directory.display()))?;
    info!(count = sources.len(), directory = %args.image_directory.display(), "slide images found");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides = Vec::with_capacity(sources.len());
    for source in sources {
        match load_texture(&mut rl, &thread, &source.path) {
            Ok(texture) => slides.push(Slide::new(texture, source.caption)),
            Err(e) => warn!(path = %source.path.display(), error = %e, "skipping image"),
        }
    }

    if slides.is_empty() {
        bail!("no slides could be loaded from {}", args.image_directory.display());
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to create render texture")?;

    let mut engine = CarouselEngine::new(slides);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.handle_input(&rl);
        engine.render_frame(dt, &mut rl, &thread, &mut framebuffer);

        // Render texture is stored bottom-up, hence the negative source height
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    engine.shutdown();
    Ok(())
}
