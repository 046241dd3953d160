use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

mod texture_loader;
mod viewer;

use carousel::{Carousel, CarouselConfig, FrameClock};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::viewer::{build_scene, Viewer};

const FPS: u32 = 60;

/// Rotate the images of a directory as a carousel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding the slide images
    dir: PathBuf,

    /// Milliseconds between automatic advances (overrides the config file)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// TOML file with carousel settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 720)]
    height: i32,
}

fn load_config(args: &Args) -> Result<CarouselConfig> {
    let mut config = match &args.config {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(ms) = args.delay_ms {
        config = config.with_delay(Duration::from_millis(ms));
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!("Showing {} every {:?}", args.dir.display(), config.auto_slide_delay);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut textures = Vec::new();
    for path in load_sorted_image_paths(&args.dir)? {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => textures.push(texture),
            Err(e) => log::warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    log::info!("Loaded {} slides", textures.len());

    let scene = build_scene(&config, textures.len());
    let mut carousel = Carousel::new(config, scene, FrameClock::new());
    let viewer = Viewer::new(textures);

    // Everything the carousel looks up exists from here on
    carousel.on_ready();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());

        viewer.handle_input(&rl, &mut carousel);
        carousel.advance(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        viewer.draw(&mut d, &carousel);
    }

    Ok(())
}
