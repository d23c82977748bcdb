// Pixel Home - Main Entry Point
//
// Opens a window showing the home room, or renders a single frame to a PNG
// when --screenshot is given.

use clap::Parser;
use pixel_home::config::{AppConfig, CONFIG_FILE};
use pixel_home::display::{run_scene, FrameBuffer, WindowConfig};
use pixel_home::scene::Scene;
use pixel_home::screenshot::save_png;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Tile-based pixel-art room renderer")]
struct Args {
    /// Configuration file (created with defaults if missing)
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Window scale (1-4), overrides the config file
    #[arg(long)]
    scale: Option<u32>,

    /// Render one frame to this PNG and exit without opening a window
    #[arg(long, value_name = "PATH")]
    screenshot: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The log filter lives in the config, so report the load after init
    let (mut config, outcome) = AppConfig::load_or_default(&args.config);
    if let Some(scale) = args.scale {
        config.video.scale = scale;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.filter.as_str()),
    )
    .init();

    outcome.log(&args.config);

    let scene = Scene::new();

    if let Some(path) = args.screenshot {
        let mut frame = FrameBuffer::new();
        let mut scene = scene;
        scene.step(&mut frame);
        save_png(&frame, &path)?;
        log::info!("Frame written to {}", path.display());
        return Ok(());
    }

    let window = WindowConfig::from(&config.video);
    log::info!(
        "Ready (room: {})",
        scene.active_room().map_or("none", |room| room.name())
    );

    let scene = run_scene(window, config.screenshot.clone(), scene)?;
    log::info!("Closed after {} frames", scene.frame());
    Ok(())
}
