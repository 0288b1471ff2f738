mod backend;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::*;

use gridcaster::config::Config;
use gridcaster::layout::SceneDescription;
use gridcaster::motion::can_occupy;
use gridcaster::{render_game, Game};

use backend::MacroquadTarget;

/// First-person grid raycaster
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Scene file to load instead of the one named in the configuration
    #[arg(long)]
    scene: Option<PathBuf>,
}

static SETUP: OnceLock<(Args, Config)> = OnceLock::new();

/// Logging, CLI and configuration; runs once, before the window opens
fn setup() -> &'static (Args, Config) {
    SETUP.get_or_init(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();
        let config = Config::load(&args.config);
        (args, config)
    })
}

fn window_conf() -> Conf {
    let (_, config) = setup();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        ..Default::default()
    }
}

/// Load the scene file, or the built-in maze if the file does not exist
fn load_description(path: &Path) -> Result<SceneDescription> {
    if !path.exists() {
        warn!("No scene file at {}, using built-in layout", path.display());
        return Ok(SceneDescription::default());
    }
    let description = SceneDescription::from_file(path)?;
    info!("Loaded scene from {}", path.display());
    Ok(description)
}

async fn run() -> Result<()> {
    let (args, config) = setup();
    config.validate().context("Invalid configuration")?;

    let scene_path = args
        .scene
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.scene.path));
    let description = load_description(&scene_path)?;

    // Textures resolve before the first frame; the loop never waits on I/O
    let (textures, handles) = backend::load_textures(&description.texture_paths()).await;
    let scene = description.build(&handles);
    info!("Scene is {}x{} cells", scene.width(), scene.height());

    let settings = config.render_settings();
    let mut game = Game::new(config.spawn_player(), config.motion_settings());
    if !can_occupy(&scene, game.player.position, game.motion.size) {
        warn!("Player starts overlapping a wall at {}", game.player.position);
    }

    let mut target = MacroquadTarget::new(textures);

    loop {
        backend::poll_intents(&mut game.intents);

        // Copy layout with player marker on C key
        if is_key_pressed(KeyCode::C) {
            backend::copy_to_clipboard(&description.to_text(game.player.cell()));
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        game.tick(&scene, get_time());

        clear_background(BLACK);
        render_game(&mut target, &scene, &game.player, &settings);

        next_frame().await
    }

    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
