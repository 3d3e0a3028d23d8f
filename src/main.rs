//! Platformer entry point.
//!
//! A side-scrolling 2D platformer built on:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for component storage
//!
//! # Startup
//!
//! 1. Parse the command line and read the INI configuration
//! 2. Open the window
//! 3. Load assets and the level (see [`Game::setup`])
//! 4. Run the play scene until the window closes or the player quits
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/level1.txt
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use platformer::game::Game;
use platformer::resources::gameconfig::GameConfig;

/// Side-scrolling platformer
#[derive(Parser)]
#[command(version, about = "A side-scrolling 2D platformer")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level file to play, overriding the one in the configuration.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using default settings");
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }

    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("Platformer")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is bound to the quit action
    rl.set_exit_key(None);

    let mut game = match Game::setup(&mut rl, &thread, &config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };
    game.run(&mut rl, &thread);
}
