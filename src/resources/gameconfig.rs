//! Game configuration.
//!
//! Settings loaded from an INI file. Defaults keep the game startable when
//! the file is missing; values present in the file override them one by one.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 768
//! target_fps = 60
//!
//! [game]
//! assets = ./assets/assets.txt
//! level = ./assets/levels/level1.txt
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_ASSETS_PATH: &str = "./assets/assets.txt";
const DEFAULT_LEVEL_PATH: &str = "./assets/levels/level1.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels. Also the world height the level grid hangs from.
    pub window_height: u32,
    /// Simulation runs one step per rendered frame, so this is the game speed.
    pub target_fps: u32,
    /// Asset manifest.
    pub assets_path: PathBuf,
    /// Level file played on start.
    pub level_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            assets_path: PathBuf::from(DEFAULT_ASSETS_PATH),
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, assets={}, level={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.assets_path.display(),
            self.level_path.display()
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [game] section
        if let Some(assets) = config.get("game", "assets") {
            self.assets_path = PathBuf::from(assets);
        }
        if let Some(level) = config.get("game", "level") {
            self.level_path = PathBuf::from(level);
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
