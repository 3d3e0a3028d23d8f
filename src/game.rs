//! Game setup and main loop.
//!
//! [`Game::setup`] loads everything the play scene needs, in order:
//!
//! 1. the asset manifest named by [`GameConfig::assets_path`];
//! 2. its textures and fonts, onto the GPU;
//! 3. the animation registry, sized from the loaded textures;
//! 4. the level named by [`GameConfig::level_path`], into a [`ScenePlay`].
//!
//! Any failure is returned as a [`GameError`]; the binary treats it as fatal.
//! [`Game::run`] then drives the scene once per rendered frame until the
//! window closes or the scene asks to leave.

use std::sync::Arc;

use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Vector2};
use thiserror::Error;

use crate::level::LevelError;
use crate::render::present::present;
use crate::resources::assets::{AssetError, AssetManifest};
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::ActionMap;
use crate::resources::texturestore::TextureStore;
use crate::scene::play::ScenePlay;
use crate::systems::input::poll_actions;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Level(#[from] LevelError),
}

pub struct Game {
    scene: ScenePlay,
    textures: TextureStore,
    fonts: FontStore,
    actions: ActionMap,
}

impl Game {
    pub fn setup(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let manifest = AssetManifest::load(&config.assets_path)?;
        let textures = TextureStore::load(rl, thread, &manifest.textures)?;
        let fonts = FontStore::load(rl, thread, &manifest.fonts)?;
        let animations = manifest.build_animations(|name| textures.size(name))?;
        info!(
            "Assets ready: {} textures, {} fonts, {} animations",
            textures.len(),
            fonts.len(),
            animations.len()
        );

        let (width, height) = config.window_size();
        let viewport = Vector2::new(width as f32, height as f32);
        let scene = ScenePlay::from_file(&config.level_path, Arc::new(animations), viewport)?;

        Ok(Self {
            scene,
            textures,
            fonts,
            actions: ActionMap::default(),
        })
    }

    /// Run until the window is closed or the scene requests another one.
    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        while !rl.window_should_close() {
            for event in poll_actions(rl, &self.actions) {
                self.scene.handle_action(event);
            }

            let frame = self.scene.update();
            present(rl, thread, &frame, &self.textures, &self.fonts);

            if let Some(request) = self.scene.take_scene_request() {
                // The menu lives outside this game; leaving play ends the run.
                info!("Scene {} requested, leaving play", request.name());
                break;
            }
        }
        info!(
            "Play ended on frame {} with score {}",
            self.scene.current_frame(),
            self.scene.score()
        );
    }
}
