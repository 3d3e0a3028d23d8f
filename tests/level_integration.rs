//! Loading the shipped asset manifest and level from disk, without a window.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use raylib::prelude::Vector2;

use platformer::components::entityinfo::Tag;
use platformer::components::input::PlayerInput;
use platformer::level::{Level, LevelError};
use platformer::resources::assets::AssetManifest;
use platformer::resources::gameconfig::GameConfig;
use platformer::scene::play::ScenePlay;

const FRAME: f32 = 16.0;

fn asset_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}

/// Manifest from disk, with every sheet sized as `frame_count` 16 px frames.
fn load_store() -> Arc<platformer::resources::animationstore::AnimationStore> {
    let manifest = AssetManifest::load(asset_path("assets/assets.txt")).unwrap();
    let sheets: HashMap<String, Vector2> = manifest
        .animations
        .iter()
        .map(|a| {
            (
                a.texture.clone(),
                Vector2::new(FRAME * a.frame_count as f32, FRAME),
            )
        })
        .collect();
    Arc::new(
        manifest
            .build_animations(|name| sheets.get(name).copied())
            .unwrap(),
    )
}

#[test]
fn shipped_manifest_parses() {
    let manifest = AssetManifest::load(asset_path("assets/assets.txt")).unwrap();
    assert!(manifest.fonts.iter().any(|f| f.name == "Mario"));
    assert!(
        manifest
            .textures
            .iter()
            .all(|t| t.path.starts_with(asset_path("assets")))
    );
    let store = load_store();
    for name in ["Stand", "Run", "Air", "CoinSpin", "QuestionHit", "BrickDebris"] {
        assert!(store.contains(name), "missing {name}");
    }
}

#[test]
fn shipped_level_plays() {
    let mut scene = ScenePlay::from_file(
        asset_path("assets/levels/level1.txt"),
        load_store(),
        Vector2::new(1280.0, 768.0),
    )
    .unwrap();

    scene.update();
    assert!(scene.entities().entities_with_tag(Tag::Tile).len() > 30);
    assert_eq!(scene.entities().entities_with_tag(Tag::Player).len(), 1);

    let mut landed = false;
    for _ in 0..120 {
        scene.update();
        let input = scene.entities().component::<PlayerInput>(scene.player());
        landed |= input.can_jump;
    }
    assert!(landed);
}

#[test]
fn default_config_points_at_shipped_files() {
    let mut config = GameConfig::with_path(asset_path("config.ini"));
    config.load_from_file().unwrap();
    assert_eq!(config.window_size(), (1280, 768));
    assert_eq!(config.level_path, PathBuf::from("./assets/levels/level1.txt"));
    assert_eq!(config.assets_path, PathBuf::from("./assets/assets.txt"));
}

#[test]
fn missing_level_file_is_reported() {
    let err = ScenePlay::from_file(
        asset_path("assets/levels/nope.txt"),
        load_store(),
        Vector2::new(1280.0, 768.0),
    )
    .err()
    .unwrap();
    assert!(matches!(err, LevelError::Io { .. }));
}

#[test]
fn level_on_disk_has_one_player() {
    let level = Level::load(asset_path("assets/levels/level1.txt")).unwrap();
    assert_eq!(level.player().weapon, "Buster");
    assert_eq!(level.player().cx, 24.0);
}
