//! Asset manifest parsing.
//!
//! The manifest lists the textures, fonts and animations a game needs, one
//! record per keyword in a whitespace-separated token stream:
//!
//! ```text
//! Texture   <name> <path>
//! Font      <name> <path>
//! Animation <name> <texture> <frameCount> <speed>
//! ```
//!
//! Relative paths are resolved against the manifest's directory. Parsing is
//! kept apart from loading: [`AssetManifest::build_animations`] only needs the
//! pixel size of each texture, so it runs the same with real raylib textures
//! or with sizes supplied by a test.

use std::path::{Path, PathBuf};

use raylib::prelude::Vector2;
use thiserror::Error;

use crate::animation::Animation;
use crate::resources::animationstore::AnimationStore;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read asset manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown asset keyword `{0}`")]
    UnknownKeyword(String),
    #[error("`{keyword}` record is missing its {field}")]
    MissingField {
        keyword: &'static str,
        field: &'static str,
    },
    #[error("`{keyword}` record has an invalid {field}: `{value}`")]
    InvalidNumber {
        keyword: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("animation `{animation}` uses unknown texture `{texture}`")]
    UnknownTexture { animation: String, texture: String },
    #[error("failed to load {kind} `{name}` from {}: {message}", path.display())]
    Load {
        kind: &'static str,
        name: String,
        path: PathBuf,
        message: String,
    },
}

/// A named file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSpec {
    pub name: String,
    pub texture: String,
    pub frame_count: usize,
    pub speed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    pub textures: Vec<AssetFile>,
    pub fonts: Vec<AssetFile>,
    pub animations: Vec<AnimationSpec>,
}

impl AssetManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let manifest = Self::parse(&text, base)?;
        log::info!(
            "Loaded asset manifest {}: {} textures, {} fonts, {} animations",
            path.display(),
            manifest.textures.len(),
            manifest.fonts.len(),
            manifest.animations.len()
        );
        Ok(manifest)
    }

    pub fn parse(text: &str, base_dir: &Path) -> Result<Self, AssetError> {
        let mut tokens = text.split_whitespace();
        let mut manifest = AssetManifest::default();

        while let Some(keyword) = tokens.next() {
            let mut word = |keyword: &'static str, field: &'static str| {
                tokens
                    .next()
                    .ok_or(AssetError::MissingField { keyword, field })
            };
            match keyword {
                "Texture" => {
                    let name = word("Texture", "name")?.to_string();
                    let path = base_dir.join(word("Texture", "path")?);
                    manifest.textures.push(AssetFile { name, path });
                }
                "Font" => {
                    let name = word("Font", "name")?.to_string();
                    let path = base_dir.join(word("Font", "path")?);
                    manifest.fonts.push(AssetFile { name, path });
                }
                "Animation" => {
                    let name = word("Animation", "name")?.to_string();
                    let texture = word("Animation", "texture")?.to_string();
                    let frame_count = parse_count(word("Animation", "frame count")?, "frame count")?;
                    let speed = parse_count(word("Animation", "speed")?, "speed")?;
                    manifest.animations.push(AnimationSpec {
                        name,
                        texture,
                        frame_count,
                        speed,
                    });
                }
                other => return Err(AssetError::UnknownKeyword(other.to_string())),
            }
        }

        Ok(manifest)
    }

    /// Build the animation registry from the pixel size of each texture.
    pub fn build_animations(
        &self,
        texture_size: impl Fn(&str) -> Option<Vector2>,
    ) -> Result<AnimationStore, AssetError> {
        let mut store = AnimationStore::new();
        for spec in &self.animations {
            let sheet = texture_size(&spec.texture).ok_or_else(|| AssetError::UnknownTexture {
                animation: spec.name.clone(),
                texture: spec.texture.clone(),
            })?;
            store.insert(Animation::new(
                spec.name.as_str(),
                spec.texture.as_str(),
                sheet,
                spec.frame_count,
                spec.speed,
            ));
        }
        Ok(store)
    }
}

fn parse_count(token: &str, field: &'static str) -> Result<usize, AssetError> {
    token.parse().map_err(|_| AssetError::InvalidNumber {
        keyword: "Animation",
        field,
        value: token.to_string(),
    })
}
