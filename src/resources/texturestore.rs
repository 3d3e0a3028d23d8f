//! Texture store.
//!
//! Holds the GPU textures named in the asset manifest. Textures must be used
//! from the thread that created the window, so the store stays with the host
//! loop and is only borrowed by the presenter.

use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D, Vector2};
use rustc_hash::FxHashMap;

use crate::resources::assets::{AssetError, AssetFile};

#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every texture in `files`. The first failure aborts the load.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        files: &[AssetFile],
    ) -> Result<Self, AssetError> {
        let mut store = Self::new();
        for file in files {
            let texture = rl
                .load_texture(thread, &file.path.to_string_lossy())
                .map_err(|e| AssetError::Load {
                    kind: "texture",
                    name: file.name.clone(),
                    path: file.path.clone(),
                    message: e.to_string(),
                })?;
            log::debug!(
                "texture {} loaded ({}x{})",
                file.name,
                texture.width,
                texture.height
            );
            store.add(file.name.clone(), texture);
        }
        Ok(store)
    }

    pub fn add(&mut self, name: impl Into<String>, texture: Texture2D) {
        self.textures.insert(name.into(), texture);
    }

    pub fn get(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name)
    }

    /// Pixel size of a loaded texture.
    pub fn size(&self, name: &str) -> Option<Vector2> {
        self.get(name)
            .map(|t| Vector2::new(t.width as f32, t.height as f32))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
