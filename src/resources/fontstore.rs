//! Font store.
//!
//! Fonts named in the asset manifest, keyed by name. Like textures they
//! belong to the window thread.

use raylib::prelude::{Font, RaylibHandle, RaylibThread};
use rustc_hash::FxHashMap;

use crate::resources::assets::{AssetError, AssetFile};

#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every font in `files`. The first failure aborts the load.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        files: &[AssetFile],
    ) -> Result<Self, AssetError> {
        let mut store = Self::new();
        for file in files {
            let font = rl
                .load_font(thread, &file.path.to_string_lossy())
                .map_err(|e| AssetError::Load {
                    kind: "font",
                    name: file.name.clone(),
                    path: file.path.clone(),
                    message: e.to_string(),
                })?;
            log::debug!("font {} loaded", file.name);
            store.add(file.name.clone(), font);
        }
        Ok(store)
    }

    pub fn add(&mut self, name: impl Into<String>, font: Font) {
        self.fonts.insert(name.into(), font);
    }

    pub fn get(&self, name: &str) -> Option<&Font> {
        self.fonts.get(name)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
