//! Animation definition registry.
//!
//! Holds one [`Animation`] prototype per name. Entities never borrow from the
//! store: [`AnimationStore::animation`] hands out a fresh copy with its
//! playback counter at zero.

use rustc_hash::FxHashMap;

use crate::animation::Animation;

#[derive(Debug, Clone, Default)]
pub struct AnimationStore {
    animations: FxHashMap<String, Animation>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }

    /// Register an animation under its own name, replacing any previous one.
    pub fn insert(&mut self, animation: Animation) {
        self.animations
            .insert(animation.name().to_string(), animation);
    }

    pub fn with(mut self, animation: Animation) -> Self {
        self.insert(animation);
        self
    }

    /// Borrow a definition.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&Animation> {
        self.animations.get(name.as_ref())
    }

    /// Copy of a definition, ready to be attached to an entity.
    pub fn animation(&self, name: impl AsRef<str>) -> Option<Animation> {
        self.get(name).cloned()
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.animations.contains_key(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
