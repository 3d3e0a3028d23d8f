//! Sprite-sheet animation playback.
//!
//! An [`Animation`] describes a horizontal strip of equally sized frames on a
//! texture and carries its own playback counter. Definitions live in the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore);
//! entities receive a *copy*, so advancing or replacing one entity's animation
//! never affects another entity that started from the same definition.
//!
//! Playback is frame-driven rather than time-driven: every call to
//! [`Animation::update`] advances the counter by one simulation frame and the
//! visible frame is `(counter / speed) % frame_count`.

use std::sync::Arc;

use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    name: Arc<str>,
    texture: Arc<str>,
    frame_count: usize,
    current_frame: usize,
    speed: usize,
    size: Vector2,
}

impl Animation {
    /// Build an animation over a sheet of `sheet_size` pixels split into
    /// `frame_count` columns, holding each frame for `speed` simulation frames.
    ///
    /// A `speed` or `frame_count` of zero is clamped to one.
    pub fn new(
        name: impl Into<Arc<str>>,
        texture: impl Into<Arc<str>>,
        sheet_size: Vector2,
        frame_count: usize,
        speed: usize,
    ) -> Self {
        let frame_count = frame_count.max(1);
        Self {
            name: name.into(),
            texture: texture.into(),
            frame_count,
            current_frame: 0,
            speed: speed.max(1),
            size: Vector2::new(sheet_size.x / frame_count as f32, sheet_size.y),
        }
    }

    /// Single-frame animation covering the whole sheet.
    pub fn still(name: impl Into<Arc<str>>, texture: impl Into<Arc<str>>, sheet_size: Vector2) -> Self {
        Self::new(name, texture, sheet_size, 1, 0)
    }

    /// Advance one simulation frame.
    pub fn update(&mut self) {
        self.current_frame += 1;
    }

    /// True while the counter sits on the last displayed frame of a cycle.
    ///
    /// Callers check this before [`update`](Self::update), so it fires one
    /// frame before the cycle wraps.
    pub fn has_ended(&self) -> bool {
        self.frame_index() == self.frame_count - 1
    }

    /// Index of the frame currently shown.
    pub fn frame_index(&self) -> usize {
        (self.current_frame / self.speed) % self.frame_count
    }

    /// Source rectangle of the current frame on the sprite sheet.
    pub fn frame_rect(&self) -> Rectangle {
        Rectangle::new(
            self.frame_index() as f32 * self.size.x,
            0.0,
            self.size.x,
            self.size.y,
        )
    }

    /// Size of one frame in pixels.
    pub fn size(&self) -> Vector2 {
        self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn speed(&self) -> usize {
        self.speed
    }

    /// Raw playback counter.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }
}
