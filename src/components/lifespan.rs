//! Frame-counted time-to-live.
//!
//! The [`Lifespan`] component records how many simulation frames an entity may
//! live and the frame it was created on. The
//! [`lifespan system`](crate::systems::lifespan::lifespan) destroys the entity
//! once `current_frame - frame_created >= lifespan`. Frames are only counted
//! while the scene is not paused.
//!
//! # Related
//!
//! - [`crate::components::animation::SpriteAnimation`] – one-shot animations
//!   are the other way an entity removes itself

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    /// Total frames to live.
    pub lifespan: u64,
    /// Simulation frame the component was attached on.
    pub frame_created: u64,
}

impl Lifespan {
    pub fn new(lifespan: u64, frame_created: u64) -> Self {
        Lifespan {
            lifespan,
            frame_created,
        }
    }

    /// Whether the lifespan has run out at `current_frame`.
    pub fn expired(&self, current_frame: u64) -> bool {
        current_frame.saturating_sub(self.frame_created) >= self.lifespan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let life = Lifespan::new(90, 0);
        assert!(!life.expired(0));
        assert!(!life.expired(89));
        assert!(life.expired(90));
        assert!(life.expired(1000));
    }

    #[test]
    fn test_expiry_is_relative_to_creation() {
        let life = Lifespan::new(10, 25);
        assert!(!life.expired(34));
        assert!(life.expired(35));
    }
}
