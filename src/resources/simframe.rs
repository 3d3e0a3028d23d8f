//! Simulation frame counter as seen by scheduled systems.

use bevy_ecs::prelude::Resource;

/// Frames simulated so far. Does not advance while the scene is paused.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimFrame(pub u64);
