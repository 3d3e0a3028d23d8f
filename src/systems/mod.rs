//! Per-frame systems of the gameplay scene.
//!
//! Stages that depend on creation order or spawn entities are free functions
//! over [`ScenePlay`](crate::scene::play::ScenePlay). [`lifespan`] and
//! [`animation::advance_animations`] are bevy systems over `Query`s, run from
//! the scene's schedules against the store's world. The scene runs the stages
//! in a fixed order:
//!
//! - [`movement`] – player intent, gravity and velocity integration
//! - [`lifespan`] – destroys entities whose frame budget ran out
//! - [`collision`] – bullets, coins, tile contacts and world bounds
//! - [`animation`] – player state, animation swaps, one-shot cleanup
//! - [`render`] – builds the display list for the frame
//!
//! [`input`] runs on the host side, before the scene, and turns key presses
//! into actions.
pub mod animation;
pub mod collision;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod render;
