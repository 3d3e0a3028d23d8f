//! Platformer library.
//!
//! Exposes the gameplay runtime (entity store, components, systems and the
//! play scene) for the binary and for integration tests. Everything except
//! [`game`], [`render::present`] and the texture and font stores runs without
//! a window.

pub mod animation;
pub mod components;
pub mod entity;
pub mod events;
pub mod game;
pub mod level;
pub mod physics;
pub mod render;
pub mod resources;
pub mod scene;
pub mod systems;
