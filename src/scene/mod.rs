//! Scenes driven by the host loop.
//!
//! - [`play`] – the gameplay scene: level loading, simulation, action handling
//! - [`spawn`] – entity builders used by the gameplay scene

pub mod play;
pub mod spawn;
