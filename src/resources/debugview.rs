//! Debug drawing toggles.
//!
//! Flipped by the `TOGGLE_*` actions; read by the render system.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugView {
    /// Draw entity sprites.
    pub textures: bool,
    /// Outline bounding boxes.
    pub collision: bool,
    /// Draw the level grid with cell coordinates.
    pub grid: bool,
}

impl Default for DebugView {
    fn default() -> Self {
        Self {
            textures: true,
            collision: false,
            grid: false,
        }
    }
}
