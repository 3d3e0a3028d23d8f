//! Display list for one frame.
//!
//! All positions are in world pixels; the presenter maps the view centre to
//! the middle of the window. Commands are drawn in order.

use raylib::prelude::{Color, Rectangle, Vector2};

/// Sky colour while playing.
pub const CLEAR_PLAYING: Color = Color::new(100, 100, 255, 255);
/// Sky colour while paused.
pub const CLEAR_PAUSED: Color = Color::new(50, 50, 150, 255);

#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// One animation frame centred on `position`. A negative scale mirrors
    /// the sprite on that axis.
    Sprite {
        texture: String,
        source: Rectangle,
        position: Vector2,
        scale: Vector2,
        rotation: f32,
    },
    /// Unfilled rectangle from its top-left corner.
    RectOutline {
        top_left: Vector2,
        size: Vector2,
        color: Color,
    },
    Line {
        from: Vector2,
        to: Vector2,
        color: Color,
    },
    /// Text with its top-left corner at `position`. Falls back to the default
    /// font if `font` is not loaded.
    Text {
        font: String,
        text: String,
        position: Vector2,
        size: f32,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub clear: Color,
    /// World point shown in the middle of the window.
    pub view_center: Vector2,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(clear: Color, view_center: Vector2) -> Self {
        Self {
            clear,
            view_center,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn sprites(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
    }

    /// Strings of every text command, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
