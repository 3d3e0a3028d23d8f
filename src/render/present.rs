//! raylib presenter for [`Frame`]s.

use raylib::prelude::*;

use crate::render::frame::{DrawCommand, Frame};
use crate::resources::fontstore::FontStore;
use crate::resources::texturestore::TextureStore;

const TEXT_SPACING: f32 = 1.0;

/// Draw `frame` to the window. Sprites whose texture is not loaded are
/// skipped.
pub fn present(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    frame: &Frame,
    textures: &TextureStore,
    fonts: &FontStore,
) {
    let screen = Vector2 {
        x: rl.get_screen_width() as f32,
        y: rl.get_screen_height() as f32,
    };
    let camera = Camera2D {
        offset: Vector2 {
            x: screen.x / 2.0,
            y: screen.y / 2.0,
        },
        target: frame.view_center,
        rotation: 0.0,
        zoom: 1.0,
    };

    let mut d = rl.begin_drawing(thread);
    d.clear_background(frame.clear);
    let mut d2 = d.begin_mode2D(camera);

    for command in &frame.commands {
        match command {
            DrawCommand::Sprite {
                texture,
                source,
                position,
                scale,
                rotation,
            } => {
                let Some(tex) = textures.get(texture) else {
                    continue;
                };
                // Negative source extents mirror the frame.
                let src = Rectangle {
                    x: source.x,
                    y: source.y,
                    width: source.width * scale.x.signum(),
                    height: source.height * scale.y.signum(),
                };
                let dest = Rectangle {
                    x: position.x,
                    y: position.y,
                    width: source.width * scale.x.abs(),
                    height: source.height * scale.y.abs(),
                };
                let origin = Vector2 {
                    x: dest.width / 2.0,
                    y: dest.height / 2.0,
                };
                d2.draw_texture_pro(tex, src, dest, origin, *rotation, Color::WHITE);
            }
            DrawCommand::RectOutline {
                top_left,
                size,
                color,
            } => {
                let rect = Rectangle {
                    x: top_left.x,
                    y: top_left.y,
                    width: size.x,
                    height: size.y,
                };
                d2.draw_rectangle_lines_ex(rect, 1.0, *color);
            }
            DrawCommand::Line { from, to, color } => {
                d2.draw_line_v(*from, *to, *color);
            }
            DrawCommand::Text {
                font,
                text,
                position,
                size,
                color,
            } => match fonts.get(font) {
                Some(f) => {
                    d2.draw_text_ex(f, text, *position, *size, TEXT_SPACING, *color);
                }
                None => {
                    d2.draw_text(
                        text,
                        position.x as i32,
                        position.y as i32,
                        *size as i32,
                        *color,
                    );
                }
            },
        }
    }
}
