//! Render system.
//!
//! Builds the [`Frame`] for the current scene state. The view follows the
//! player horizontally but never scrolls left of the level start, and is
//! vertically fixed. Draw order: score, sprites, bounding boxes, grid.

use raylib::prelude::{Color, Vector2};

use crate::components::animation::SpriteAnimation;
use crate::components::boundingbox::BoundingBox;
use crate::components::transform::Transform;
use crate::render::frame::{CLEAR_PAUSED, CLEAR_PLAYING, DrawCommand, Frame};
use crate::scene::play::{HUD_FONT, ScenePlay};

const SCORE_SIZE: f32 = 20.0;
const SCORE_MARGIN: f32 = 25.0;
const GRID_LABEL_SIZE: f32 = 9.0;

pub fn render(scene: &ScenePlay) -> Frame {
    let viewport = scene.viewport;
    let player_x = scene
        .entities
        .component::<Transform>(scene.player)
        .pos
        .x;
    let center = Vector2::new((viewport.x / 2.0).max(player_x), viewport.y / 2.0);
    let clear = if scene.paused {
        CLEAR_PAUSED
    } else {
        CLEAR_PLAYING
    };
    let mut frame = Frame::new(clear, center);

    frame.push(DrawCommand::Text {
        font: HUD_FONT.to_string(),
        text: format!("Score: {}", scene.score),
        position: Vector2::new(center.x - viewport.x / 2.0 + SCORE_MARGIN, SCORE_MARGIN),
        size: SCORE_SIZE,
        color: Color::WHITE,
    });

    if scene.debug.textures {
        draw_sprites(scene, &mut frame);
    }
    if scene.debug.collision {
        draw_bounding_boxes(scene, &mut frame);
    }
    if scene.debug.grid {
        draw_grid(scene, &mut frame);
    }
    frame
}

fn draw_sprites(scene: &ScenePlay, frame: &mut Frame) {
    for &entity in scene.entities.entities() {
        let (Some(sprite), Some(transform)) = (
            scene.entities.get::<SpriteAnimation>(entity),
            scene.entities.get::<Transform>(entity),
        ) else {
            continue;
        };
        frame.push(DrawCommand::Sprite {
            texture: sprite.animation.texture().to_string(),
            source: sprite.animation.frame_rect(),
            position: transform.pos,
            scale: transform.scale,
            rotation: transform.angle,
        });
    }
}

fn draw_bounding_boxes(scene: &ScenePlay, frame: &mut Frame) {
    for &entity in scene.entities.entities() {
        let (Some(bbox), Some(transform)) = (
            scene.entities.get::<BoundingBox>(entity),
            scene.entities.get::<Transform>(entity),
        ) else {
            continue;
        };
        frame.push(DrawCommand::RectOutline {
            top_left: bbox.aabb(transform.pos).0,
            size: bbox.size - Vector2::new(1.0, 1.0),
            color: Color::WHITE,
        });
    }
}

/// Cell lines across the visible area, each cell labelled with its
/// `(x,y)` grid coordinate.
fn draw_grid(scene: &ScenePlay, frame: &mut Frame) {
    let grid = scene.grid_size;
    let viewport = scene.viewport;
    let left = frame.view_center.x - viewport.x / 2.0;
    let right = left + viewport.x + grid.x;
    let first_column = left - left.rem_euclid(grid.x);

    let mut x = first_column;
    while x < right {
        frame.push(DrawCommand::Line {
            from: Vector2::new(x, 0.0),
            to: Vector2::new(x, viewport.y),
            color: Color::WHITE,
        });
        x += grid.x;
    }

    let mut y = 0.0;
    while y < viewport.y {
        frame.push(DrawCommand::Line {
            from: Vector2::new(left, viewport.y - y),
            to: Vector2::new(right, viewport.y - y),
            color: Color::WHITE,
        });

        let mut x = first_column;
        while x < right {
            let cell_x = (x / grid.x).floor() as i32;
            let cell_y = (y / grid.y).floor() as i32;
            frame.push(DrawCommand::Text {
                font: HUD_FONT.to_string(),
                text: format!("({},{})", cell_x, cell_y),
                position: Vector2::new(x + 3.0, viewport.y - y - grid.y + 2.0),
                size: GRID_LABEL_SIZE,
                color: Color::WHITE,
            });
            x += grid.x;
        }
        y += grid.y;
    }
}
