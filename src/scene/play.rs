//! The gameplay scene.
//!
//! [`ScenePlay`] owns the [`EntityManager`] for one level and runs the fixed
//! per-frame pipeline:
//!
//! 1. commit pending entity additions and removals;
//! 2. unless paused: [`movement`], [`lifespan`], [`collision`], then advance
//!    the frame counter;
//! 3. always: [`animation`] (player state, one-shot cleanup, playback);
//! 4. [`render`] into a [`Frame`].
//!
//! Pausing freezes the world but keeps animating and drawing it, with a
//! darker clear colour.
//!
//! [`movement`]: crate::systems::movement::movement
//! [`lifespan`]: crate::systems::lifespan::lifespan
//! [`collision`]: crate::systems::collision::collision
//! [`animation`]: crate::systems::animation::animation
//! [`render`]: crate::systems::render::render

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::{Entity, Schedule};
use log::{debug, info, trace};
use raylib::prelude::Vector2;

use crate::animation::Animation;
use crate::components::input::PlayerInput;
use crate::components::state::PlayerState;
use crate::entity::EntityManager;
use crate::events::action::{Action, ActionEvent, ActionPhase};
use crate::level::{Level, LevelError, LevelRecord, PlayerConfig};
use crate::render::frame::Frame;
use crate::resources::animationstore::AnimationStore;
use crate::resources::debugview::DebugView;
use crate::resources::scenerequest::SceneRequest;
use crate::resources::simframe::SimFrame;
use crate::scene::spawn;
use crate::systems;

/// Size of one level cell in pixels.
pub const GRID_SIZE: Vector2 = Vector2::new(64.0, 64.0);
/// Points for picking up a coin.
pub const COIN_SCORE: u32 = 100;
/// A held shoot fires on frames that are a multiple of this.
pub const FIRE_INTERVAL: u64 = 10;

/// Tile animation that turns into debris when hit.
pub const BRICK: &str = "Brick";
pub const BRICK_DEBRIS: &str = "BrickDebris";
/// Tile animation that releases a coin when bumped from below.
pub const QUESTION: &str = "Question";
pub const QUESTION_HIT: &str = "QuestionHit";
pub const COIN_SPIN: &str = "CoinSpin";
/// Font used for the score and grid labels.
pub const HUD_FONT: &str = "Mario";

const PLAYER_STATES: [PlayerState; 6] = [
    PlayerState::Stand,
    PlayerState::Run,
    PlayerState::Air,
    PlayerState::StandShoot,
    PlayerState::RunShoot,
    PlayerState::AirShoot,
];

pub struct ScenePlay {
    pub(crate) entities: EntityManager,
    pub(crate) player: Entity,
    pub(crate) player_config: PlayerConfig,
    pub(crate) animations: Arc<AnimationStore>,
    pub(crate) debug: DebugView,
    pub(crate) grid_size: Vector2,
    /// Window size; the level grid hangs from its bottom edge.
    pub(crate) viewport: Vector2,
    pub(crate) score: u32,
    pub(crate) current_frame: u64,
    pub(crate) paused: bool,
    scene_request: Option<SceneRequest>,
    lifespan_stage: Schedule,
    pub(crate) animation_stage: Schedule,
}

impl ScenePlay {
    /// Build the scene and spawn every entity the level describes.
    ///
    /// Fails if the level names an animation the store does not have, or if
    /// an animation the gameplay swaps in at runtime is missing.
    pub fn new(
        level: &Level,
        animations: Arc<AnimationStore>,
        viewport: Vector2,
    ) -> Result<Self, LevelError> {
        check_animations(level, &animations)?;

        let mut lifespan_stage = Schedule::default();
        lifespan_stage.add_systems(systems::lifespan::lifespan);
        let mut animation_stage = Schedule::default();
        animation_stage.add_systems(systems::animation::advance_animations);

        let mut scene = Self {
            entities: EntityManager::new(),
            player: Entity::PLACEHOLDER,
            player_config: level.player().clone(),
            animations,
            debug: DebugView::default(),
            grid_size: GRID_SIZE,
            viewport,
            score: 0,
            current_frame: 0,
            paused: false,
            scene_request: None,
            lifespan_stage,
            animation_stage,
        };
        scene.entities.insert_resource(SimFrame::default());

        let mut player = None;
        for record in level.records() {
            match record {
                LevelRecord::Tile(placement) => {
                    spawn::spawn_tile(&mut scene, placement);
                }
                LevelRecord::Dec(placement) => {
                    spawn::spawn_dec(&mut scene, placement);
                }
                LevelRecord::Player(_) => {
                    player = Some(spawn::spawn_player(&mut scene));
                }
            }
        }
        scene.player = player.ok_or(LevelError::MissingPlayer)?;

        info!(
            "Level ready: {} entities queued, player at cell ({}, {})",
            scene.entities.pending_count(),
            scene.player_config.x,
            scene.player_config.y
        );
        Ok(scene)
    }

    /// Read a level file and build the scene from it.
    pub fn from_file(
        path: impl AsRef<Path>,
        animations: Arc<AnimationStore>,
        viewport: Vector2,
    ) -> Result<Self, LevelError> {
        let level = Level::load(path)?;
        Self::new(&level, animations, viewport)
    }

    /// Run one frame of simulation and return what to draw.
    pub fn update(&mut self) -> Frame {
        self.simulate();
        self.render()
    }

    /// Stages 1 to 3 of the frame pipeline.
    pub fn simulate(&mut self) {
        self.entities.update();

        if !self.paused {
            systems::movement::movement(self);
            self.entities.insert_resource(SimFrame(self.current_frame));
            self.entities.run_schedule(&mut self.lifespan_stage);
            systems::collision::collision(self);
            self.current_frame += 1;
        }
        systems::animation::animation(self);
    }

    pub fn render(&self) -> Frame {
        systems::render::render(self)
    }

    /// Apply an action delivered by the host.
    pub fn handle_action(&mut self, event: ActionEvent) {
        trace!("action {} {:?}", event.action, event.phase);
        let player = self.player;
        match event.phase {
            ActionPhase::Start => match event.action {
                Action::ToggleTexture => {
                    self.debug.textures = !self.debug.textures;
                    debug!("draw textures: {}", self.debug.textures);
                }
                Action::ToggleCollision => {
                    self.debug.collision = !self.debug.collision;
                    debug!("draw bounding boxes: {}", self.debug.collision);
                }
                Action::ToggleGrid => {
                    self.debug.grid = !self.debug.grid;
                    debug!("draw grid: {}", self.debug.grid);
                }
                Action::Pause => self.set_paused(!self.paused),
                Action::Quit => self.on_end(),
                Action::Jump => {
                    let mut input = self.entities.component_mut::<PlayerInput>(player);
                    if input.can_jump {
                        input.up = true;
                    }
                }
                Action::Down => self.entities.component_mut::<PlayerInput>(player).down = true,
                Action::Left => self.entities.component_mut::<PlayerInput>(player).left = true,
                Action::Right => self.entities.component_mut::<PlayerInput>(player).right = true,
                Action::Shoot => self.entities.component_mut::<PlayerInput>(player).shoot = true,
            },
            ActionPhase::End => {
                let mut input = self.entities.component_mut::<PlayerInput>(player);
                match event.action {
                    Action::Jump => input.up = false,
                    Action::Down => input.down = false,
                    Action::Left => input.left = false,
                    Action::Right => input.right = false,
                    Action::Shoot => input.shoot = false,
                    _ => {}
                }
            }
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        debug!("paused = {}", paused);
    }

    fn on_end(&mut self) {
        debug!("requesting scene change to {}", SceneRequest::Menu.name());
        self.scene_request = Some(SceneRequest::Menu);
    }

    /// Pending request to leave this scene, cleared on read.
    pub fn take_scene_request(&mut self) -> Option<SceneRequest> {
        self.scene_request.take()
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Centre position for an entity drawn with `animation` in cell
    /// (`grid_x`, `grid_y`).
    ///
    /// The sprite's draw scale is picked from its frame height (16 px → 4,
    /// 24 or 32 px → 2, otherwise 1). The scaled sprite sits on the bottom of
    /// the cell with its left edge on the cell's left edge. Cell rows count
    /// upward from the bottom of the viewport.
    pub fn grid_to_mid_pixel(&self, grid_x: f32, grid_y: f32, animation: &Animation) -> Vector2 {
        let size = animation.size();
        let scale = match size.y as i32 {
            16 => 4.0,
            24 | 32 => 2.0,
            _ => 1.0,
        };
        let offset_x = (self.grid_size.x - size.x * scale) / 2.0;
        let offset_y = (self.grid_size.y - size.y * scale) / 2.0;
        Vector2::new(
            grid_x * self.grid_size.x + self.grid_size.x / 2.0 - offset_x,
            self.viewport.y - grid_y * self.grid_size.y - self.grid_size.y / 2.0 + offset_y,
        )
    }

    /// Copy of a named animation.
    ///
    /// # Panics
    ///
    /// If the store lacks it. Every name used at runtime is checked when the
    /// scene is built.
    pub(crate) fn animation(&self, name: &str) -> Animation {
        self.animations
            .animation(name)
            .unwrap_or_else(|| panic!("animation `{name}` missing from the store"))
    }

    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn player_config(&self) -> &PlayerConfig {
        &self.player_config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn debug_view(&self) -> DebugView {
        self.debug
    }

    pub fn grid_size(&self) -> Vector2 {
        self.grid_size
    }

    pub fn viewport(&self) -> Vector2 {
        self.viewport
    }
}

fn check_animations(level: &Level, store: &AnimationStore) -> Result<(), LevelError> {
    let mut required: Vec<&str> = level.animation_names().collect();
    required.extend(PLAYER_STATES.iter().map(PlayerState::animation_name));
    for record in level.records() {
        if let LevelRecord::Tile(placement) = record {
            match placement.animation.as_str() {
                QUESTION => required.extend([QUESTION_HIT, COIN_SPIN]),
                BRICK => required.push(BRICK_DEBRIS),
                _ => {}
            }
        }
    }
    match required.into_iter().find(|name| !store.contains(name)) {
        Some(missing) => Err(LevelError::UnknownAnimation(missing.to_string())),
        None => Ok(()),
    }
}
