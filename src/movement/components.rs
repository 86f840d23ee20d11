//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Horizontal speed below which the character counts as standing still.
pub(crate) const WALK_EPSILON: f32 = 0.1;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for the entity the magnetic pull drags the player toward.
/// At most one is expected; with none present the pull is a no-op.
#[derive(Component, Debug)]
pub struct MagnetTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sign of the facing direction: +1 right, -1 left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// Whether a wall on this side blocks movement in `direction`
    /// (the sign of the requested horizontal axis).
    pub fn blocks(self, direction: f32) -> bool {
        match self {
            WallContact::None => false,
            WallContact::Left => direction < 0.0,
            WallContact::Right => direction > 0.0,
        }
    }

    /// Whether this contact supports climbing given the held horizontal
    /// axis: the pressed side must match, and with no horizontal input a
    /// wall on either side counts.
    pub fn supports_climb(self, axis_x: f32) -> bool {
        match self {
            WallContact::None => false,
            WallContact::Left => axis_x <= WALK_EPSILON,
            WallContact::Right => axis_x >= -WALK_EPSILON,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    /// Wall contact probed at body center; blocks airborne movement.
    pub on_wall: WallContact,
    /// Wall contact probed at foot level; feeds climb detection.
    pub foot_wall: WallContact,
    pub facing: Facing,
    /// Cached each tick from horizontal velocity, for animation/UI.
    pub is_walking: bool,
    /// Counts down from `coyote_time` after leaving the ground.
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub is_dashing: bool,
    pub dash_timer: f32,
    pub dash_cooldown_timer: f32,
    /// Horizontal velocity captured at dash start, restored at dash end.
    pub dash_saved_vx: f32,
    pub is_climbing: bool,
    pub is_magnet_pulling: bool,
}

impl MovementState {
    /// Placeholder until a health/hazard system exists.
    pub fn is_dead(&self) -> bool {
        false
    }
}
