//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Distance below which the magnet pull stops dividing and saturates.
const MAGNET_EPSILON: f32 = 0.05;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Peak height of a full jump arc.
    pub apex_height: f32,
    /// Time from launch to the jump apex.
    pub apex_time: f32,
    /// Most negative vertical velocity allowed while falling.
    pub terminal_speed: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Direction the ground probe is cast in, normally straight down.
    /// Set in code at startup, not read from the data file.
    #[serde(skip, default = "default_ground_direction")]
    pub ground_direction: Vec2,
    /// Length of the ground probe beyond the collider.
    pub ground_distance: f32,
    /// Horizontal probe length beyond the collider's side.
    pub wall_distance: f32,
    /// How far below body center the climb probes are cast.
    pub foot_offset: f32,
    /// Vertical ascent speed while climbing.
    pub climb_speed: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    /// Numerator of the inverse-square pull.
    pub magnet_strength: f32,
    /// Upper bound on the pull acceleration.
    pub magnet_max_pull: f32,
}

fn default_ground_direction() -> Vec2 {
    Vec2::NEG_Y
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            apex_height: 128.0,
            apex_time: 0.4,
            terminal_speed: -900.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            ground_direction: Vec2::NEG_Y,
            ground_distance: 4.0,
            wall_distance: 6.0,
            foot_offset: 18.0,
            climb_speed: 220.0,
            dash_speed: 900.0,
            dash_time: 0.16,
            dash_cooldown: 0.35,
            magnet_strength: 6.0e6,
            magnet_max_pull: 1600.0,
        }
    }
}

impl MovementTuning {
    /// Launch velocity that peaks at `apex_height` after `apex_time`.
    pub fn jump_velocity(&self) -> f32 {
        2.0 * self.apex_height / self.apex_time
    }

    /// Downward acceleration matching the jump arc: the launch velocity
    /// decays to zero exactly at the apex.
    pub fn gravity(&self) -> f32 {
        2.0 * self.apex_height / (self.apex_time * self.apex_time)
    }

    /// Clamp a vertical velocity to the terminal fall speed.
    pub fn clamp_fall(&self, vy: f32) -> f32 {
        vy.max(self.terminal_speed)
    }

    /// Inverse-square pull magnitude at `distance`, saturated to
    /// `magnet_max_pull` near zero so the division never diverges.
    pub fn magnet_pull(&self, distance: f32) -> f32 {
        if distance <= MAGNET_EPSILON {
            return self.magnet_max_pull;
        }
        (self.magnet_strength / (distance * distance)).clamp(0.0, self.magnet_max_pull)
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
    pub climb_held: bool,
    pub magnet_held: bool,
}
