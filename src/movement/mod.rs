//! Movement domain: the per-tick character state machine.
//!
//! One chained pass per `Update` tick: sample input, probe contacts,
//! advance timers, then resolve velocity overrides in fixed priority
//! order (dash, then climb, then magnet, then base movement).

mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
mod systems;


pub use components::{
    Facing, GameLayer, Ground, MagnetTarget, MovementState, Player, Wall, WallContact,
};
pub use events::{MagnetPullStarted, MagnetPullStopped};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{
    apply_climb, apply_dash, apply_gravity, apply_horizontal_movement, apply_jump, apply_magnet,
    detect_ground, detect_walls, read_input, update_facing, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<MagnetPullStarted>()
            .add_message::<MagnetPullStopped>()
            .add_systems(Startup, (bootstrap::spawn_player, dev::spawn_test_room))
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    detect_walls,
                    update_timers,
                    apply_dash,
                    apply_horizontal_movement,
                    apply_jump,
                    apply_climb,
                    apply_magnet,
                    apply_gravity,
                    update_facing,
                )
                    .chain(),
            );
    }
}
