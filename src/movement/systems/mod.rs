//! Movement domain: system modules for locomotion updates.

pub(crate) mod climb;
pub(crate) mod collisions;
pub(crate) mod dash;
pub(crate) mod input;
pub(crate) mod magnet;
pub(crate) mod movement;

pub(crate) use climb::apply_climb;
pub(crate) use collisions::{detect_ground, detect_walls};
pub(crate) use dash::apply_dash;
pub(crate) use input::read_input;
pub(crate) use magnet::apply_magnet;
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, update_facing, update_timers,
};
