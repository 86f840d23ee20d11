//! Movement domain: locomotion systems for timers and base physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::WALK_EPSILON;
use crate::movement::{Facing, MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn update_timers(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        // Coyote window refills on the ground and drains in the air.
        if state.on_ground {
            state.coyote_timer = tuning.coyote_time;
        } else {
            state.coyote_timer -= dt;
        }

        // Jump buffer counts down after a press.
        if state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer -= dt;
        }

        // Dash cooldown runs regardless of the dash itself.
        if state.dash_cooldown_timer > 0.0 {
            state.dash_cooldown_timer -= dt;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        if state.is_dashing {
            continue;
        }

        // Climbing pins the character to the wall.
        if state.is_climbing {
            velocity.x = 0.0;
            continue;
        }

        let mut vx = input.axis.x * tuning.move_speed;

        // An airborne push into a wall goes nowhere this tick.
        if !state.on_ground && state.on_wall.blocks(input.axis.x) {
            vx = 0.0;
        }

        velocity.x = vx;
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.is_dashing {
            continue;
        }

        // Buffer jump input
        if input.jump_just_pressed {
            state.jump_buffer_timer = tuning.jump_buffer_time;
        }

        let wants_jump = state.jump_buffer_timer > 0.0;
        let can_jump = state.on_ground || state.coyote_timer > 0.0;

        if wants_jump && can_jump {
            // Instantaneous launch, not an accumulated impulse.
            velocity.y = tuning.jump_velocity();
            state.jump_buffer_timer = 0.0;
            state.coyote_timer = 0.0;
            debug!("jump: launch vy={}", velocity.y);
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        // Dash, climb and magnet own the vertical axis while active.
        let suspended = state.is_dashing || state.is_climbing || state.is_magnet_pulling;

        if !state.on_ground && !suspended {
            velocity.y -= tuning.gravity() * dt;
        }

        // Terminal clamp runs after gravity so it always wins.
        velocity.y = tuning.clamp_fall(velocity.y);
    }
}

pub(crate) fn update_facing(
    mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>,
) {
    for (mut state, velocity) in &mut query {
        // Facing is sticky: zero horizontal velocity keeps the last value.
        if velocity.x > 0.0 {
            state.facing = Facing::Right;
        } else if velocity.x < 0.0 {
            state.facing = Facing::Left;
        }

        state.is_walking = velocity.x.abs() > WALK_EPSILON;
    }
}
