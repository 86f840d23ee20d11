//! Movement domain: timed dash override.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Dash sub-state machine: Idle -> Dashing -> Idle. While dashing the
/// velocity is reasserted every tick and the base movement systems yield.
/// The tick the timer runs out hands the saved momentum back and still
/// counts as dashing, so nothing downstream clobbers the restore; the
/// flag clears on the next pass.
pub(crate) fn apply_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        // Finish a dash whose final tick already restored momentum.
        if state.is_dashing && state.dash_timer <= 0.0 {
            state.is_dashing = false;
            debug!("dash end: restored vx={}", velocity.x);
        }

        if input.dash_just_pressed && !state.is_dashing && state.dash_cooldown_timer <= 0.0 {
            state.is_dashing = true;
            state.dash_timer = tuning.dash_time;
            state.dash_cooldown_timer = tuning.dash_cooldown;
            state.dash_saved_vx = velocity.x;
            debug!(
                "dash start: facing={:?}, saved vx={}",
                state.facing, velocity.x
            );
        }

        if !state.is_dashing {
            continue;
        }

        // No cancellation: the dash always runs its full duration.
        state.dash_timer -= dt;
        if state.dash_timer <= 0.0 {
            // Momentum handback; vertical stays where the dash left it.
            velocity.x = state.dash_saved_vx;
        } else {
            velocity.x = tuning.dash_speed * state.facing.sign();
            velocity.y = 0.0;
        }
    }
}
