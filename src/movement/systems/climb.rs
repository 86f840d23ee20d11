//! Movement domain: wall climbing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Level-triggered: the input/probe pair decides the state fresh each
/// tick, with no entry or exit transitions to maintain.
pub(crate) fn apply_climb(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.is_dashing {
            state.is_climbing = false;
            continue;
        }

        let wants_climb = input.climb_held && state.foot_wall.supports_climb(input.axis.x);

        if wants_climb != state.is_climbing {
            debug!(
                "climb {}: foot_wall={:?}",
                if wants_climb { "start" } else { "end" },
                state.foot_wall
            );
        }
        state.is_climbing = wants_climb;

        if state.is_climbing {
            velocity.x = 0.0;
            velocity.y = tuning.climb_speed;
        }
    }
}
