//! Movement domain: magnetic pull toward a lodestone target.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    MagnetPullStarted, MagnetPullStopped, MagnetTarget, MovementInput, MovementState,
    MovementTuning, Player,
};

pub(crate) fn apply_magnet(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    targets: Query<&Transform, (With<MagnetTarget>, Without<Player>)>,
    mut query: Query<(Entity, &Transform, &mut MovementState, &mut LinearVelocity), With<Player>>,
    mut started: MessageWriter<MagnetPullStarted>,
    mut stopped: MessageWriter<MagnetPullStopped>,
) {
    let dt = time.delta_secs();

    // A missing target short-circuits the pull entirely.
    let target_pos = targets.iter().next().map(|t| t.translation.truncate());

    for (entity, transform, mut state, mut velocity) in &mut query {
        // Dash and climb outrank the pull for the vertical axis.
        let active = input.magnet_held
            && target_pos.is_some()
            && !state.is_dashing
            && !state.is_climbing;

        if active && !state.is_magnet_pulling {
            started.write(MagnetPullStarted { player: entity });
            debug!("magnet pull start");
        } else if !active && state.is_magnet_pulling {
            stopped.write(MagnetPullStopped { player: entity });
            debug!("magnet pull end");
        }
        state.is_magnet_pulling = active;

        if !active {
            continue;
        }

        let Some(target) = target_pos else {
            continue;
        };

        let offset = target - transform.translation.truncate();
        let distance = offset.length();
        let pull = tuning.magnet_pull(distance);
        let direction = if distance > f32::EPSILON {
            offset / distance
        } else {
            Vec2::ZERO
        };

        // Continuous force per unit mass, integrated onto the velocity the
        // same way the manual gravity is.
        velocity.0 += direction * pull * dt;
    }
}
