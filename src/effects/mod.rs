//! Visual feedback driven by movement state: magnet aura and sprite
//! facing. Playback only; no gameplay decisions are made here.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{Facing, MagnetPullStarted, MagnetPullStopped, MovementState, Player};

/// Marker for the aura sprite shown while the magnet pull is active.
#[derive(Component, Debug)]
pub struct MagnetAura;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_magnet_aura, flip_player_sprite));
    }
}

/// Start/stop the aura on the pull's edge triggers.
fn toggle_magnet_aura(
    mut commands: Commands,
    mut started: MessageReader<MagnetPullStarted>,
    mut stopped: MessageReader<MagnetPullStopped>,
    auras: Query<Entity, With<MagnetAura>>,
) {
    for event in started.read() {
        commands.entity(event.player).with_children(|parent| {
            parent.spawn((
                MagnetAura,
                Sprite {
                    color: Color::srgba(0.5, 0.7, 1.0, 0.35),
                    custom_size: Some(Vec2::splat(64.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -1.0),
            ));
        });
    }

    for _ in stopped.read() {
        for aura in &auras {
            commands.entity(aura).despawn();
        }
    }
}

/// Mirror the player sprite to match the facing query.
fn flip_player_sprite(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}
