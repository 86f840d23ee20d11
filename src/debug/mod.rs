//! Debug overlay for movement-state inspection.
//!
//! F1 toggles a text panel showing velocity, contact probes and ability
//! timers while tuning the feel of the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

/// Toggle the overlay with F1 or backtick
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !(keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote)) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;

    if debug_state.overlay_visible {
        commands.spawn((
            DebugInfoOverlay,
            Text::new("..."),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.9, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &LinearVelocity, &MovementState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }

    if let (Some((transform, velocity, state)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nGrounded: {} Wall: {:?} Foot: {:?}\nFacing: {:?} Walking: {}\nCoyote: {:.2} Buffer: {:.2}\nDash: {} ({:.2}, cd {:.2})\nClimb: {} Magnet: {}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            state.on_ground,
            state.on_wall,
            state.foot_wall,
            state.facing,
            state.is_walking,
            state.coyote_timer,
            state.jump_buffer_timer,
            state.is_dashing,
            state.dash_timer,
            state.dash_cooldown_timer,
            state.is_climbing,
            state.is_magnet_pulling,
        );
    }
}
