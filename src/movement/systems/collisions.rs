//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player, WallContact};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not walls or the player)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let ray_direction = Dir2::new(tuning.ground_direction).unwrap_or(Dir2::NEG_Y);

        let hit = spatial_query.cast_ray(
            ray_origin,
            ray_direction,
            tuning.ground_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("landed");
        } else if !state.on_ground && was_on_ground {
            debug!("left ground");
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut state) in &mut query {
        let player_half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let center = transform.translation.truncate();
        let reach = player_half_width + tuning.wall_distance;

        state.on_wall = probe_sides(&spatial_query, center, reach, &wall_filter);

        // Climb probes sit below body center so the top of a ledge does
        // not read as a climbable wall.
        let feet = center - Vec2::new(0.0, tuning.foot_offset);
        state.foot_wall = probe_sides(&spatial_query, feet, reach, &wall_filter);
    }
}

fn probe_sides(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    reach: f32,
    filter: &SpatialQueryFilter,
) -> WallContact {
    let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, reach, true, filter);
    let right_hit = spatial_query.cast_ray(origin, Dir2::X, reach, true, filter);

    match (left_hit.is_some(), right_hit.is_some()) {
        (true, false) => WallContact::Left,
        (false, true) => WallContact::Right,
        _ => WallContact::None,
    }
}
