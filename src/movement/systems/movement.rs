//! Movement domain: per-frame controller updates and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AvianBody, JumpKind, MovementController, MovementInput, Player, TickInput,
};

pub(crate) fn tick_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &mut MovementController,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let tick_input = TickInput {
        horizontal: input.horizontal,
        jump_pressed: input.jump_just_pressed,
        jump_held: input.jump_held,
    };

    for (transform, mut controller, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            gravity: gravity.0,
            position: transform.translation.truncate(),
            spatial_query: &spatial_query,
        };

        let report = controller.tick(&mut body, dt, tick_input);

        match report.jump {
            Some(JumpKind::Ground) => debug!(
                "Ground jump: velocity={:?}, can_double_jump={}",
                velocity.0,
                controller.can_double_jump()
            ),
            Some(JumpKind::Double) => debug!("Double jump: velocity={:?}", velocity.0),
            None => {}
        }

        if report.flipped {
            debug!("Turned {:?}", controller.facing());
        }
    }
}

/// Mirror the sprite horizontally to match facing.
pub(crate) fn apply_facing_flip(mut query: Query<(&MovementController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        let flip = !controller.facing_right();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Draw each edge ray, red while an edge is detected.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_edge_rays(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementController), With<Player>>,
) {
    for (transform, controller) in &query {
        let origin = transform.translation.truncate();
        let direction = controller.facing().direction();
        let end = origin + *direction * controller.tuning().edge_detection_distance;
        let color = if controller.near_edge() {
            Color::srgb(1.0, 0.0, 0.0)
        } else {
            Color::srgb(0.0, 1.0, 0.0)
        };
        gizmos.line_2d(origin, end, color);
    }
}
