//! Movement domain: player bootstrap from the loaded movement tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundContacts, MovementController, MovementTuning, Player,
};

/// Spawn the controlled character from the current [`MovementTuning`].
/// Invalid tuning is logged and replaced with the defaults.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    gravity: Res<Gravity>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = match MovementController::new(tuning.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("{}, spawning player with default tuning", e);
            match MovementController::new(MovementTuning::default()) {
                Ok(controller) => controller,
                Err(e) => {
                    error!("Default movement tuning rejected: {}", e);
                    return;
                }
            }
        }
    };

    info!(
        "Spawning player: move_speed={}, jump_force={}, coyote={}s, buffer={}s",
        controller.tuning().move_speed,
        controller.tuning().jump_force,
        controller.tuning().coyote_duration,
        controller.tuning().jump_buffer_duration
    );
    debug!(
        "Single jump height: {:.1}",
        controller.tuning().single_jump_height(gravity.0.length())
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller, GroundContacts::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
