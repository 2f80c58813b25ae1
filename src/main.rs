use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_controller::{content, core, movement};

/// Pixels per meter for the demo world.
const LENGTH_UNIT: f32 = 100.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Controller".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_length_unit(LENGTH_UNIT))
        .insert_resource(Gravity(Vec2::NEG_Y * 9.81 * LENGTH_UNIT))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin::default(),
            movement::MovementPlugin,
            movement::TestRoomPlugin,
        ))
        .run();
}
