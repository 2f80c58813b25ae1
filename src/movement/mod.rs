//! Movement domain: platformer character controller and its bevy wiring.

mod body;
mod bootstrap;
mod components;
mod controller;
mod dev;
mod resources;
mod systems;


pub use body::{AvianBody, PhysicsBody};
pub use components::{Facing, GameLayer, Ground, GroundContacts, Player, Wall};
pub use controller::{
    APEX_SPEED_EPSILON, GROUND_NORMAL_THRESHOLD, JumpKind, MovementController, TickInput,
    TickReport,
};
pub use resources::{MovementInput, MovementTuning, TuningError};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_facing_flip, read_input, tick_controllers, track_ground_contacts,
};

/// Character controller plugin. Expects avian2d's `PhysicsPlugins` to be added.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementTuning>()
            .init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(PostStartup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    track_ground_contacts,
                    tick_controllers,
                    apply_facing_flip,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            systems::draw_edge_rays.after(tick_controllers),
        );
    }
}

/// Demo level used by the binary.
pub struct TestRoomPlugin;

impl Plugin for TestRoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room);
    }
}
