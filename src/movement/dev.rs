//! Movement domain: demo room for trying out the controller.
//!
//! Two floor sections with a gap between them for coyote jumps, a pair of
//! walls, and ledges spaced for single and double jumps. The edge ray starts
//! inside the player's own collider, so edge stops never trigger here.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Debug, Clone, Copy)]
enum BlockKind {
    Floor,
    Ledge,
    Wall,
}

struct Block {
    kind: BlockKind,
    center: Vec2,
    size: Vec2,
}

const fn block(kind: BlockKind, x: f32, y: f32, width: f32, height: f32) -> Block {
    Block {
        kind,
        center: Vec2::new(x, y),
        size: Vec2::new(width, height),
    }
}

const TEST_ROOM: &[Block] = &[
    block(BlockKind::Floor, -260.0, -200.0, 320.0, 40.0),
    block(BlockKind::Floor, 260.0, -200.0, 320.0, 40.0),
    block(BlockKind::Wall, -440.0, 50.0, 40.0, 540.0),
    block(BlockKind::Wall, 440.0, 50.0, 40.0, 540.0),
    block(BlockKind::Ledge, -250.0, -60.0, 140.0, 20.0),
    block(BlockKind::Ledge, 0.0, 40.0, 120.0, 20.0),
    block(BlockKind::Ledge, 250.0, 160.0, 140.0, 20.0),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for block in TEST_ROOM {
        let color = match block.kind {
            BlockKind::Floor => Color::srgb(0.4, 0.5, 0.4),
            BlockKind::Ledge => Color::srgb(0.5, 0.4, 0.3),
            BlockKind::Wall => Color::srgb(0.3, 0.3, 0.4),
        };

        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
        ));

        match block.kind {
            BlockKind::Floor | BlockKind::Ledge => entity.insert((Ground, ground_layers)),
            BlockKind::Wall => entity.insert((Wall, wall_layers)),
        };
    }

    info!("Spawned test room with {} blocks", TEST_ROOM.len());
}
