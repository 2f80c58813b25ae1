//! Movement domain: ground contact tracking from avian collision messages.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{GroundContacts, MovementController};

/// Contact normal of the pair as seen from `character`, pointing away from the other collider.
fn normal_y_towards(collisions: &Collisions, character: Entity, other: Entity) -> Option<f32> {
    let pair = collisions.get(character, other)?;
    let manifold = pair.manifolds.first()?;

    // Manifold normals point from collider1 to collider2.
    if pair.collider1 == character {
        Some(-manifold.normal.y)
    } else {
        Some(manifold.normal.y)
    }
}

pub(crate) fn track_ground_contacts(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    collisions: Collisions,
    mut query: Query<(&mut MovementController, &mut GroundContacts)>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (character, other) in pairs {
            let Ok((mut controller, mut contacts)) = query.get_mut(character) else {
                continue;
            };

            let Some(normal_y) = normal_y_towards(&collisions, character, other) else {
                debug!("Contact start without manifold data: {:?} -> {:?}", character, other);
                continue;
            };

            let was_grounded = controller.is_grounded();
            contacts.begin(other, normal_y);
            controller.on_ground_contact_enter(normal_y);

            if controller.is_grounded() && !was_grounded {
                debug!("Landed: normal_y={:.2}, contacts={}", normal_y, contacts.len());
            }
        }
    }

    for event in ended.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (character, other) in pairs {
            let Ok((mut controller, mut contacts)) = query.get_mut(character) else {
                continue;
            };

            let Some(normal_y) = contacts.end(other) else {
                continue;
            };

            let was_grounded = controller.is_grounded();
            controller.on_ground_contact_exit(normal_y);

            if was_grounded && !controller.is_grounded() {
                debug!("Left ground: normal_y={:.2}, contacts={}", normal_y, contacts.len());
            }
        }
    }
}
