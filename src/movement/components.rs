//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Contacts currently touching a character, keyed by the other collider.
///
/// The normal is stored as seen from the character at the moment the contact
/// started, so the exit hook gets the same value even after avian has
/// dropped the contact data.
#[derive(Component, Debug, Default)]
pub struct GroundContacts {
    contacts: Vec<(Entity, f32)>,
}

impl GroundContacts {
    /// Record a new contact. A repeated start for the same entity replaces the normal.
    pub fn begin(&mut self, other: Entity, normal_y: f32) {
        match self.contacts.iter_mut().find(|(entity, _)| *entity == other) {
            Some(contact) => contact.1 = normal_y,
            None => self.contacts.push((other, normal_y)),
        }
    }

    /// Forget a contact and return the normal it started with.
    pub fn end(&mut self, other: Entity) -> Option<f32> {
        let index = self.contacts.iter().position(|(entity, _)| *entity == other)?;
        Some(self.contacts.swap_remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
