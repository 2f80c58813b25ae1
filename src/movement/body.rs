//! Physics body abstraction.
//!
//! The controller never owns velocity or gravity scale. It reads and writes
//! them through this trait once per tick, so any rigid-body engine can sit
//! behind it. [`AvianBody`] is the avian2d implementation used by the plugin.

use avian2d::prelude::*;
use bevy::prelude::*;

/// The physics primitives a [`MovementController`](super::MovementController) needs.
pub trait PhysicsBody {
    /// Current linear velocity.
    fn velocity(&self) -> Vec2;

    /// Replace the linear velocity.
    fn set_velocity(&mut self, velocity: Vec2);

    /// Current gravity multiplier of the body.
    fn gravity_scale(&self) -> f32;

    /// Replace the gravity multiplier of the body.
    fn set_gravity_scale(&mut self, scale: f32);

    /// World gravity acting on the body, before its gravity scale.
    fn gravity(&self) -> Vec2;

    /// World position used as the origin of edge rays.
    fn position(&self) -> Vec2;

    /// Cast a ray and report whether anything was hit within `max_distance`.
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool;
}

/// Borrowed view over the avian2d components of one character.
pub struct AvianBody<'a, 'w, 's> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
    pub gravity: Vec2,
    pub position: Vec2,
    pub spatial_query: &'a SpatialQuery<'w, 's>,
}

impl PhysicsBody for AvianBody<'_, '_, '_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        // Solid ray with no exclusions: a ray starting inside the character's
        // own collider hits it at distance zero.
        self.spatial_query
            .cast_ray(
                origin,
                direction,
                max_distance,
                true,
                &SpatialQueryFilter::default(),
            )
            .is_some()
    }
}
