//! 2D platformer character controller.
//!
//! [`movement::MovementController`] turns per-frame input into horizontal
//! velocity, jump impulses and facing, with jump buffering, coyote time,
//! variable jump height, apex hang-time, edge stops and a double jump.
//! The controller talks to physics only through [`movement::PhysicsBody`];
//! [`movement::MovementPlugin`] wires it to bevy and avian2d.

pub mod content;
pub mod core;
pub mod movement;
