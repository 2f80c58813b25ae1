//! Movement domain: the per-tick movement and jump state machine.
//!
//! One [`MovementController`] exists per character. Each frame the host calls
//! [`MovementController::tick`] with the sampled input and a [`PhysicsBody`];
//! ground contacts arrive between ticks through the contact hooks.

use bevy::prelude::*;

use crate::movement::{Facing, MovementTuning, PhysicsBody, TuningError};

/// Below this vertical speed an airborne character counts as being at the apex.
pub const APEX_SPEED_EPSILON: f32 = 0.1;

/// Contacts whose normal Y is above this count as ground.
pub const GROUND_NORMAL_THRESHOLD: f32 = 0.5;

/// Input for a single tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Horizontal axis, clamped to [-1, 1].
    pub horizontal: f32,
    /// Jump button went down this frame.
    pub jump_pressed: bool,
    /// Jump button is currently down.
    pub jump_held: bool,
}

/// Which jump a tick performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Grounded or coyote-time jump.
    Ground,
    /// Airborne jump consuming the double jump.
    Double,
}

/// What happened during a tick, for logging and animation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub jump: Option<JumpKind>,
    pub flipped: bool,
}

#[derive(Component, Debug, Clone)]
pub struct MovementController {
    tuning: MovementTuning,
    grounded: bool,
    facing: Facing,
    at_apex: bool,
    can_double_jump: bool,
    jump_buffer_remaining: f32,
    coyote_remaining: f32,
    near_edge: bool,
}

impl MovementController {
    /// Build a controller for a freshly spawned character.
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            grounded: false,
            facing: Facing::Right,
            at_apex: false,
            can_double_jump: false,
            jump_buffer_remaining: 0.0,
            coyote_remaining: 0.0,
            near_edge: false,
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    pub fn at_apex(&self) -> bool {
        self.at_apex
    }

    pub fn can_double_jump(&self) -> bool {
        self.can_double_jump
    }

    pub fn jump_buffer_remaining(&self) -> f32 {
        self.jump_buffer_remaining
    }

    pub fn coyote_remaining(&self) -> f32 {
        self.coyote_remaining
    }

    pub fn near_edge(&self) -> bool {
        self.near_edge
    }

    /// Advance the controller by one simulation step.
    ///
    /// Velocity is read from `body` once and written back once; the gravity
    /// scale is written every tick.
    pub fn tick(
        &mut self,
        body: &mut impl PhysicsBody,
        delta_secs: f32,
        input: TickInput,
    ) -> TickReport {
        let dt = if delta_secs.is_finite() {
            delta_secs.max(0.0)
        } else {
            0.0
        };
        let horizontal = if input.horizontal.is_nan() {
            0.0
        } else {
            input.horizontal.clamp(-1.0, 1.0)
        };

        let mut report = TickReport::default();
        let mut velocity = body.velocity();

        // Horizontal movement; input towards a detected edge is ignored.
        if !self.near_edge || horizontal == 0.0 {
            let speed = if self.at_apex {
                self.tuning.move_speed * self.tuning.apex_horizontal_acceleration_factor
            } else {
                self.tuning.move_speed
            };
            velocity.x = horizontal * speed;

            let wants = if horizontal > 0.0 {
                Some(Facing::Right)
            } else if horizontal < 0.0 {
                Some(Facing::Left)
            } else {
                None
            };
            if let Some(facing) = wants.filter(|facing| *facing != self.facing) {
                self.facing = facing;
                report.flipped = true;
            }
        }

        if input.jump_pressed {
            self.jump_buffer_remaining = self.tuning.jump_buffer_duration;
        }

        // Variable jump height
        if velocity.y > 0.0 && !input.jump_held {
            velocity.y += body.gravity().y * (self.tuning.low_jump_multiplier - 1.0) * dt;
        }

        if !self.grounded && velocity.y.abs() < APEX_SPEED_EPSILON {
            self.at_apex = true;
            body.set_gravity_scale(self.tuning.apex_gravity_multiplier);
        } else {
            self.at_apex = false;
            body.set_gravity_scale(1.0);
        }

        if self.jump_buffer_remaining > 0.0 {
            self.jump_buffer_remaining = (self.jump_buffer_remaining - dt).max(0.0);

            if self.grounded || self.coyote_remaining > 0.0 {
                self.jump(&mut velocity);
                self.jump_buffer_remaining = 0.0;
                self.can_double_jump = true;
                report.jump = Some(JumpKind::Ground);
            } else if self.can_double_jump && !self.grounded {
                self.jump(&mut velocity);
                self.jump_buffer_remaining = 0.0;
                self.can_double_jump = false;
                report.jump = Some(JumpKind::Double);
            }
        }

        if self.grounded {
            self.coyote_remaining = self.tuning.coyote_duration;
            self.can_double_jump = true;
        } else {
            self.coyote_remaining = (self.coyote_remaining - dt).max(0.0);
        }

        if velocity.y < self.tuning.max_fall_speed {
            velocity.y = self.tuning.max_fall_speed;
        }

        body.set_velocity(velocity);

        // True when the ray finds nothing ahead.
        let hit = body.cast_ray(
            body.position(),
            self.facing.direction(),
            self.tuning.edge_detection_distance,
        );
        self.near_edge = !hit;

        report
    }

    fn jump(&mut self, velocity: &mut Vec2) {
        velocity.y = self.tuning.jump_force;
        self.grounded = false;
        self.coyote_remaining = 0.0;
    }

    /// Collision-enter hook. Only upward-facing contacts land the character.
    pub fn on_ground_contact_enter(&mut self, contact_normal_y: f32) {
        if contact_normal_y > GROUND_NORMAL_THRESHOLD {
            self.grounded = true;
        }
    }

    /// Collision-exit hook. Only upward-facing contacts unground the character.
    pub fn on_ground_contact_exit(&mut self, contact_normal_y: f32) {
        if contact_normal_y > GROUND_NORMAL_THRESHOLD {
            self.grounded = false;
        }
    }
}
