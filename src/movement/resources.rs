//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-session movement configuration. Fixed once a controller is built.
#[derive(Resource, Reflect, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed at full input.
    pub move_speed: f32,
    /// Vertical velocity set by a jump.
    pub jump_force: f32,
    /// Extra gravity factor while rising with the jump button released.
    pub low_jump_multiplier: f32,
    /// Gravity scale applied while at the apex of a jump.
    pub apex_gravity_multiplier: f32,
    /// Horizontal speed factor while at the apex of a jump.
    pub apex_horizontal_acceleration_factor: f32,
    /// Seconds a jump press stays buffered.
    pub jump_buffer_duration: f32,
    /// Seconds after leaving the ground during which a ground jump is still allowed.
    pub coyote_duration: f32,
    /// Lowest allowed vertical velocity (negative, downwards).
    pub max_fall_speed: f32,
    /// Length of the forward ray used to detect edges.
    pub edge_detection_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 5.0,
            low_jump_multiplier: 2.0,
            apex_gravity_multiplier: 0.5,
            apex_horizontal_acceleration_factor: 1.5,
            jump_buffer_duration: 0.2,
            coyote_duration: 0.2,
            max_fall_speed: -10.0,
            edge_detection_distance: 0.1,
        }
    }
}

impl MovementTuning {
    /// Check the tuning for values no controller can run with.
    /// Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("low_jump_multiplier", self.low_jump_multiplier),
            ("apex_gravity_multiplier", self.apex_gravity_multiplier),
            (
                "apex_horizontal_acceleration_factor",
                self.apex_horizontal_acceleration_factor,
            ),
            ("jump_buffer_duration", self.jump_buffer_duration),
            ("coyote_duration", self.coyote_duration),
            ("max_fall_speed", self.max_fall_speed),
            ("edge_detection_distance", self.edge_detection_distance),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::new(field, value, "must be finite"));
            }
        }

        let non_negative = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("jump_buffer_duration", self.jump_buffer_duration),
            ("coyote_duration", self.coyote_duration),
            ("edge_detection_distance", self.edge_detection_distance),
        ];

        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::new(field, value, "must not be negative"));
            }
        }

        if self.low_jump_multiplier < 1.0 {
            return Err(TuningError::new(
                "low_jump_multiplier",
                self.low_jump_multiplier,
                "must be at least 1 (releasing jump never pushes upwards)",
            ));
        }

        let apex = [
            ("apex_gravity_multiplier", self.apex_gravity_multiplier),
            (
                "apex_horizontal_acceleration_factor",
                self.apex_horizontal_acceleration_factor,
            ),
        ];

        for (field, value) in apex {
            if value < 0.0 {
                return Err(TuningError::new(field, value, "must not be negative"));
            }
        }

        if self.max_fall_speed > 0.0 {
            return Err(TuningError::new(
                "max_fall_speed",
                self.max_fall_speed,
                "must be zero or negative (downwards)",
            ));
        }

        Ok(())
    }

    /// Height reached by a single full-hold jump under the given gravity magnitude.
    /// Uses h = v² / (2g) and ignores the apex hang-time.
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }
}

/// Error returned when a tuning value is out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl TuningError {
    fn new(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self {
            field,
            value,
            reason,
        }
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid movement tuning: {} = {} ({})",
            self.field, self.value, self.reason
        )
    }
}

impl std::error::Error for TuningError {}

/// Input sampled once per frame for the controlled character.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}
