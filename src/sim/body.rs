//! Point-mass physics shared by every simulated entity
//!
//! Fixed-step Euler: one `update` call is one step, regardless of `dt`.
//! Forces are impulses; acceleration is cleared after each step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default velocity bound for bodies that don't override it
pub const DEFAULT_VELOCITY_LIMIT: f32 = 1000.0;

/// Point-mass kinematics with per-axis velocity limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub velocity_min: Vec2,
    pub velocity_max: Vec2,
    pub mass: f32,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            velocity_min: Vec2::splat(-DEFAULT_VELOCITY_LIMIT),
            velocity_max: Vec2::splat(DEFAULT_VELOCITY_LIMIT),
            mass: 1.0,
        }
    }
}

impl PhysicsBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Same body with custom velocity bounds
    pub fn with_velocity_bounds(mut self, min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.cmple(max).all(), "velocity bounds inverted");
        self.velocity_min = min;
        self.velocity_max = max;
        self
    }

    /// Accumulate `force / mass` for the next step
    pub fn apply_force(&mut self, force: Vec2) {
        debug_assert!(self.mass > 0.0, "mass must be positive");
        self.acceleration += force / self.mass;
    }

    /// Vertical force proportional to mass (negative pulls down)
    pub fn apply_gravity(&mut self, g: f32) {
        self.apply_force(Vec2::new(0.0, g * self.mass));
    }

    /// One integration step. `dt` is accepted for the frame contract but
    /// does not scale the step.
    pub fn update(&mut self, _dt: f32) {
        self.velocity = (self.velocity + self.acceleration).clamp(self.velocity_min, self.velocity_max);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    /// Put the body at rest at `position`
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }
}
