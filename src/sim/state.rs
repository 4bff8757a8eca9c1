//! Ball state
//!
//! The ball is owned by the caller. The stepper only reads and rewrites its
//! position and velocity; size and acceleration are never touched.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::*;
use crate::error::{Axis, BallError};

/// Kinematic state of a single ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner, arena-relative
    pub pos: Vec2,
    /// Width (x) and height (y), constant per ball
    pub size: Vec2,
    /// Velocity in units/s
    pub vel: Vec2,
    /// Scalar added to both velocity components every second
    #[serde(default)]
    pub acceleration: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(0.0, 0.0, BALL_WIDTH, BALL_HEIGHT)
    }
}

impl Ball {
    /// Stationary ball at (x, y)
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            vel: Vec2::ZERO,
            acceleration: 0.0,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vel = Vec2::new(vx, vy);
        self
    }

    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Check that both extents are finite and non-negative.
    ///
    /// A negative extent would push the threshold past the arena bound, and a
    /// NaN would poison every comparison in the reflect step.
    pub fn validate(&self) -> Result<(), BallError> {
        for (axis, value) in [(Axis::Width, self.size.x), (Axis::Height, self.size.y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(BallError::InvalidExtent { axis, value });
            }
        }
        Ok(())
    }

    /// Place a default-sized ball at a random in-bounds position, moving in a
    /// random direction.
    ///
    /// Fails if either arena bound is negative or not finite.
    pub fn spawn<R: Rng>(rng: &mut R, arena: &Arena) -> Result<Self, BallError> {
        arena.validate()?;

        let max_x = arena.threshold_x(BALL_WIDTH).max(0.0);
        let max_y = arena.threshold_y(BALL_HEIGHT).max(0.0);

        let x = rng.random_range(0.0..=max_x);
        let y = rng.random_range(0.0..=max_y);
        let speed = rng.random_range(SPAWN_MIN_SPEED..SPAWN_MAX_SPEED);
        let angle = rng.random_range(0.0..std::f32::consts::TAU);

        let mut ball = Self::new(x, y, BALL_WIDTH, BALL_HEIGHT);
        ball.vel = Vec2::from_angle(angle) * speed;
        Ok(ball)
    }
}
