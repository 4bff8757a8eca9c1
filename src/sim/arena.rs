//! Arena bounds and wall reflection
//!
//! The arena is an axis-aligned box anchored at the origin. A ball touches a
//! wall when its position leaves `[0, bound - extent]` on that axis.
//!
//! Note the pairing: the x bound (720) is checked against the ball's width and
//! the y bound (1280) against its height.

use serde::{Deserialize, Serialize};

use super::state::Ball;
use crate::consts::{ARENA_BOUND_X, ARENA_BOUND_Y};
use crate::error::{Axis, BallError};

/// Fixed rectangular play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub bound_x: f32,
    pub bound_y: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            bound_x: ARENA_BOUND_X,
            bound_y: ARENA_BOUND_Y,
        }
    }
}

impl Arena {
    pub fn new(bound_x: f32, bound_y: f32) -> Self {
        Self { bound_x, bound_y }
    }

    /// Largest x a ball of this width may occupy
    #[inline]
    pub fn threshold_x(&self, width: f32) -> f32 {
        self.bound_x - width
    }

    /// Largest y a ball of this height may occupy
    #[inline]
    pub fn threshold_y(&self, height: f32) -> f32 {
        self.bound_y - height
    }

    /// Check that both bounds are finite and non-negative.
    ///
    /// The x bound is reported against `Axis::Width`, the extent it pairs with.
    pub fn validate(&self) -> Result<(), BallError> {
        for (axis, value) in [(Axis::Width, self.bound_x), (Axis::Height, self.bound_y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(BallError::InvalidBound { axis, value });
            }
        }
        Ok(())
    }

    /// Check whether the ball lies fully inside the arena
    pub fn contains(&self, ball: &Ball) -> bool {
        let tx = self.threshold_x(ball.width());
        let ty = self.threshold_y(ball.height());
        ball.pos.x >= 0.0 && ball.pos.x <= tx && ball.pos.y >= 0.0 && ball.pos.y <= ty
    }
}

/// Reflect and clamp one axis.
///
/// Returns `(position, velocity, bounced)`. The velocity is negated once no
/// matter how far the position overshot. Clamping is `max(0, min(pos, threshold))`
/// so an inverted threshold collapses to 0 instead of panicking.
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, threshold: f32) -> (f32, f32, bool) {
    if pos < 0.0 || pos > threshold {
        (pos.min(threshold).max(0.0), -vel, true)
    } else {
        (pos, vel, false)
    }
}
