//! Per-frame ball stepper
//!
//! One call integrates acceleration into velocity, velocity into position,
//! then reflects each axis at most once. There is no sub-stepping: a large
//! `dt` parks the ball on the wall it crossed instead of simulating several
//! bounces.

use super::arena::{Arena, reflect_axis};
use super::clock::{FrameClock, TimeSource};
use super::state::Ball;
use crate::error::BallError;

/// What happened during a single step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    /// Seconds integrated
    pub dt: f32,
    /// Velocity x was reflected
    pub bounced_x: bool,
    /// Velocity y was reflected
    pub bounced_y: bool,
}

impl StepReport {
    pub fn bounced(&self) -> bool {
        self.bounced_x || self.bounced_y
    }
}

/// Advance the ball by the time elapsed on `clock` since its previous tick.
///
/// Inputs are not validated; see [`step_checked`].
pub fn step<S: TimeSource>(ball: Ball, clock: &mut FrameClock<S>) -> Ball {
    let dt = clock.tick();
    advance(ball, dt).0
}

/// Like [`step`], but rejects non-finite or negative extents first.
///
/// The clock is not ticked when validation fails.
pub fn step_checked<S: TimeSource>(
    ball: Ball,
    clock: &mut FrameClock<S>,
) -> Result<Ball, BallError> {
    ball.validate()?;
    Ok(step(ball, clock))
}

/// Advance the ball by an explicit `dt` inside the default arena
pub fn advance(ball: Ball, dt: f32) -> (Ball, StepReport) {
    advance_in(&Arena::default(), ball, dt)
}

/// Advance the ball by an explicit `dt` inside `arena`
pub fn advance_in(arena: &Arena, mut ball: Ball, dt: f32) -> (Ball, StepReport) {
    // Same scalar on both axes
    let dv = ball.acceleration * dt;
    ball.vel.x += dv;
    ball.vel.y += dv;

    ball.pos += ball.vel * dt;

    let (x, vx, bounced_x) = reflect_axis(ball.pos.x, ball.vel.x, arena.threshold_x(ball.width()));
    let (y, vy, bounced_y) = reflect_axis(ball.pos.y, ball.vel.y, arena.threshold_y(ball.height()));

    ball.pos.x = x;
    ball.pos.y = y;
    ball.vel.x = vx;
    ball.vel.y = vy;

    if bounced_x {
        log::trace!("bounce x at {:.2} (vx now {:.2})", x, vx);
    }
    if bounced_y {
        log::trace!("bounce y at {:.2} (vy now {:.2})", y, vy);
    }

    (
        ball,
        StepReport {
            dt,
            bounced_x,
            bounced_y,
        },
    )
}
