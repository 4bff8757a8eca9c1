//! Bouncing Ball - a single ball stepped inside a fixed rectangular arena
//!
//! Core modules:
//! - `sim`: Ball state, arena bounds, frame clock and the stepper itself
//! - `regulator`: Frame pacing for hosts that drive the stepper
//! - `settings`: JSON-backed host configuration
//! - `error`: Validation and I/O errors

pub mod error;
pub mod regulator;
pub mod settings;
pub mod sim;

pub use error::BallError;
pub use regulator::LoopRegulator;
pub use settings::Settings;

/// Arena configuration constants
pub mod consts {
    /// Horizontal bound, paired with the ball's width
    pub const ARENA_BOUND_X: f32 = 720.0;
    /// Vertical bound, paired with the ball's height
    pub const ARENA_BOUND_Y: f32 = 1280.0;

    /// Default ball extents
    pub const BALL_WIDTH: f32 = 16.0;
    pub const BALL_HEIGHT: f32 = 16.0;

    /// Spawn speed range (units/s) for randomly placed balls
    pub const SPAWN_MIN_SPEED: f32 = 100.0;
    pub const SPAWN_MAX_SPEED: f32 = 300.0;

    /// Default host frame rate
    pub const DEFAULT_FRAME_RATE: u32 = 30;
}
