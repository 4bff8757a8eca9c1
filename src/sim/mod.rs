//! Ball simulation module
//!
//! Everything needed to step a ball lives here:
//! - No rendering or platform dependencies
//! - No global state (delta time comes from a caller-owned clock)
//! - Variable timestep, one reflection per axis per step

pub mod arena;
pub mod clock;
pub mod state;
pub mod step;

pub use arena::{Arena, reflect_axis};
pub use clock::{FrameClock, ManualTimeSource, SystemTimeSource, TimeSource};
pub use state::Ball;
pub use step::{StepReport, advance, advance_in, step, step_checked};
