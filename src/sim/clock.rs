//! Frame clock
//!
//! Delta time comes from a caller-owned [`FrameClock`] rather than a global
//! "previous time" variable, so every ball (or thread) can carry its own.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source, reporting an offset from its own epoch
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Wall-clock source backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    epoch: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Hand-driven source for tests and replays.
///
/// Clones share the same reading, so a test can keep one handle and move the
/// other into a [`FrameClock`].
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: Rc<Cell<Duration>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `secs` seconds.
    ///
    /// Negative or NaN input is ignored; an overflowing step saturates.
    pub fn advance(&self, secs: f32) {
        let step = match Duration::try_from_secs_f32(secs) {
            Ok(step) => step,
            Err(_) if secs > 0.0 => Duration::MAX,
            Err(_) => return,
        };
        self.now.set(self.now.get().saturating_add(step));
    }

    /// Jump to an absolute reading (may go backwards)
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Tracks the instant of the previous step and hands out delta times
#[derive(Debug, Clone)]
pub struct FrameClock<S: TimeSource> {
    source: S,
    previous: Duration,
}

impl FrameClock<SystemTimeSource> {
    /// Clock on the system time source, stamped at construction
    pub fn system() -> Self {
        Self::new(SystemTimeSource::new())
    }
}

impl Default for FrameClock<SystemTimeSource> {
    fn default() -> Self {
        Self::system()
    }
}

impl<S: TimeSource> FrameClock<S> {
    pub fn new(source: S) -> Self {
        let previous = source.now();
        Self { source, previous }
    }

    /// Seconds since the previous tick (or construction), then re-stamp.
    ///
    /// Never negative: a reading behind the stored instant yields 0 and the
    /// stored instant is kept.
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now();
        let dt = now.saturating_sub(self.previous);
        self.previous = self.previous.max(now);
        dt.as_secs_f32()
    }

    /// Re-stamp without producing a delta (e.g. after a pause)
    pub fn reset(&mut self) {
        self.previous = self.source.now();
    }

    /// Instant of the previous tick
    pub fn previous(&self) -> Duration {
        self.previous
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
