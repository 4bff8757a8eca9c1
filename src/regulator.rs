//! Frame pacing
//!
//! Hosts call `start_update` at the top of a frame and `delay` at the bottom;
//! the regulator sleeps off whatever is left of the frame budget.

use std::time::{Duration, Instant};

use crate::consts::DEFAULT_FRAME_RATE;
use crate::error::BallError;

#[derive(Debug, Clone)]
pub struct LoopRegulator {
    rate: u32,
    desired_delay: Duration,
    start: Option<Instant>,
    end: Option<Instant>,
    elapsed: Duration,
}

impl Default for LoopRegulator {
    fn default() -> Self {
        Self {
            rate: DEFAULT_FRAME_RATE,
            desired_delay: Duration::from_secs(1) / DEFAULT_FRAME_RATE,
            start: None,
            end: None,
            elapsed: Duration::ZERO,
        }
    }
}

impl LoopRegulator {
    pub fn new(rate: u32) -> Result<Self, BallError> {
        let mut regulator = Self::default();
        regulator.set_rate(rate)?;
        Ok(regulator)
    }

    /// Change the target rate (frames per second)
    pub fn set_rate(&mut self, rate: u32) -> Result<(), BallError> {
        if rate == 0 {
            return Err(BallError::InvalidRate(rate));
        }
        self.rate = rate;
        self.desired_delay = Duration::from_secs(1) / rate;
        Ok(())
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Frame budget at the current rate
    pub fn desired_delay(&self) -> Duration {
        self.desired_delay
    }

    /// Time spent in the last measured frame
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn start_update(&mut self) {
        self.end = None;
        self.start = Some(Instant::now());
    }

    /// Stop the frame timer and return the time spent since `start_update`
    pub fn end_update(&mut self) -> Duration {
        let end = Instant::now();
        self.elapsed = self
            .start
            .map(|start| end.saturating_duration_since(start))
            .unwrap_or_default();
        self.end = Some(end);
        self.elapsed
    }

    /// Budget left in the current frame (zero when over budget)
    pub fn remaining(&self) -> Duration {
        self.desired_delay.saturating_sub(self.elapsed)
    }

    /// Sleep for the rest of the frame budget and return how long was slept.
    ///
    /// Ends the frame first if `end_update` was not called.
    pub fn delay(&mut self) -> Duration {
        if self.end.is_none() {
            self.end_update();
        }

        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        } else {
            log::debug!(
                "frame over budget: {:?} > {:?}",
                self.elapsed,
                self.desired_delay
            );
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_rate() {
        let regulator = LoopRegulator::default();
        assert_eq!(regulator.rate(), 30);
        assert_eq!(regulator.desired_delay(), Duration::from_secs(1) / 30);
        assert_eq!(regulator.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert!(matches!(LoopRegulator::new(0), Err(BallError::InvalidRate(0))));

        let mut regulator = LoopRegulator::new(60).unwrap();
        assert!(regulator.set_rate(0).is_err());
        assert_eq!(regulator.rate(), 60);
    }

    #[test]
    fn test_end_update_measures_elapsed() {
        let mut regulator = LoopRegulator::new(60).unwrap();
        regulator.start_update();
        thread::sleep(Duration::from_millis(20));
        let elapsed = regulator.end_update();
        assert!(elapsed >= Duration::from_millis(20));
        assert_eq!(regulator.elapsed(), elapsed);
    }

    #[test]
    fn test_over_budget_has_no_delay() {
        let mut regulator = LoopRegulator::new(1000).unwrap();
        regulator.start_update();
        thread::sleep(Duration::from_millis(5));
        regulator.end_update();
        assert_eq!(regulator.remaining(), Duration::ZERO);
        assert_eq!(regulator.delay(), Duration::ZERO);
    }

    #[test]
    fn test_delay_fills_frame() {
        let mut regulator = LoopRegulator::new(100).unwrap();
        regulator.start_update();
        let before = Instant::now();
        // No explicit end_update: delay closes the frame itself
        let slept = regulator.delay();
        assert!(slept <= regulator.desired_delay());
        assert!(before.elapsed() >= slept);
    }
}
