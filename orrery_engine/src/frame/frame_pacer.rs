/// Fixed frame-rate pacing.
///
/// After drawing, the loop sleeps for whatever is left of the frame budget.
/// A frame that ran over budget does not sleep at all.

use std::time::{Duration, Instant};
use crate::config::OrreryConfig;

#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame_duration: Duration,
}

impl FramePacer {
    pub fn new(frame_duration: Duration) -> Self {
        Self { frame_duration }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        Self::new(config.frame_duration())
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left in the budget after `elapsed`, zero when over budget
    pub fn remaining_after(&self, elapsed: Duration) -> Duration {
        self.frame_duration.saturating_sub(elapsed)
    }

    /// Time left in the budget of a frame started at `frame_start`
    pub fn remaining(&self, frame_start: Instant) -> Duration {
        self.remaining_after(frame_start.elapsed())
    }

    /// Sleep until the frame started at `frame_start` has used its budget.
    ///
    /// Returns the time slept.
    pub fn pace(&self, frame_start: Instant) -> Duration {
        let remaining = self.remaining(frame_start);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        remaining
    }
}

#[cfg(test)]
#[path = "frame_pacer_tests.rs"]
mod tests;
