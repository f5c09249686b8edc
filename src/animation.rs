/// Count-up pacing for the stats screen
///
/// The stats front end does not jump straight to the final numbers; it
/// counts up from zero over a fixed duration. This module is the pacing
/// behind that effect, reduced to a pure function of elapsed time and
/// target value so any timer loop can drive it.

use std::time::Duration;

/// How long a count-up takes by default
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// How often a driving timer should redraw
pub const FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// A linear count-up from zero to a target value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    duration: Duration,
}

impl CountUp {
    /// Create a count-up that reaches `target` after `duration`
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// The value the count-up finishes at
    pub fn target(&self) -> u64 {
        self.target
    }

    /// The value displayed after `elapsed` time
    ///
    /// Starts at 0, interpolates linearly, and stays pinned at the target
    /// once the duration has passed; it never overshoots.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }

        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = (self.target as f64 * progress) as u64;
        value.min(self.target)
    }

    /// Whether the count-up has reached its target
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.value_at(elapsed) == self.target
    }
}
