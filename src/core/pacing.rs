use crate::core::constants::{FRAME_BUDGET_MS, FRAME_SLACK_MS};

/// Caps a display-refresh callback to a target cadence.
///
/// Callbacks arriving before the budget has elapsed (less a small slack for
/// timestamp jitter) are rejected. Accepted frames carry the remainder
/// (`elapsed % budget`) forward so the cadence does not drift when the host's
/// refresh rate is not a multiple of ours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePacer {
    budget_ms: f64,
    slack_ms: f64,
    last_ms: f64,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_BUDGET_MS, FRAME_SLACK_MS)
    }
}

impl FramePacer {
    pub fn new(budget_ms: f64, slack_ms: f64) -> Self {
        Self {
            budget_ms,
            slack_ms,
            last_ms: 0.0,
        }
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// Restart pacing from `now_ms`, e.g. when the loop leaves Idle.
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }

    /// Decide whether the callback at `timestamp_ms` should draw.
    pub fn accept(&mut self, timestamp_ms: f64) -> bool {
        let elapsed = timestamp_ms - self.last_ms;
        if elapsed < self.budget_ms - self.slack_ms {
            return false;
        }
        // an early frame inside the slack restarts the budget from itself
        let carry = if elapsed >= self.budget_ms {
            elapsed % self.budget_ms
        } else {
            0.0
        };
        self.last_ms = timestamp_ms - carry;
        true
    }
}
