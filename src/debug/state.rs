//! Debug domain: state for the periodic duel summary.

use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct DebugState {
    /// Simulated milliseconds between summaries
    pub summary_every_ms: u64,
    pub last_summary_at: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            summary_every_ms: 1000,
            last_summary_at: 0,
        }
    }
}

impl DebugState {
    /// True once per interval; records `now` when it fires.
    pub fn summary_due(&mut self, now: u64) -> bool {
        if now < self.last_summary_at {
            self.last_summary_at = 0;
        }
        if now - self.last_summary_at < self.summary_every_ms {
            return false;
        }
        self.last_summary_at = now;
        true
    }
}
