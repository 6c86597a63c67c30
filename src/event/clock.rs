//! Process-wide microsecond clock.
//!
//! Timers measure with a monotonic [`Instant`]; the first use of the clock
//! pairs that monotonic source with a wall-clock reading so instants can be
//! reported as microseconds since the Unix epoch.

use chrono::Utc;
use std::sync::OnceLock;
use std::time::Instant;

static GLOBAL: OnceLock<Clock> = OnceLock::new();

/// Monotonic clock anchored to wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    anchor: Instant,
    anchor_wall_us: u64,
}

impl Clock {
    /// Anchor a new clock at the current moment
    pub fn new() -> Self {
        let anchor_wall_us = Utc::now().timestamp_micros().max(0) as u64;
        Self {
            anchor: Instant::now(),
            anchor_wall_us,
        }
    }

    /// The clock shared by every timer in the process
    pub fn global() -> &'static Clock {
        GLOBAL.get_or_init(Clock::new)
    }

    /// Current monotonic instant.
    ///
    /// Taken after the anchor, so it converts without saturating.
    pub fn now(&self) -> Instant {
        Instant::now()
    }

    /// Convert an instant to whole microseconds since the Unix epoch.
    ///
    /// Instants taken before the anchor saturate to the anchor itself.
    pub fn micros(&self, instant: Instant) -> u64 {
        let since_anchor = instant.saturating_duration_since(self.anchor);
        self.anchor_wall_us + since_anchor.as_micros() as u64
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
