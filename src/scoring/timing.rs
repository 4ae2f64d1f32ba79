//! Early-window detection.
//!
//! A forecast is "early" when it lands within a fixed window after the
//! event was created. The projected early-bird formula rewards it.

use chrono::{DateTime, Duration, Utc};

/// Source of the current time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Window after event creation during which forecasts earn the bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarlyWindow {
    duration: Duration,
}

impl Default for EarlyWindow {
    fn default() -> Self {
        Self::hours(48)
    }
}

impl EarlyWindow {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Saturates at the largest representable duration.
    pub fn hours(hours: i64) -> Self {
        let duration = Duration::try_hours(hours).unwrap_or(if hours < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        });
        Self::new(duration)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Strictly less than the window since creation. Events stamped in the
    /// future count as early.
    pub fn is_early(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - created_at < self.duration
    }

    pub fn is_early_with(&self, created_at: DateTime<Utc>, clock: &dyn Clock) -> bool {
        self.is_early(created_at, clock.now())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
