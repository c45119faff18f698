//! # Clock Abstraction
//!
//! Gesture state machines take `now` as an argument. The [`App`](crate::app::App)
//! reads it from an injected [`Clock`] so tests can drive time explicitly.

use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Source of monotonic time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// ```rust
/// use marketplace::core::clock::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }

    /// Jump to `ms` milliseconds after the clock's origin.
    pub fn set_millis(&self, ms: u64) {
        *self.offset.lock() = Duration::from_millis(ms);
    }

    /// The instant corresponding to `ms` milliseconds after the origin.
    pub fn at_millis(&self, ms: u64) -> Instant {
        self.base + Duration::from_millis(ms)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.at_millis(0));

        clock.set_millis(1200);
        assert_eq!(clock.now(), clock.at_millis(1200));

        clock.advance(Duration::from_millis(300));
        assert_eq!(clock.now(), clock.at_millis(1500));
    }
}
