//! Overscroll unlock gesture.
//!
//! The catalog list unlocks the hidden upside-down catalog when the user
//! keeps pulling past the bottom edge: `required_attempts` qualifying
//! scroll-end events, each no more than `window` after the previous one.
//!
//! ```text
//!   Idle(0) ──qualifying──▶ Counting(1) ──▶ … ──▶ Counting(N-1) ──qualifying──▶ Triggered ─┐
//!      ▲                                                                                  │
//!      └──────────────────────────────── reset ◀──────────────────────────────────────────┘
//! ```
//!
//! A qualifying event that arrives more than `window` after the previous
//! attempt restarts the count at 1. Events that do not qualify leave the
//! counter alone.

use std::time::{Duration, Instant};

/// Thresholds for the overscroll gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverscrollConfig {
    /// Distance from the content end that still counts as "at the bottom".
    pub bottom_padding: f32,
    /// End velocity must be below this (negative = downward intent).
    pub velocity_threshold: f32,
    /// Consecutive attempts needed to trigger.
    pub required_attempts: u32,
    /// Maximum gap between consecutive attempts.
    pub window: Duration,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self {
            bottom_padding: 50.0,
            velocity_threshold: -0.5,
            required_attempts: 3,
            window: Duration::from_millis(3000),
        }
    }
}

/// Geometry and velocity reported when a scroll gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub content_height: f32,
    pub viewport_height: f32,
    pub scroll_offset: f32,
    pub velocity: f32,
}

/// Result of feeding one scroll-end event to the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverscrollOutcome {
    /// Not at the bottom, or not pulling downward.
    Ignored,
    /// Attempt counted; `count` attempts so far in the current run.
    Counted { count: u32 },
    /// Threshold reached. The counter has been reset.
    Triggered,
}

#[derive(Debug, Clone)]
pub struct OverscrollGestureDetector {
    config: OverscrollConfig,
    count: u32,
    last_attempt: Option<Instant>,
}

impl OverscrollGestureDetector {
    pub fn new(config: OverscrollConfig) -> Self {
        Self {
            config,
            count: 0,
            last_attempt: None,
        }
    }

    /// Whether a scroll end counts as an overscroll attempt.
    pub fn is_overscroll_attempt(&self, metrics: &ScrollMetrics) -> bool {
        let at_bottom = metrics.viewport_height + metrics.scroll_offset
            >= metrics.content_height - self.config.bottom_padding;
        at_bottom && metrics.velocity < self.config.velocity_threshold
    }

    /// Feed a scroll-end event observed at `now`.
    pub fn on_scroll_end(&mut self, metrics: &ScrollMetrics, now: Instant) -> OverscrollOutcome {
        if !self.is_overscroll_attempt(metrics) {
            return OverscrollOutcome::Ignored;
        }

        if let Some(last) = self.last_attempt {
            if now.saturating_duration_since(last) > self.config.window {
                tracing::debug!(stale_count = self.count, "overscroll window expired");
                self.count = 0;
            }
        }

        self.count += 1;
        self.last_attempt = Some(now);

        if self.count >= self.config.required_attempts {
            tracing::info!(attempts = self.count, "overscroll unlock gesture triggered");
            self.reset();
            OverscrollOutcome::Triggered
        } else {
            OverscrollOutcome::Counted { count: self.count }
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Return to idle (trigger fired, or screen unmounted).
    pub fn reset(&mut self) {
        self.count = 0;
        self.last_attempt = None;
    }
}

impl Default for OverscrollGestureDetector {
    fn default() -> Self {
        Self::new(OverscrollConfig::default())
    }
}
