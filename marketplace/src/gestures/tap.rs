//! Tap disambiguation: single tap vs double tap.
//!
//! A first tap on a target schedules a single tap that becomes due after
//! the double-tap delay. A second tap on the same target strictly inside the
//! delay cancels that scheduled single tap and yields a double tap
//! immediately. The pair is then forgotten, so a third rapid tap starts a
//! new sequence.
//!
//! Targets are tracked independently: tapping card A then card B never
//! forms a double tap.
//!
//! The classifier holds no timer. The event loop arms one for
//! [`TapClassifier::next_deadline`] and calls [`TapClassifier::poll`] when it
//! fires.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Window in which a second tap turns into a double tap.
pub const DOUBLE_TAP_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapConfig {
    pub double_tap_delay: Duration,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            double_tap_delay: DOUBLE_TAP_DELAY,
        }
    }
}

/// A classified gesture on a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapGesture<T> {
    /// No second tap arrived within the delay.
    SingleTap(T),
    /// Second tap arrived within the delay.
    DoubleTap(T),
}

impl<T> TapGesture<T> {
    pub fn target(&self) -> &T {
        match self {
            TapGesture::SingleTap(t) | TapGesture::DoubleTap(t) => t,
        }
    }
}

#[derive(Debug, Clone)]
struct ScheduledTap<T> {
    target: T,
    due: Instant,
}

/// Classifies taps per target.
#[derive(Debug, Clone)]
pub struct TapClassifier<T> {
    config: TapConfig,
    last_tap: HashMap<T, Instant>,
    // Ordered by `due`: taps arrive in time order.
    scheduled: Vec<ScheduledTap<T>>,
}

impl<T: Clone + Eq + Hash> TapClassifier<T> {
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            last_tap: HashMap::new(),
            scheduled: Vec::new(),
        }
    }

    /// Register a tap on `target` at `now`.
    ///
    /// Returns `Some(DoubleTap)` when this tap completes a pair. Otherwise a
    /// single tap is scheduled and `None` is returned.
    pub fn tap(&mut self, target: T, now: Instant) -> Option<TapGesture<T>> {
        let delay = self.config.double_tap_delay;

        if let Some(last) = self.last_tap.get(&target).copied() {
            if now.saturating_duration_since(last) < delay {
                self.last_tap.remove(&target);
                let cancelled_due = last + delay;
                self.scheduled
                    .retain(|s| !(s.target == target && s.due == cancelled_due));
                tracing::trace!("double tap recognised");
                return Some(TapGesture::DoubleTap(target));
            }
        }

        self.last_tap.insert(target.clone(), now);
        self.scheduled.push(ScheduledTap {
            target,
            due: now + delay,
        });
        None
    }

    /// Drain single taps whose quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<TapGesture<T>> {
        let mut fired = Vec::new();
        self.scheduled.retain(|s| {
            if s.due <= now {
                fired.push(TapGesture::SingleTap(s.target.clone()));
                false
            } else {
                true
            }
        });

        let delay = self.config.double_tap_delay;
        self.last_tap
            .retain(|_, last| now.saturating_duration_since(*last) < delay);

        fired
    }

    /// When the earliest scheduled single tap becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduled.iter().map(|s| s.due).min()
    }

    pub fn has_pending(&self) -> bool {
        !self.scheduled.is_empty()
    }

    /// Forget everything about `target`, dropping its scheduled single taps.
    pub fn cancel(&mut self, target: &T) {
        self.last_tap.remove(target);
        self.scheduled.retain(|s| &s.target != target);
    }

    /// Drop all state (screen lost focus).
    pub fn reset(&mut self) {
        self.last_tap.clear();
        self.scheduled.clear();
    }
}

impl<T: Clone + Eq + Hash> Default for TapClassifier<T> {
    fn default() -> Self {
        Self::new(TapConfig::default())
    }
}
