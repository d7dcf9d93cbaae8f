//! Mock clock for testing.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::{Arc, RwLock};

use crate::clock::Clock;

/// Manually driven implementation of the Clock trait.
///
/// Clones share the same instant, so a test can keep one handle and hand
/// another to the code under test.
///
/// # Example
///
/// ```rust,ignore
/// use parking_core::testing::{fixtures, MockClock};
///
/// let clock = MockClock::new(fixtures::opening_time());
/// let entry = clock.now();
/// clock.advance(TimeDelta::minutes(16));
/// assert_eq!(clock.now() - entry, TimeDelta::minutes(16));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(start)),
        }
    }

    /// Jump to an absolute instant (may move backwards).
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.write().unwrap_or_else(|e| e.into_inner()) = instant;
    }

    /// Move the clock by `delta` (negative values rewind).
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.write().unwrap_or_else(|e| e.into_inner());
        *now += delta;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
