//! Elapsed parking time and its hours/minutes/seconds rendering.

use std::fmt;
use std::time::Duration;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Time a vehicle spent in the lot.
///
/// Components are derived from whole seconds; any sub-second remainder is
/// dropped for display but still counts towards billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParkedDuration(Duration);

impl ParkedDuration {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn total_seconds(&self) -> u64 {
        self.0.as_secs()
    }

    pub fn hours(&self) -> u64 {
        self.total_seconds() / SECS_PER_HOUR
    }

    pub fn minutes(&self) -> u64 {
        (self.total_seconds() % SECS_PER_HOUR) / SECS_PER_MINUTE
    }

    pub fn seconds(&self) -> u64 {
        self.total_seconds() % SECS_PER_MINUTE
    }
}

impl fmt::Display for ParkedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, {} seconds",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
