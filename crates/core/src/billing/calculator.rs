//! Time-bucketed parking charges.

use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

use super::{Money, ParkedDuration};

/// Length of one billing increment. Partial increments are charged in full.
pub const BUCKET_DURATION: Duration = Duration::from_secs(15 * 60);

/// Number of billing increments in one hour; the hourly rate is split evenly across them.
pub const BUCKETS_PER_HOUR: u64 = 4;

/// Errors produced while computing a charge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// The exit instant lies before the entry instant.
    #[error("Exit time {exit} is before entry time {entry}")]
    InvalidInterval {
        entry: DateTime<Utc>,
        exit: DateTime<Utc>,
    },

    /// The stay is so long the charge no longer fits in a `Money`.
    #[error("Charge for {buckets} buckets overflows")]
    Overflow { buckets: u128 },
}

/// Result of billing a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    /// Total amount due, rounded to whole cents.
    pub amount: Money,
    /// Number of 15-minute increments billed.
    pub buckets: u64,
    /// Elapsed time between entry and exit.
    pub duration: ParkedDuration,
}

/// Flat-rate calculator charging per started 15-minute increment.
///
/// A zero-length stay bills zero increments. Any positive stay, however
/// short, bills at least one.
#[derive(Debug, Clone, Copy)]
pub struct BillingCalculator {
    hourly_rate: Money,
}

impl BillingCalculator {
    pub fn new(hourly_rate: Money) -> Self {
        Self { hourly_rate }
    }

    pub fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    /// Compute the charge for a stay from `entry` to `exit`.
    pub fn charge(
        &self,
        entry: DateTime<Utc>,
        exit: DateTime<Utc>,
    ) -> Result<Charge, BillingError> {
        let elapsed = (exit - entry)
            .to_std()
            .map_err(|_| BillingError::InvalidInterval { entry, exit })?;

        let buckets = bucket_count(elapsed);

        // Half-up rounding to the cent: hourly_rate / 4 need not be a whole cent.
        let per_hour = u128::from(BUCKETS_PER_HOUR);
        let cents = (buckets * u128::from(self.hourly_rate.cents()) + per_hour / 2) / per_hour;

        let overflow = || BillingError::Overflow { buckets };
        let cents = u64::try_from(cents).map_err(|_| overflow())?;
        let buckets = u64::try_from(buckets).map_err(|_| overflow())?;

        Ok(Charge {
            amount: Money::from_cents(cents),
            buckets,
            duration: ParkedDuration::new(elapsed),
        })
    }
}

fn bucket_count(elapsed: Duration) -> u128 {
    elapsed.as_nanos().div_ceil(BUCKET_DURATION.as_nanos())
}
