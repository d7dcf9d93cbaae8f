//! Parking charge calculation.

mod calculator;
mod duration;
mod money;

pub use calculator::{BillingCalculator, BillingError, Charge, BUCKETS_PER_HOUR, BUCKET_DURATION};
pub use duration::ParkedDuration;
pub use money::Money;
