//! Testing utilities shared by unit and integration tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use parking_core::testing::{fixtures, MockClock};
//!
//! let clock = MockClock::new(fixtures::opening_time());
//! let store = MemoryTicketStore::new();
//! let ticket = store.create(fixtures::entry_request(&clock))?;
//! ```

mod mock_clock;

pub use mock_clock::MockClock;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::billing::{BillingCalculator, Money};
    use crate::clock::Clock;
    use crate::ticket::CreateTicketRequest;

    /// Plate used by default fixtures.
    pub const PLATE: &str = "ABC-123";

    /// Lot used by default fixtures.
    pub const LOT: &str = "lot-7";

    /// A fixed, deterministic starting instant.
    pub fn opening_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// Entry request for the default plate and lot at the clock's current time.
    pub fn entry_request(clock: &dyn Clock) -> CreateTicketRequest {
        CreateTicketRequest::new(PLATE, LOT, clock.now())
    }

    /// Calculator charging 10.00 per hour.
    pub fn default_calculator() -> BillingCalculator {
        BillingCalculator::new(Money::from_cents(1000))
    }
}
