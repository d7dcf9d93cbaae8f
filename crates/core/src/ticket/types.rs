//! Core ticket data types.

use chrono::{DateTime, Utc};

/// An open parking ticket.
///
/// Tickets are immutable once issued and live only until they are consumed
/// at exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Unique identifier (UUID v4) handed to the driver.
    pub id: String,
    /// Licence plate of the vehicle.
    pub plate: String,
    /// Parking lot the vehicle entered.
    pub lot_id: String,
    /// When the vehicle entered.
    pub entry_time: DateTime<Utc>,
}

/// Request to issue a new ticket.
#[derive(Debug, Clone)]
pub struct CreateTicketRequest {
    pub plate: String,
    pub lot_id: String,
    pub entry_time: DateTime<Utc>,
}

impl CreateTicketRequest {
    pub fn new(
        plate: impl Into<String>,
        lot_id: impl Into<String>,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            plate: plate.into(),
            lot_id: lot_id.into(),
            entry_time,
        }
    }

    pub(crate) fn into_ticket(self, id: String) -> Ticket {
        Ticket {
            id,
            plate: self.plate,
            lot_id: self.lot_id,
            entry_time: self.entry_time,
        }
    }
}
