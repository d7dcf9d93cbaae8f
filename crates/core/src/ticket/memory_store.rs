//! In-memory ticket store.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::ticket::{CreateTicketRequest, Ticket, TicketError, TicketStore};

/// Ticket store backed by a mutex-guarded map.
///
/// Tickets are lost when the store is dropped. Tickets that are never
/// consumed stay in the map for the life of the store.
#[derive(Debug, Default)]
pub struct MemoryTicketStore {
    tickets: Mutex<HashMap<String, Ticket>>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, HashMap<String, Ticket>>, TicketError> {
        self.tickets.lock().map_err(|_| TicketError::LockPoisoned)
    }
}

impl TicketStore for MemoryTicketStore {
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, TicketError> {
        let mut tickets = self.table()?;

        // A v4 collision with a live ticket is practically impossible, but
        // the id must stay unique among open tickets, so draw again.
        loop {
            let id = Uuid::new_v4().to_string();
            match tickets.entry(id) {
                Entry::Vacant(slot) => {
                    let ticket = request.into_ticket(slot.key().clone());
                    slot.insert(ticket.clone());
                    return Ok(ticket);
                }
                Entry::Occupied(slot) => {
                    warn!(ticket_id = %slot.key(), "Ticket id collision, drawing a new id");
                }
            }
        }
    }

    fn consume(&self, id: &str) -> Result<Ticket, TicketError> {
        let ticket = self.table()?.remove(id);
        if ticket.is_none() {
            debug!(ticket_id = %id, "No open ticket to consume");
        }
        ticket.ok_or_else(|| TicketError::NotFound(id.to_string()))
    }

    fn count(&self) -> Result<usize, TicketError> {
        Ok(self.table()?.len())
    }
}
