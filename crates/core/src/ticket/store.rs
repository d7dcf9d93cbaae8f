//! Ticket storage trait and error type.

use thiserror::Error;

use crate::ticket::{CreateTicketRequest, Ticket};

/// Error type for ticket operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// Ticket was never issued or has already been consumed.
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// A thread panicked while holding the ticket table.
    #[error("Ticket table lock poisoned")]
    LockPoisoned,
}

/// Trait for ticket storage backends.
///
/// Implementations must make `create` and `consume` atomic with respect to
/// each other: a ticket is handed out by `consume` at most once.
pub trait TicketStore: Send + Sync {
    /// Issue a new ticket under a freshly generated id.
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, TicketError>;

    /// Remove and return the ticket with the given id.
    fn consume(&self, id: &str) -> Result<Ticket, TicketError>;

    /// Number of tickets currently open.
    fn count(&self) -> Result<usize, TicketError>;
}
