//! Ticket lifecycle: issue on entry, consume once on exit.

mod memory_store;
mod store;
mod types;

pub use memory_store::MemoryTicketStore;
pub use store::{TicketError, TicketStore};
pub use types::{CreateTicketRequest, Ticket};
