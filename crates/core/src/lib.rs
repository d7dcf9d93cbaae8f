pub mod billing;
pub mod clock;
pub mod config;
pub mod testing;
pub mod ticket;

pub use billing::{
    BillingCalculator, BillingError, Charge, Money, ParkedDuration, BUCKETS_PER_HOUR,
    BUCKET_DURATION,
};
pub use clock::{Clock, SystemClock};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, BillingConfig,
    Config, ConfigError, ServerConfig,
};
pub use ticket::{CreateTicketRequest, MemoryTicketStore, Ticket, TicketError, TicketStore};
