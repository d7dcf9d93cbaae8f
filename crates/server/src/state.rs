use std::sync::Arc;
use parking_core::{BillingCalculator, Clock, Config, TicketStore};

/// Shared application state
pub struct AppState {
    config: Config,
    ticket_store: Arc<dyn TicketStore>,
    calculator: BillingCalculator,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        config: Config,
        ticket_store: Arc<dyn TicketStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let calculator = BillingCalculator::new(config.billing.hourly_rate_money());
        Self {
            config,
            ticket_store,
            calculator,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ticket_store(&self) -> &dyn TicketStore {
        self.ticket_store.as_ref()
    }

    pub fn calculator(&self) -> &BillingCalculator {
        &self.calculator
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Render an amount with the configured currency symbol.
    pub fn format_charge(&self, amount: parking_core::Money) -> String {
        amount.with_symbol(&self.config.billing.currency_symbol)
    }
}
