use super::{types::Config, ConfigError};

/// Highest accepted hourly rate, keeps cent arithmetic far from overflow.
const MAX_HOURLY_RATE: f64 = 1_000_000.0;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Hourly rate is a finite, non-negative amount within bounds
/// - Currency symbol is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let rate = config.billing.hourly_rate;
    if !rate.is_finite() || rate < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "billing.hourly_rate must be a non-negative amount, got {}",
            rate
        )));
    }
    if rate > MAX_HOURLY_RATE {
        return Err(ConfigError::ValidationError(format!(
            "billing.hourly_rate cannot exceed {}",
            MAX_HOURLY_RATE
        )));
    }

    if config.billing.currency_symbol.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "billing.currency_symbol cannot be empty".to_string(),
        ));
    }

    Ok(())
}
