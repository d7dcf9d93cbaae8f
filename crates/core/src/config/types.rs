use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use crate::billing::Money;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub billing: BillingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Billing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BillingConfig {
    /// Amount charged per full hour, split evenly across the hour's 15-minute buckets.
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    /// Prefix used when rendering charges (e.g. "$5.00").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl BillingConfig {
    /// Hourly rate in whole cents, rounded to the nearest cent.
    ///
    /// Callers are expected to have run `validate_config` first; invalid rates
    /// (negative, NaN) collapse to zero here.
    pub fn hourly_rate_money(&self) -> Money {
        if self.hourly_rate.is_finite() && self.hourly_rate > 0.0 {
            Money::from_cents((self.hourly_rate * 100.0).round() as u64)
        } else {
            Money::ZERO
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_hourly_rate() -> f64 {
    10.00
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
