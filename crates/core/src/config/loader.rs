use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment variable overrides, e.g. `PARKING_SERVER__PORT`.
const ENV_PREFIX: &str = "PARKING_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(base_figment().merge(Toml::file(path)))
}

/// Load configuration from built-in defaults with environment variable overrides
pub fn load_default_config() -> Result<Config, ConfigError> {
    extract(base_figment())
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
