use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_BOOKSTORE_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

/// Shop server configuration.
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Upper bound on the store work of a single checkout.
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_addr: optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            store_timeout: Duration::from_secs(store_timeout_secs()?),
        })
    }
}

/// Bookstore server configuration.
pub struct BookstoreConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl BookstoreConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("BOOKSTORE_DATABASE_URL")?,
            bind_addr: optional_var("BOOKSTORE_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BOOKSTORE_BIND_ADDR.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn store_timeout_secs() -> Result<u64, ConfigError> {
    let Some(value) = optional_var("STORE_TIMEOUT_SECS") else {
        return Ok(DEFAULT_STORE_TIMEOUT_SECS);
    };

    parse_timeout_secs(&value)
}

fn parse_timeout_secs(value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: "STORE_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: "STORE_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests parsing of the checkout timeout.
    ///
    /// Expected: positive integers accepted, zero and garbage rejected
    #[test]
    fn parses_store_timeout() {
        assert_eq!(parse_timeout_secs("12").unwrap(), 12);
        assert_eq!(parse_timeout_secs(" 3 ").unwrap(), 3);
        assert!(matches!(
            parse_timeout_secs("0"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(matches!(
            parse_timeout_secs("soon"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
