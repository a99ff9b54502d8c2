//! Environment configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 3010;

/// Database used when neither `MONGO_DB` nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port
    pub port: u16,

    /// MongoDB connection string. `None` selects the in-memory store.
    pub mongo_uri: Option<String>,

    /// Explicit database name, overriding the one in the URI
    pub mongo_db: Option<String>,
}

impl Config {
    /// Loads `.env` (if present) and reads the configuration from the environment.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Failed to read .env file: {e}"),
        }

        Self {
            port: try_load("PORT", DEFAULT_PORT),
            mongo_uri: optional("MONGO_URI"),
            mongo_db: optional("MONGO_DB"),
        }
    }

    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match optional(key) {
        Some(raw) => parse_or(key, &raw, default),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

fn parse_or<T: FromStr + Display>(key: &str, raw: &str, default: T) -> T
where
    T::Err: Display,
{
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_port() {
        assert_eq!(parse_or("PORT", "8080", DEFAULT_PORT), 8080);
    }

    #[test]
    fn falls_back_on_garbage_port() {
        assert_eq!(parse_or("PORT", "eighty", DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_or("PORT", "70000", DEFAULT_PORT), DEFAULT_PORT);
    }

    #[test]
    fn address_binds_all_interfaces() {
        let config = Config {
            port: 3010,
            mongo_uri: None,
            mongo_db: None,
        };
        assert_eq!(config.address(), "0.0.0.0:3010");
    }
}
