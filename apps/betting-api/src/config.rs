//! Service configuration read from environment variables.
//!
//! | variable | default |
//! |----------|---------|
//! | `STORAGE_BACKEND` | `postgres` (`memory` also accepted) |
//! | `DATABASE_URL` | required for `postgres` |
//! | `DATABASE_MAX_CONNECTIONS` | 5 |
//! | `PORT` | 8081 |
//! | `CHAMPIONSHIP_API_URL` | `http://localhost:8080` |
//! | `MATCH_CLIENT_TIMEOUT_SECS` | 5 |

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when STORAGE_BACKEND is postgres")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where bets are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub port: u16,
    pub championship_api_url: String,
    pub match_client_timeout: Duration,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage = parse_or(&lookup, "STORAGE_BACKEND", StorageBackend::Postgres)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let timeout_secs: u64 = parse_or(&lookup, "MATCH_CLIENT_TIMEOUT_SECS", 5)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "MATCH_CLIENT_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        Ok(Self {
            storage,
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            port: parse_or(&lookup, "PORT", 8081)?,
            championship_api_url: lookup("CHAMPIONSHIP_API_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
            match_client_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
