//! Runtime configuration read from the environment.

use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3030";
pub const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid FETCHKIT_ADDR {value:?}: {source}")]
    Addr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("Invalid FETCHKIT_MAX_DELAY_MS {value:?}: {source}")]
    MaxDelay {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the server binds to (`FETCHKIT_ADDR`).
    pub addr: SocketAddr,
    /// Upper bound for `GET /slow` delays (`FETCHKIT_MAX_DELAY_MS`).
    pub max_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup("FETCHKIT_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::Addr {
                value: addr_value.clone(),
                source,
            })?;

        let max_delay_ms = match lookup("FETCHKIT_MAX_DELAY_MS") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::MaxDelay { value, source })?,
            None => DEFAULT_MAX_DELAY_MS,
        };

        Ok(Self { addr, max_delay_ms })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}
