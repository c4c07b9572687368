//! REST server configuration.
//!
//! Resolved once at process startup and passed into the server; handlers never read the
//! environment.

use anyhow::Context;
use std::net::SocketAddr;

/// Environment variable that overrides the listen address.
pub const REST_ADDR_ENV: &str = "USERS_REST_ADDR";

/// Listen address used when [`REST_ADDR_ENV`] is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

#[derive(Clone, Debug)]
pub struct RestConfig {
    addr: SocketAddr,
}

impl RestConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Reads [`REST_ADDR_ENV`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a valid socket address.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_value(std::env::var(REST_ADDR_ENV).ok())
    }

    /// Builds the configuration from an already-read environment value.
    ///
    /// `None` or a blank value selects [`DEFAULT_REST_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid socket address.
    pub fn from_env_value(value: Option<String>) -> anyhow::Result<Self> {
        let raw = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REST_ADDR.into());

        let addr = raw.parse::<SocketAddr>().with_context(|| {
            format!("{} is not a valid socket address: '{}'", REST_ADDR_ENV, raw)
        })?;

        Ok(Self { addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}
