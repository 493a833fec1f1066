//! Host configuration.
//!
//! Read once at startup. `.env` is loaded first so local development can keep
//! its settings next to the workspace.
//!
//! - `PORT`: listen port (default 3000)
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `API_UPSTREAM`: backend that `/api/*` is forwarded to (default
//!   `http://localhost:5000`; empty disables the proxy)
//! - `PROXY_TIMEOUT_SECS`: per-request upstream timeout (default 30)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::HostError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM: &str = "http://localhost:5000";
const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Base URL without a trailing slash. `None` when the proxy is disabled.
    pub api_upstream: Option<String>,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Load `.env` (if present) and read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, HostError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(HostError::Config(format!(".env: {e}")));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let proxy_timeout_secs = parse_or("PROXY_TIMEOUT_SECS", lookup("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        let api_upstream = normalize_upstream(lookup("API_UPSTREAM").as_deref().unwrap_or(DEFAULT_UPSTREAM));

        Ok(Self { bind_addr, port, api_upstream, proxy_timeout: Duration::from_secs(proxy_timeout_secs) })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, HostError>
where
    T: std::str::FromStr,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| HostError::Config(format!("{key} has an invalid value: {value:?}"))),
    }
}

fn normalize_upstream(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
