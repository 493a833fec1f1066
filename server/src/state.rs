//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled upstream HTTP client and the parsed configuration; both
//! are cheap to clone.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::config::HostConfig;
use crate::error::HostError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<HostConfig>,
}

impl AppState {
    /// Build the upstream client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Upstream`] if the TLS backend cannot initialize.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }

    /// Upstream base URL, or the error a proxied request should answer with.
    pub fn upstream(&self) -> Result<&str, HostError> {
        self.config.api_upstream.as_deref().ok_or(HostError::UpstreamNotConfigured)
    }
}
