//! Host State
//!
//! Shared state accessible by all host handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::host::error::HostError;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Outbound client used to reach the LoanSewa API
    pub http: reqwest::Client,
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend.request_timeout_secs))
            .build()
            .map_err(|e| HostError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Backend origin without a trailing slash
    pub fn backend_url(&self) -> &str {
        self.config.backend.url.trim_end_matches('/')
    }
}
