//! Client configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;

/// Settings that shape how requests are built and sent.
///
/// Every field has a default so a partial TOML/JSON file is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin every endpoint path is appended to
    pub base_url: String,
    /// Per-request timeout applied by the transport; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Extra text appended to the `User-Agent` header
    pub user_agent_suffix: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: None, user_agent_suffix: None }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn with_user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Join the configured origin with an endpoint path.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}
