//! Transport configuration.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Options for [`ReqwestTransport`](crate::client::ReqwestTransport).
///
/// Unknown fields are rejected; missing fields take their defaults.
///
/// ```
/// use fluent_http_client::client::ClientConfig;
///
/// let config = ClientConfig::from_json(r#"{ "request_timeout_ms": 5000 }"#).unwrap();
/// assert_eq!(config.request_timeout_ms, 5000);
/// assert!(config.enable_logging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Total time allowed per request
    pub request_timeout_ms: u64,
    /// Time allowed to establish a connection
    pub connect_timeout_ms: u64,
    /// `User-Agent` sent with every request
    pub user_agent: String,
    /// Proxy for all schemes; empty means none
    pub proxy_url: String,
    /// Emit `tracing` events for each request
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            proxy_url: String::new(),
            enable_logging: true,
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ClientError::Config(e.to_string()))
    }
}
