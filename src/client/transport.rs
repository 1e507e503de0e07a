//! HTTP transport seam.
//!
//! The builder never performs I/O itself. It produces an [`HttpRequest`] snapshot and
//! hands it to a [`Transport`]. [`ReqwestTransport`] is the production implementation;
//! tests can supply their own.
//!
//! # Examples
//!
//! ```ignore
//! use fluent_http_client::{ReqwestTransport, WebClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new()?;
//!     let mut client = WebClient::new("http://example.com/api")?;
//!     let response = client.path("users").query("page", "2").get(&transport).await?;
//!     println!("Status: {}", response.status);
//!     Ok(())
//! }
//! ```

use crate::client::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::protocol::{flatten_header_map, to_header_map};
use crate::types::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Something that can deliver an [`HttpRequest`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and wait for the full response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Transport backed by a [`reqwest::Client`].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Fails when the proxy URL is malformed or the underlying client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone());

        if !config.proxy_url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.proxy_url).map_err(|e| {
                ClientError::Config(format!("proxy '{}': {}", config.proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(ReqwestTransport {
            client,
            config: Arc::new(config),
        })
    }

    /// Get the transport configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let headers = to_header_map(&request.headers)?;

        if self.config.enable_logging {
            tracing::debug!("{} {}", request.method, request.uri);
        }

        let mut req_builder = self
            .client
            .request(request.method.clone(), request.uri.clone())
            .headers(headers);

        if !request.body.is_empty() {
            req_builder = req_builder.body(request.body);
        }

        let response = req_builder.send().await.map_err(|e| {
            if self.config.enable_logging {
                tracing::warn!("{} {} failed: {}", request.method, request.uri, e);
            }
            ClientError::from(e)
        })?;

        let status = response.status().as_u16();
        let headers = flatten_header_map(response.headers());
        let body = response.bytes().await?;

        if self.config.enable_logging {
            tracing::debug!(
                status,
                bytes = body.len(),
                "{} {} completed",
                request.method,
                request.uri
            );
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new().unwrap();
        assert_eq!(transport.config().request_timeout_ms, 30_000);
    }

    #[test]
    fn test_transport_with_proxy() {
        let config = ClientConfig {
            proxy_url: "http://127.0.0.1:3128".to_string(),
            ..Default::default()
        };
        assert!(ReqwestTransport::with_config(config).is_ok());
    }

    #[test]
    fn test_invalid_header_fails_before_sending() {
        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::new(
            http::Method::GET,
            url::Url::parse("http://127.0.0.1:9/").unwrap(),
        )
        .with_headers([("bad name", "v")].into_iter().collect());

        let err = tokio_test::block_on(transport.send(request)).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
