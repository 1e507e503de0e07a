//! Client-side request building.
//!
//! This module provides the navigable request builder and the seam it uses to hand
//! finished requests to an HTTP layer:
//!
//! - **Navigate** from a fixed base URI with path segments, matrix and query parameters
//! - **Undo** navigation one step at a time or all the way back to the base
//! - **Redirect** forward within the base, or rebase onto a new location
//! - **Fork** a new client at the present location
//! - **Send** the assembled request through any [`Transport`]
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── web_client - WebClient, the navigable builder
//! ├── transport  - Transport trait and the reqwest implementation
//! └── config     - Transport configuration
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`WebClient`] | Navigable URI builder with undo history and headers |
//! | [`Transport`] | Anything able to deliver an [`HttpRequest`](crate::HttpRequest) |
//! | [`ReqwestTransport`] | Production transport on top of `reqwest` |
//! | [`ClientConfig`] | Timeouts, proxy, user agent, logging switch |
//!
//! # Examples
//!
//! ## Navigating
//!
//! ```
//! use fluent_http_client::client::WebClient;
//!
//! let mut client = WebClient::new("http://foo").unwrap();
//! client.path("bar").path("baz");
//! assert_eq!(client.current_uri().as_str(), "http://foo/bar/baz");
//!
//! client.back(false);
//! assert_eq!(client.current_uri().as_str(), "http://foo/bar");
//! ```
//!
//! ## Redirecting
//!
//! ```
//! use fluent_http_client::client::WebClient;
//!
//! let mut client = WebClient::new("http://foo").unwrap();
//! client.to("http://bar", false).unwrap();
//! assert_eq!(client.base_uri().as_str(), "http://bar/");
//! assert_eq!(client.current_uri().as_str(), "http://bar/");
//! ```
//!
//! ## Configuring a transport
//!
//! ```
//! use fluent_http_client::client::{ClientConfig, ReqwestTransport};
//!
//! let config = ClientConfig {
//!     request_timeout_ms: 2000,
//!     ..Default::default()
//! };
//! let transport = ReqwestTransport::with_config(config).unwrap();
//! assert_eq!(transport.config().request_timeout_ms, 2000);
//! ```

mod config;
mod transport;
mod web_client;

pub use config::ClientConfig;
pub use transport::{ReqwestTransport, Transport};
pub use web_client::WebClient;
