#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Fluent HTTP Client: navigable request building
//!
//! This crate builds HTTP requests by *navigating* from a fixed base URI rather than
//! by concatenating strings. A [`WebClient`] remembers where it started, where it is
//! now, and how it got there, so navigation can be undone.
//!
//! ## Overview
//!
//! Two independent components:
//!
//! 1. **Navigable URI builder** ([`WebClient`]) - base and current location, undo history,
//!    forward redirection and rebase, multi-valued headers
//! 2. **One-shot dispatcher** ([`OneShotExecutor`]) - a process-wide executor that runs
//!    each unit of work on a new detached thread
//!
//! ## Navigation
//!
//! ```
//! use fluent_http_client::WebClient;
//!
//! let mut client = WebClient::new("http://foo").unwrap();
//! client
//!     .path("bar")
//!     .path("baz")
//!     .matrix("m1", "m1value")
//!     .query("q1", "q1value");
//!
//! assert_eq!(
//!     client.current_uri().as_str(),
//!     "http://foo/bar/baz;m1=m1value?q1=q1value"
//! );
//!
//! // Fork at the present location: the copy's base is the current URI
//! let fork = WebClient::from_client(&client);
//! assert_eq!(fork.base_uri(), client.current_uri());
//! ```
//!
//! ## Sending
//!
//! ```ignore
//! use fluent_http_client::{ReqwestTransport, WebClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new()?;
//!     let mut client = WebClient::new("http://localhost:3000")?;
//!     client.path("users").header("Accept", "application/json");
//!
//!     let response = client.get(&transport).await?;
//!     println!("Status: {}", response.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Fire-and-forget dispatch
//!
//! ```
//! use fluent_http_client::executor::{Executor, OneShotExecutor};
//!
//! fn submit(executor: &dyn Executor) {
//!     if OneShotExecutor::is_a(executor) {
//!         // nobody will observe the outcome
//!     }
//!     executor.execute(Box::new(|| {}));
//! }
//!
//! submit(OneShotExecutor::instance());
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - the navigable builder, transport seam and configuration
//! - **[executor]** - one-shot and managed executors
//! - **[protocol]** - URI composition and header conversion helpers
//! - **[types]** - headers, request and response values
//! - **[error]** - error types and result handling

pub mod client;
pub mod error;
pub mod executor;
pub mod protocol;
pub mod types;

pub use client::{ClientConfig, ReqwestTransport, Transport, WebClient};
pub use error::{ClientError, ErrorKind, Result};
pub use executor::{Executor, OneShotExecutor, RuntimeExecutor};
pub use types::{Headers, HttpRequest, HttpResponse};
