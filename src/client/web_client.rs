//! The navigable URI builder.
//!
//! A [`WebClient`] tracks two locations:
//!
//! - the **base** URI, fixed at construction and only replaced by a full rebase, and
//! - the **current** URI, reached from the base by navigation (path segments, matrix
//!   parameters, query parameters) or by forward redirection.
//!
//! Every navigation step records the previous current URI in an undo history, so
//! [`back`](WebClient::back) can walk towards the base one step at a time or jump
//! straight to it. History never reaches below the base.
//!
//! # State transitions
//!
//! | Operation | base | current | history |
//! |-----------|------|---------|---------|
//! | `path` / `matrix` / `query` / `replace_*` / `fragment` | kept | extended | push old current |
//! | `to(x, true)` | kept | `x` (must extend base) | cleared |
//! | `to(x, false)` | `x` | `x` | cleared |
//! | `back(false)` | kept | popped entry | pop one |
//! | `back(true)` | kept | oldest entry | cleared |
//! | `header` / `reset` | kept | kept | kept |
//!
//! # Thread safety
//!
//! A `WebClient` is meant to be assembled by one call site. Mutation takes `&mut self`
//! and there is no internal locking.
//!
//! # Examples
//!
//! ```
//! use fluent_http_client::WebClient;
//!
//! let mut client = WebClient::new("http://foo").unwrap();
//! client.path("bar").path("baz").matrix("m1", "m1value").query("q1", "q1value");
//!
//! assert_eq!(client.base_uri().as_str(), "http://foo/");
//! assert_eq!(client.current_uri().as_str(), "http://foo/bar/baz;m1=m1value?q1=q1value");
//!
//! client.back(true);
//! assert_eq!(client.current_uri(), client.base_uri());
//! ```

use crate::client::transport::Transport;
use crate::error::{ClientError, Result};
use crate::protocol::uri;
use crate::types::{Headers, HttpRequest, HttpResponse};
use bytes::Bytes;
use std::str::FromStr;
use url::Url;

/// Fluent request builder with base/current navigation and undo history.
///
/// `Clone` duplicates everything, history included. Use
/// [`from_client`](WebClient::from_client) to fork a new client rooted at the
/// present location instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebClient {
    base: Url,
    current: Url,
    history: Vec<Url>,
    headers: Headers,
}

impl WebClient {
    /// Create a client rooted at an absolute URI string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUri`] when `uri` is not an absolute,
    /// hierarchical URI.
    pub fn new(uri: &str) -> Result<Self> {
        uri::parse_absolute(uri).map(Self::rooted_at)
    }

    /// Create a client rooted at an already parsed URI.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUri`] for URIs that cannot be navigated
    /// (`cannot_be_a_base`).
    pub fn from_url(url: Url) -> Result<Self> {
        uri::ensure_hierarchical(url).map(Self::rooted_at)
    }

    /// Fork a new client at `other`'s current location.
    ///
    /// Both base and current of the new client are `other`'s **current** URI, not
    /// its base. History starts empty; headers are copied.
    ///
    /// ```
    /// use fluent_http_client::WebClient;
    ///
    /// let mut client = WebClient::new("http://foo").unwrap();
    /// client.path("bar");
    ///
    /// let fork = WebClient::from_client(&client);
    /// assert_eq!(fork.base_uri().as_str(), "http://foo/bar");
    /// assert_eq!(fork.history_len(), 0);
    /// ```
    pub fn from_client(other: &WebClient) -> Self {
        Self::from_client_with(other, true)
    }

    /// Fork a new client at `other`'s current location, optionally copying headers.
    pub fn from_client_with(other: &WebClient, inherit_headers: bool) -> Self {
        let mut client = Self::rooted_at(other.current.clone());
        if inherit_headers {
            client.headers = other.headers.clone();
        }
        client
    }

    fn rooted_at(url: Url) -> Self {
        WebClient {
            current: url.clone(),
            base: url,
            history: Vec::new(),
            headers: Headers::new(),
        }
    }

    // ========== Navigation ==========

    /// Append a path segment (inner `/` split it into several segments).
    ///
    /// `.` and `..` segments are ignored, so the result always stays under the
    /// current path.
    pub fn path(&mut self, segment: &str) -> &mut Self {
        let next = uri::append_path(&self.current, segment);
        self.navigate(next)
    }

    /// Append a `;name=value` matrix parameter to the last path segment.
    pub fn matrix(&mut self, name: &str, value: &str) -> &mut Self {
        let next = uri::append_matrix(&self.current, name, value);
        self.navigate(next)
    }

    /// Append a `name=value` query parameter.
    pub fn query(&mut self, name: &str, value: &str) -> &mut Self {
        let next = uri::append_query(&self.current, name, value);
        self.navigate(next)
    }

    /// Append one query parameter per value, as a single undo step.
    pub fn query_values<I, V>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let next = values
            .into_iter()
            .fold(self.current.clone(), |url, value| {
                uri::append_query(&url, name, value.as_ref())
            });
        self.navigate(next)
    }

    /// Replace the whole path of the current URI.
    pub fn replace_path(&mut self, path: &str) -> &mut Self {
        let next = uri::replace_path(&self.current, path);
        self.navigate(next)
    }

    /// Replace the raw query of the current URI; `None` removes it.
    pub fn replace_query(&mut self, query: Option<&str>) -> &mut Self {
        let next = uri::replace_query(&self.current, query);
        self.navigate(next)
    }

    /// Set or clear the fragment of the current URI.
    pub fn fragment(&mut self, fragment: Option<&str>) -> &mut Self {
        let next = uri::set_fragment(&self.current, fragment);
        self.navigate(next)
    }

    fn navigate(&mut self, next: Url) -> &mut Self {
        tracing::trace!(from = %self.current, to = %next, "navigate");
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        self
    }

    // ========== Redirection ==========

    /// Move to a new location.
    ///
    /// With `forward` set, `location` must extend the base (see
    /// [`is_extension_of`](crate::protocol::is_extension_of)); the base is kept and
    /// current moves to `location`. Without it, both base and current become
    /// `location`. History is cleared either way.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidUri`] if `location` is not absolute, or
    /// [`ClientError::NotAnExtension`] for a forward move outside the base. The
    /// client is left untouched on error.
    ///
    /// ```
    /// use fluent_http_client::WebClient;
    ///
    /// let mut client = WebClient::new("http://foo").unwrap();
    /// client.to("http://foo/bar", true).unwrap();
    /// assert_eq!(client.base_uri().as_str(), "http://foo/");
    /// assert_eq!(client.current_uri().as_str(), "http://foo/bar");
    ///
    /// assert!(client.to("http://bar", true).is_err());
    /// ```
    pub fn to(&mut self, location: &str, forward: bool) -> Result<&mut Self> {
        let target = uri::parse_absolute(location)?;

        if forward {
            if !uri::is_extension_of(&self.base, &target) {
                tracing::warn!(
                    base = %self.base,
                    location = %target,
                    "rejected forward redirection"
                );
                return Err(ClientError::NotAnExtension {
                    base: self.base.to_string(),
                    target: target.to_string(),
                });
            }
            tracing::debug!(base = %self.base, to = %target, "forward");
            self.current = target;
        } else {
            tracing::debug!(from = %self.base, to = %target, "rebase");
            self.base = target.clone();
            self.current = target;
        }

        self.history.clear();
        Ok(self)
    }

    // ========== Undo ==========

    /// Undo navigation.
    ///
    /// `fast` jumps to the oldest recorded location (the state right after the last
    /// construction or redirection) and empties the history; otherwise exactly one
    /// step is undone. With no history this does nothing.
    pub fn back(&mut self, fast: bool) -> &mut Self {
        let restored = if fast {
            self.history.drain(..).next()
        } else {
            self.history.pop()
        };

        if let Some(url) = restored {
            tracing::trace!(from = %self.current, to = %url, fast, "back");
            self.current = url;
        }
        self
    }

    // ========== Headers ==========

    /// Append a header value.
    pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.add(name, value);
        self
    }

    /// Append several values for one header.
    pub fn header_values<I, V>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.headers.add(name, value);
        }
        self
    }

    /// Clear all headers. Locations and history are kept.
    pub fn reset(&mut self) -> &mut Self {
        self.headers.clear();
        self
    }

    // ========== Accessors ==========

    /// The base URI.
    ///
    /// Held as a parsed [`Url`], so an empty path reads back as `/`: a client built
    /// from `http://foo` reports `http://foo/`. Compare `Url` values rather than
    /// strings.
    pub fn base_uri(&self) -> &Url {
        &self.base
    }

    /// The current URI, with every navigation step applied (normalized like
    /// [`base_uri`](Self::base_uri))
    pub fn current_uri(&self) -> &Url {
        &self.current
    }

    /// Request headers accumulated so far
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Number of undo steps available
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ========== Transport ==========

    /// Snapshot the current URI and headers as a request.
    pub fn request(&self, method: http::Method) -> HttpRequest {
        HttpRequest::new(method, self.current.clone()).with_headers(self.headers.clone())
    }

    /// Send a request to the current URI through `transport`.
    ///
    /// The client itself is not modified.
    pub async fn invoke<T>(
        &self,
        transport: &T,
        method: http::Method,
        body: impl Into<Bytes>,
    ) -> Result<HttpResponse>
    where
        T: Transport + ?Sized,
    {
        transport.send(self.request(method).with_body(body)).await
    }

    /// `GET` the current URI
    pub async fn get<T: Transport + ?Sized>(&self, transport: &T) -> Result<HttpResponse> {
        self.invoke(transport, http::Method::GET, Bytes::new()).await
    }

    /// `POST` a body to the current URI
    pub async fn post<T: Transport + ?Sized>(
        &self,
        transport: &T,
        body: impl Into<Bytes>,
    ) -> Result<HttpResponse> {
        self.invoke(transport, http::Method::POST, body).await
    }

    /// `PUT` a body to the current URI
    pub async fn put<T: Transport + ?Sized>(
        &self,
        transport: &T,
        body: impl Into<Bytes>,
    ) -> Result<HttpResponse> {
        self.invoke(transport, http::Method::PUT, body).await
    }

    /// `DELETE` the current URI
    pub async fn delete<T: Transport + ?Sized>(&self, transport: &T) -> Result<HttpResponse> {
        self.invoke(transport, http::Method::DELETE, Bytes::new()).await
    }
}

impl FromStr for WebClient {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        WebClient::new(s)
    }
}

impl TryFrom<&str> for WebClient {
    type Error = ClientError;

    fn try_from(value: &str) -> Result<Self> {
        WebClient::new(value)
    }
}

impl TryFrom<Url> for WebClient {
    type Error = ClientError;

    fn try_from(value: Url) -> Result<Self> {
        WebClient::from_url(value)
    }
}

impl From<&WebClient> for WebClient {
    fn from(other: &WebClient) -> Self {
        WebClient::from_client(other)
    }
}
