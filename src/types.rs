//! Core value types shared between the builder and the HTTP layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Headers`] | Multi-valued header map, names kept as supplied |
//! | [`HttpRequest`] | Snapshot of a request ready for a [`Transport`](crate::client::Transport) |
//! | [`HttpResponse`] | What a transport hands back |

use bytes::Bytes;
use std::collections::BTreeMap;
use url::Url;

/// Multi-valued request header map.
///
/// Each name maps to an ordered list of values. Values added under the same name
/// accumulate in insertion order. Names are stored exactly as supplied, so `Accept`
/// and `accept` are distinct entries; case-insensitive merging is left to the
/// transport when it builds the wire representation.
///
/// # Examples
///
/// ```
/// use fluent_http_client::Headers;
///
/// let mut headers = Headers::new();
/// headers.add("h1", "v1");
/// headers.add("h1", "v2");
/// assert_eq!(headers.get_first("h1"), Some("v1"));
/// assert_eq!(headers.get("h1").map(|v| v.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: BTreeMap<String, Vec<String>>,
}

impl Headers {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `name`, creating the entry if absent.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().push(value.into());
    }

    /// All values recorded under `name`, in insertion order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// The first value recorded under `name`.
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether any value is recorded under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove every value under `name`, returning them.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(name)
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of distinct header names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, values)` pairs, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.add(name, value);
        }
        headers
    }
}

/// A request snapshot handed to the HTTP layer.
///
/// Produced by [`WebClient::request`](crate::WebClient::request). Holds everything a
/// transport needs: method, resolved URI, headers and body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Fully resolved target URI
    pub uri: Url,
    /// Request headers
    pub headers: Headers,
    /// Request body (empty for none)
    pub body: Bytes,
}

impl HttpRequest {
    /// Create a request without headers or body
    pub fn new(method: http::Method, uri: Url) -> Self {
        HttpRequest {
            method,
            uri,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// Replace the headers
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Replace the body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

/// Response returned by a [`Transport`](crate::client::Transport).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercase names, first value only)
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a response header by lowercase name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
