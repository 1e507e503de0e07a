//! Error types for the fluent HTTP client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error type is
//! [`ClientError`]. Errors fall into two broad kinds (see [`ErrorKind`]):
//!
//! - **InvalidArgument** - the caller handed over something unusable: a string that
//!   is not an absolute URI, a forward redirection outside the base, or a header that
//!   cannot be represented on the wire. These are raised eagerly, before any state
//!   of the builder is touched.
//! - **Transport** - the collaborating HTTP layer failed to deliver a request.
//!
//! Failures inside work handed to [`OneShotExecutor`](crate::executor::OneShotExecutor)
//! never appear here. They stay on the thread that ran the work.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Coarse classification of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input supplied by the caller
    InvalidArgument,
    /// Failure reported by the HTTP transport
    Transport,
}

/// Errors produced by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The value does not parse as an absolute, hierarchical URI.
    #[error("invalid URI '{uri}': {reason}")]
    InvalidUri {
        /// The rejected input
        uri: String,
        /// Why it was rejected
        reason: String,
    },

    /// A forward redirection target does not extend the current base.
    #[error("'{target}' is not an extension of base '{base}'")]
    NotAnExtension {
        /// The base location at the time of the call
        base: String,
        /// The rejected redirection target
        target: String,
    },

    /// Header name cannot be used on the wire.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    /// Header value cannot be used on the wire.
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Configuration could not be parsed.
    #[error("invalid client config: {0}")]
    Config(String),

    /// The transport failed to complete the request.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The transport gave up waiting for a response.
    #[error("request timed out")]
    Timeout,
}

impl ClientError {
    /// Build an [`InvalidUri`](ClientError::InvalidUri) error.
    pub fn invalid_uri(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::InvalidUri {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidUri { .. }
            | ClientError::NotAnExtension { .. }
            | ClientError::InvalidHeaderName(_)
            | ClientError::InvalidHeaderValue(_)
            | ClientError::Config(_) => ErrorKind::InvalidArgument,
            ClientError::Http(_) | ClientError::Timeout => ErrorKind::Transport,
        }
    }

    /// Whether the caller supplied a malformed argument.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_uri_is_invalid_argument() {
        let err = ClientError::invalid_uri("foo", "relative URL without a base");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid URI 'foo': relative URL without a base"
        );
    }

    #[test]
    fn test_not_an_extension_message() {
        let err = ClientError::NotAnExtension {
            base: "http://foo/".into(),
            target: "http://bar/".into(),
        };
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "'http://bar/' is not an extension of base 'http://foo/'"
        );
    }

    #[test]
    fn test_transport_errors() {
        assert_eq!(ClientError::Timeout.kind(), ErrorKind::Transport);
        assert!(!ClientError::Http("refused".into()).is_invalid_argument());
    }

    #[test]
    fn test_header_name_conversion() {
        let err: ClientError = http::header::HeaderName::from_bytes(b"bad header")
            .unwrap_err()
            .into();
        assert!(err.is_invalid_argument());
    }
}
