//! URI manipulation helpers used by the navigable builder.
//!
//! Every helper takes a resolved [`Url`] and returns a new one; nothing here mutates
//! its input. That keeps the builder's history a plain list of snapshots.
//!
//! # Encoding
//!
//! | Component | Encoded characters | Example |
//! |-----------|--------------------|---------|
//! | Path segment | everything but unreserved, sub-delims (minus `;`), `:` and `@` | `a b` → `a%20b` |
//! | Matrix name/value | as path segments, plus `=` | `a=b` → `a%3Db` |
//! | Query pair | `application/x-www-form-urlencoded` | `a b` → `a+b` |
//!
//! # Examples
//!
//! ```
//! use fluent_http_client::protocol::{append_matrix, append_path, append_query, parse_absolute};
//!
//! let base = parse_absolute("http://foo").unwrap();
//! let url = append_path(&base, "bar");
//! let url = append_matrix(&url, "m1", "m1value");
//! let url = append_query(&url, "q1", "q1value");
//! assert_eq!(url.as_str(), "http://foo/bar;m1=m1value?q1=q1value");
//! ```

use crate::error::{ClientError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Characters escaped inside a matrix parameter name or value.
const MATRIX: &AsciiSet = &SEGMENT.add(b'=');

/// Parse an absolute, hierarchical URI.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUri`] when the input is relative, malformed, or
/// cannot act as a base for path navigation (for instance `mailto:` URIs).
///
/// # Examples
///
/// ```
/// use fluent_http_client::protocol::parse_absolute;
///
/// assert!(parse_absolute("http://foo").is_ok());
/// assert!(parse_absolute("/relative/path").is_err());
/// assert!(parse_absolute("mailto:someone@example.com").is_err());
/// ```
pub fn parse_absolute(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| ClientError::invalid_uri(input, e.to_string()))?;
    ensure_hierarchical(url)
}

/// Reject URIs that have no hierarchical path to navigate.
pub fn ensure_hierarchical(url: Url) -> Result<Url> {
    if url.cannot_be_a_base() {
        return Err(ClientError::invalid_uri(url.as_str(), "URI is not hierarchical"));
    }
    Ok(url)
}

/// Append one or more path segments.
///
/// Leading and trailing `/` are ignored; inner `/` separate segments. Each segment is
/// percent-encoded, so `;`, `?` and `#` inside it never turn into matrix, query or
/// fragment delimiters. Query and fragment of the input are kept.
///
/// `.` and `..` segments are skipped like empty ones. URL parsing removes dot
/// segments (escaped `%2E` forms included), so they could only shorten the path.
///
/// ```
/// use fluent_http_client::protocol::{append_path, parse_absolute};
///
/// let base = parse_absolute("http://foo/api?x=1").unwrap();
/// assert_eq!(append_path(&base, "a/b c").as_str(), "http://foo/api/a/b%20c?x=1");
/// ```
pub fn append_path(url: &Url, segment: &str) -> Url {
    let parts: Vec<String> = segment
        .split('/')
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .map(|part| utf8_percent_encode(part, SEGMENT).to_string())
        .collect();

    if parts.is_empty() {
        return url.clone();
    }

    let mut path = url.path().trim_end_matches('/').to_string();
    for part in parts {
        path.push('/');
        path.push_str(&part);
    }

    let mut next = url.clone();
    next.set_path(&path);
    next
}

/// Append a `;name=value` matrix parameter to the last path segment.
///
/// A trailing `/` on the path is dropped first so the parameter binds to the last
/// named segment rather than to an empty one.
pub fn append_matrix(url: &Url, name: &str, value: &str) -> Url {
    let mut path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path.push(';');
    path.push_str(&utf8_percent_encode(name, MATRIX).to_string());
    path.push('=');
    path.push_str(&utf8_percent_encode(value, MATRIX).to_string());

    let mut next = url.clone();
    next.set_path(&path);
    next
}

/// Append a `name=value` query pair after any existing pairs.
///
/// Pairs are form-encoded. Existing pairs are never reordered and repeated names
/// are kept.
pub fn append_query(url: &Url, name: &str, value: &str) -> Url {
    let mut next = url.clone();
    next.query_pairs_mut().append_pair(name, value);
    next
}

/// Replace the whole path, matrix parameters included.
///
/// The input is taken as raw path text; characters not allowed in a path are
/// percent-encoded, existing escapes are preserved.
pub fn replace_path(url: &Url, path: &str) -> Url {
    let mut next = url.clone();
    next.set_path(path);
    next
}

/// Replace the raw query string; `None` removes it.
pub fn replace_query(url: &Url, query: Option<&str>) -> Url {
    let mut next = url.clone();
    next.set_query(query);
    next
}

/// Set or clear the fragment.
pub fn set_fragment(url: &Url, fragment: Option<&str>) -> Url {
    let mut next = url.clone();
    next.set_fragment(fragment);
    next
}

/// Whether `candidate` extends `base` under URI-prefix semantics.
///
/// Scheme, credentials, host and effective port must match. The base path must be
/// a prefix of the candidate path ending on a segment boundary (`/` or `;`). When
/// the base carries a query, the candidate must address the same path and its
/// query must start with the base query on a pair boundary. Fragments are ignored.
///
/// # Examples
///
/// ```
/// use fluent_http_client::protocol::{is_extension_of, parse_absolute};
///
/// let base = parse_absolute("http://foo/api").unwrap();
/// assert!(is_extension_of(&base, &parse_absolute("http://foo/api/users").unwrap()));
/// assert!(!is_extension_of(&base, &parse_absolute("http://foo/apix").unwrap()));
/// assert!(!is_extension_of(&base, &parse_absolute("http://bar/api").unwrap()));
/// ```
pub fn is_extension_of(base: &Url, candidate: &Url) -> bool {
    if base.scheme() != candidate.scheme()
        || base.username() != candidate.username()
        || base.password() != candidate.password()
        || base.host_str() != candidate.host_str()
        || base.port_or_known_default() != candidate.port_or_known_default()
    {
        return false;
    }

    let base_path = base.path();
    let candidate_path = candidate.path();

    match base.query() {
        Some(base_query) => {
            candidate_path == base_path
                && candidate
                    .query()
                    .is_some_and(|query| has_boundary_prefix(query, base_query, b"&"))
        }
        None => {
            candidate_path == base_path
                || (base_path.ends_with('/') && candidate_path.starts_with(base_path))
                || has_boundary_prefix(candidate_path, base_path, b"/;")
        }
    }
}

/// `value` starts with `prefix` and the next byte (if any) is one of `boundaries`.
fn has_boundary_prefix(value: &str, prefix: &str, boundaries: &[u8]) -> bool {
    if !value.starts_with(prefix) {
        return false;
    }
    match value.as_bytes().get(prefix.len()) {
        None => true,
        Some(byte) => boundaries.contains(byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        parse_absolute(s).unwrap()
    }

    #[test]
    fn test_parse_absolute_rejects_relative() {
        let err = parse_absolute("foo/bar").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_parse_absolute_rejects_opaque() {
        let err = parse_absolute("mailto:a@b.c").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUri { .. }));
    }

    #[test]
    fn test_append_path_to_root() {
        assert_eq!(append_path(&url("http://foo"), "bar").as_str(), "http://foo/bar");
    }

    #[test]
    fn test_append_path_trims_slashes() {
        let next = append_path(&url("http://foo/a/"), "/b/c/");
        assert_eq!(next.as_str(), "http://foo/a/b/c");
    }

    #[test]
    fn test_append_path_empty_segment_is_identity() {
        let base = url("http://foo/a");
        assert_eq!(append_path(&base, "/"), base);
        assert_eq!(append_path(&base, ""), base);
    }

    #[test]
    fn test_append_path_skips_dot_segments() {
        let base = url("http://foo/api");

        let up = append_path(&base, "..");
        assert_eq!(up, base);
        assert!(is_extension_of(&base, &up));

        assert_eq!(append_path(&url("http://foo/a"), ".").as_str(), "http://foo/a");

        let mixed = append_path(&base, "a/../b/./c");
        assert_eq!(mixed.as_str(), "http://foo/api/a/b/c");
        assert!(is_extension_of(&base, &mixed));
    }

    #[test]
    fn test_append_path_escapes_encoded_dots() {
        let next = append_path(&url("http://foo/api"), "%2E%2E");
        assert_eq!(next.as_str(), "http://foo/api/%252E%252E");
    }

    #[test]
    fn test_append_path_escapes_delimiters() {
        let next = append_path(&url("http://foo"), "a;b?c#d");
        assert_eq!(next.as_str(), "http://foo/a%3Bb%3Fc%23d");
        assert_eq!(next.query(), None);
        assert_eq!(next.fragment(), None);
    }

    #[test]
    fn test_append_path_after_matrix() {
        let with_matrix = append_matrix(&url("http://foo/a"), "m", "1");
        let next = append_path(&with_matrix, "b");
        assert_eq!(next.as_str(), "http://foo/a;m=1/b");
    }

    #[test]
    fn test_append_path_keeps_query() {
        let next = append_path(&url("http://foo/a?x=1"), "b");
        assert_eq!(next.as_str(), "http://foo/a/b?x=1");
    }

    #[test]
    fn test_append_matrix_in_order() {
        let a = append_matrix(&url("http://foo/bar"), "m1", "v1");
        let b = append_matrix(&a, "m2", "v2");
        let c = append_matrix(&b, "m1", "again");
        assert_eq!(c.as_str(), "http://foo/bar;m1=v1;m2=v2;m1=again");
    }

    #[test]
    fn test_append_matrix_escapes() {
        let next = append_matrix(&url("http://foo/bar"), "a=b", "c;d/e");
        assert_eq!(next.as_str(), "http://foo/bar;a%3Db=c%3Bd%2Fe");
    }

    #[test]
    fn test_append_matrix_drops_trailing_slash() {
        let next = append_matrix(&url("http://foo/bar/"), "m", "v");
        assert_eq!(next.as_str(), "http://foo/bar;m=v");
    }

    #[test]
    fn test_append_query_keeps_duplicates() {
        let a = append_query(&url("http://foo"), "q", "1");
        let b = append_query(&a, "p", "2");
        let c = append_query(&b, "q", "3");
        assert_eq!(c.as_str(), "http://foo/?q=1&p=2&q=3");
    }

    #[test]
    fn test_append_query_form_encodes() {
        let next = append_query(&url("http://foo/s"), "a b", "c&d=e");
        assert_eq!(next.as_str(), "http://foo/s?a+b=c%26d%3De");
    }

    #[test]
    fn test_replace_path_and_query() {
        let base = url("http://foo/a/b;m=1?x=1#top");
        let replaced = replace_path(&base, "/c");
        assert_eq!(replaced.as_str(), "http://foo/c?x=1#top");

        let no_query = replace_query(&replaced, None);
        assert_eq!(no_query.as_str(), "http://foo/c#top");

        let no_fragment = set_fragment(&no_query, None);
        assert_eq!(no_fragment.as_str(), "http://foo/c");
    }

    #[test]
    fn test_extension_same_location() {
        assert!(is_extension_of(&url("http://foo"), &url("http://foo")));
    }

    #[test]
    fn test_extension_root_base() {
        let base = url("http://foo");
        assert!(is_extension_of(&base, &url("http://foo/bar")));
        assert!(is_extension_of(&base, &url("http://foo/bar?q=1")));
    }

    #[test]
    fn test_extension_segment_boundary() {
        let base = url("http://foo/api");
        assert!(is_extension_of(&base, &url("http://foo/api/v1")));
        assert!(is_extension_of(&base, &url("http://foo/api;m=1")));
        assert!(!is_extension_of(&base, &url("http://foo/apiary")));
        assert!(!is_extension_of(&base, &url("http://foo/other")));
    }

    #[test]
    fn test_extension_origin_mismatch() {
        let base = url("http://foo");
        assert!(!is_extension_of(&base, &url("http://bar")));
        assert!(!is_extension_of(&base, &url("https://foo")));
        assert!(!is_extension_of(&base, &url("http://foo:8080/")));
        assert!(is_extension_of(&base, &url("http://foo:80/x")));
    }

    #[test]
    fn test_extension_with_base_query() {
        let base = url("http://foo/s?a=1");
        assert!(is_extension_of(&base, &url("http://foo/s?a=1")));
        assert!(is_extension_of(&base, &url("http://foo/s?a=1&b=2")));
        assert!(!is_extension_of(&base, &url("http://foo/s?a=10")));
        assert!(!is_extension_of(&base, &url("http://foo/s/t?a=1")));
    }
}
