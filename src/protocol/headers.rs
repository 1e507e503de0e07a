//! Conversion between the builder's [`Headers`] and the wire-level `http` types.
//!
//! The builder keeps header names exactly as supplied. The wire representation
//! ([`http::HeaderMap`]) is case-insensitive, so entries that only differ in case are
//! merged in name order when converted.
//!
//! # Examples
//!
//! ```
//! use fluent_http_client::Headers;
//! use fluent_http_client::protocol::to_header_map;
//!
//! let mut headers = Headers::new();
//! headers.add("Accept", "text/plain");
//! headers.add("Accept", "application/json");
//!
//! let map = to_header_map(&headers).unwrap();
//! assert_eq!(map.get_all("accept").iter().count(), 2);
//! ```

use crate::error::Result;
use crate::types::Headers;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;

/// Build an [`http::HeaderMap`] from [`Headers`].
///
/// Every value is appended, so multi-valued entries become repeated header lines.
///
/// # Errors
///
/// Returns [`ClientError::InvalidHeaderName`](crate::ClientError::InvalidHeaderName) or
/// [`ClientError::InvalidHeaderValue`](crate::ClientError::InvalidHeaderValue) when an
/// entry cannot be represented on the wire.
pub fn to_header_map(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, values) in headers.iter() {
        let header_name = HeaderName::try_from(name)?;
        for value in values {
            map.append(header_name.clone(), HeaderValue::try_from(value.as_str())?);
        }
    }
    Ok(map)
}

/// Flatten a response [`http::HeaderMap`] into lowercase name → first value.
///
/// Values that are not visible ASCII are skipped.
pub fn flatten_header_map(map: &HeaderMap) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    for (name, value) in map {
        if let Ok(val) = value.to_str() {
            headers
                .entry(name.as_str().to_string())
                .or_insert_with(|| val.to_string());
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_header_map_appends_all_values() {
        let headers: Headers = [("h1", "v1"), ("h1", "v2"), ("h2", "v3")]
            .into_iter()
            .collect();
        let map = to_header_map(&headers).unwrap();

        let h1: Vec<_> = map.get_all("h1").iter().map(|v| v.to_str().unwrap()).collect();
        assert_eq!(h1, vec!["v1", "v2"]);
        assert_eq!(map.get("h2").unwrap(), "v3");
    }

    #[test]
    fn test_to_header_map_merges_case_variants() {
        let headers: Headers = [("X-Trace", "a"), ("x-trace", "b")].into_iter().collect();
        let map = to_header_map(&headers).unwrap();
        assert_eq!(map.get_all("x-trace").iter().count(), 2);
    }

    #[test]
    fn test_to_header_map_invalid_name() {
        let headers: Headers = [("bad name", "v")].into_iter().collect();
        let err = to_header_map(&headers).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_to_header_map_invalid_value() {
        let headers: Headers = [("h", "line\nbreak")].into_iter().collect();
        assert!(to_header_map(&headers).is_err());
    }

    #[test]
    fn test_flatten_keeps_first_value() {
        let mut map = HeaderMap::new();
        map.append("set-cookie", HeaderValue::from_static("a=1"));
        map.append("set-cookie", HeaderValue::from_static("b=2"));
        map.insert("content-type", HeaderValue::from_static("text/plain"));

        let flat = flatten_header_map(&map);
        assert_eq!(flat.get("set-cookie").map(String::as_str), Some("a=1"));
        assert_eq!(flat.get("content-type").map(String::as_str), Some("text/plain"));
    }
}
