//! URI and header plumbing shared by the client.
//!
//! - [`uri`] - absolute URI parsing, path/matrix/query composition, extension checks
//! - [`headers`] - conversion between [`Headers`](crate::Headers) and `http` types

pub mod headers;
pub mod uri;

pub use headers::*;
pub use uri::*;
