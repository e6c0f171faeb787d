//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use scheme_agnostic_uri::prelude::*;
//!
//! let a = ParsedUri::parse("https://example.com/").unwrap();
//! let b = ParsedUri::parse("http://example.com/").unwrap();
//! assert!(compare_uris(&a, &b).is_eq());
//! ```

pub use crate::{
    // Core types
    Authority, ParsedUri, SchemeAgnostic,
    // Ordering
    compare_schemes, compare_uris, dedup_uris, normalize_scheme, sort_uris,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    ABSENT_PORT, SECURE_SCHEME_SUFFIX,
};
