//! Total ordering over absolute URIs that treats `http` and `https` as the
//! same scheme.
//!
//! # Overview
//!
//! [`compare_uris`] orders two [`ParsedUri`] values component by component.
//! It lower-cases schemes and strips one trailing `s` before comparing them,
//! so `http://example.com/x` and `HTTPS://Example.com/x` compare equal, while
//! everything else (paths, queries, ports, userinfo) stays significant. The
//! ordering is total, which makes it safe for sorting, binary search, and
//! ordered collections.
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use scheme_agnostic_uri::{compare_uris, ParsedUri};
//!
//! let a = ParsedUri::parse("http://example.com/x").unwrap();
//! let b = ParsedUri::parse("https://example.com/x").unwrap();
//! assert_eq!(compare_uris(&a, &b), Ordering::Equal);
//!
//! // No default-port normalization: an absent port sorts before port 80.
//! let c = ParsedUri::parse("http://example.com:80/x").unwrap();
//! assert_eq!(compare_uris(&a, &c), Ordering::Less);
//! ```
//!
//! # Ordered Collections
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use scheme_agnostic_uri::{ParsedUri, SchemeAgnostic};
//!
//! let set: BTreeSet<SchemeAgnostic> = ["https://a.com/", "http://a.com/", "mailto:x@a.com"]
//!     .iter()
//!     .map(|s| SchemeAgnostic::new(ParsedUri::parse(s).unwrap()))
//!     .collect();
//! assert_eq!(set.len(), 2);
//! ```
//!
//! # Comparison Precedence
//!
//! | Step | Components | Rule |
//! |------|------------|------|
//! | 1 | scheme | lower-case, strip one trailing `s`, byte-wise |
//! | 2 | opacity | opaque after hierarchical; two opaque URIs compare scheme-specific part, then fragment |
//! | 3 | authority | server-based: userinfo, host (case-insensitive), port; otherwise decoded text, sorted before server-based |
//! | 4 | path, query | byte-wise |
//! | 5 | fragment | absent equals empty |
//!
//! Absent components sort before present ones, and percent-encoded
//! components compare by their decoded text (`%41` equals `A`). Parsing is
//! delegated to [`fluent_uri`], which validates RFC 3986 syntax; relative
//! references are rejected, so every [`ParsedUri`] has a scheme.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod compare;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod key;
pub mod prelude;
mod uri;

pub use authority::Authority;
pub use compare::{compare_schemes, compare_uris, dedup_uris, normalize_scheme, sort_uris};
pub use constants::{ABSENT_PORT, AUTHORITY_PREFIX, MAX_PORT, SECURE_SCHEME_SUFFIX};
pub use error::{ParseError, ParseErrorKind};
pub use key::SchemeAgnostic;
pub use uri::ParsedUri;
