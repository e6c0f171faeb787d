//! Ordered-collection key using scheme-agnostic ordering.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::compare::compare_uris;
use crate::uri::ParsedUri;

/// A URI whose [`Ord`] and [`Eq`] follow [`compare_uris`].
///
/// Use it as the key of a `BTreeSet` or `BTreeMap` so that URIs differing only
/// in `http` vs `https`, scheme or host case, or a missing vs empty fragment
/// collapse into one entry. Works with owned URIs and with references.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use scheme_agnostic_uri::{ParsedUri, SchemeAgnostic};
///
/// let mut seen = BTreeSet::new();
/// assert!(seen.insert(SchemeAgnostic::new(ParsedUri::parse("http://example.com/").unwrap())));
/// assert!(!seen.insert(SchemeAgnostic::new(ParsedUri::parse("https://EXAMPLE.com/").unwrap())));
/// assert_eq!(seen.len(), 1);
///
/// let first = ParsedUri::parse("https://a.com/").unwrap();
/// let second = ParsedUri::parse("http://a.com/#").unwrap();
/// assert_eq!(SchemeAgnostic::new(&first), SchemeAgnostic::new(&second));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemeAgnostic<U = ParsedUri>(U);

impl<U: Borrow<ParsedUri>> SchemeAgnostic<U> {
    /// Wraps a URI.
    #[must_use]
    pub const fn new(uri: U) -> Self {
        Self(uri)
    }

    /// Returns the wrapped URI.
    #[must_use]
    pub fn get(&self) -> &ParsedUri {
        self.0.borrow()
    }

    /// Unwraps the URI.
    #[must_use]
    pub fn into_inner(self) -> U {
        self.0
    }
}

impl<U: Borrow<ParsedUri>> PartialEq for SchemeAgnostic<U> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<U: Borrow<ParsedUri>> Eq for SchemeAgnostic<U> {}

impl<U: Borrow<ParsedUri>> PartialOrd for SchemeAgnostic<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Borrow<ParsedUri>> Ord for SchemeAgnostic<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_uris(self.get(), other.get())
    }
}

impl<U: Borrow<ParsedUri>> Deref for SchemeAgnostic<U> {
    type Target = ParsedUri;

    fn deref(&self) -> &ParsedUri {
        self.get()
    }
}

impl<U: Borrow<ParsedUri>> fmt::Display for SchemeAgnostic<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl From<ParsedUri> for SchemeAgnostic<ParsedUri> {
    fn from(uri: ParsedUri) -> Self {
        Self(uri)
    }
}

impl<'a> From<&'a ParsedUri> for SchemeAgnostic<&'a ParsedUri> {
    fn from(uri: &'a ParsedUri) -> Self {
        Self(uri)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SchemeAgnostic<ParsedUri> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SchemeAgnostic<ParsedUri> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <ParsedUri as serde::Deserialize>::deserialize(deserializer).map(Self)
    }
}
