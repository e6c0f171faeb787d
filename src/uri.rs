//! Parsed absolute URI type.

use std::fmt;
use std::str::FromStr;

use fluent_uri::component::Host;
use fluent_uri::encoding::{EStr, Encoder};
use fluent_uri::{Uri, UriRef};

use crate::authority::Authority;
use crate::constants::{ABSENT_PORT, AUTHORITY_PREFIX};
use crate::error::{ParseError, ParseErrorKind};

/// A parsed absolute URI, exposing the components that take part in
/// scheme-agnostic ordering.
///
/// Syntax is checked against RFC 3986 by [`fluent_uri`]. Every component
/// except the scheme, port, and IP-literal hosts is percent-decoded (invalid
/// UTF-8 becomes U+FFFD), so `%41` and `A` read the same. Letter case, default
/// ports, and dot segments are not normalized. [`as_str`](Self::as_str) keeps
/// the text as given.
///
/// A URI is **opaque** when it has no authority and its path does not start
/// with '/', e.g. `mailto:a@b.com` or `urn:isbn:0451450523`. Every other URI
/// is **hierarchical** and has a path (possibly empty).
///
/// `ParsedUri` deliberately has no [`Ord`] impl: its equality is structural,
/// while [`compare_uris`](crate::compare_uris) treats `http` and `https` as
/// equal. Wrap values in [`SchemeAgnostic`](crate::SchemeAgnostic) to key
/// ordered collections.
///
/// # Examples
///
/// ```
/// use scheme_agnostic_uri::ParsedUri;
///
/// let uri = ParsedUri::parse("https://user@Example.com:8443/a/b?x=1#top").unwrap();
/// assert_eq!(uri.scheme(), "https");
/// assert!(!uri.is_opaque());
/// assert_eq!(uri.user_info(), Some("user"));
/// assert_eq!(uri.host(), Some("Example.com"));
/// assert_eq!(uri.port(), Some(8443));
/// assert_eq!(uri.path(), Some("/a/b"));
/// assert_eq!(uri.query(), Some("x=1"));
/// assert_eq!(uri.fragment(), Some("top"));
///
/// let uri = ParsedUri::parse("mailto:a@b.com").unwrap();
/// assert!(uri.is_opaque());
/// assert_eq!(uri.scheme_specific_part(), "a@b.com");
/// assert_eq!(uri.path(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedUri {
    scheme: String,
    scheme_specific_part: String,
    shape: Shape,
    fragment: Option<String>,
    /// Original string representation
    serialized: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Shape {
    Opaque,
    Hierarchical {
        authority: Option<Authority>,
        path: String,
        query: Option<String>,
    },
}

impl ParsedUri {
    /// Parses an absolute URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input is a relative reference with no scheme
    /// - The input does not match the RFC 3986 `URI` rule
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Returns the scheme exactly as written.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns true if the URI has no authority and a path not starting with '/'.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self.shape, Shape::Opaque)
    }

    /// Returns the decoded text between the scheme's ':' and the fragment's '#'.
    ///
    /// Only opaque URIs are ordered by this component, but it is available
    /// for every URI.
    ///
    /// ```
    /// use scheme_agnostic_uri::ParsedUri;
    ///
    /// let uri = ParsedUri::parse("http://example.com/p?q#f").unwrap();
    /// assert_eq!(uri.scheme_specific_part(), "//example.com/p?q");
    /// ```
    #[must_use]
    pub fn scheme_specific_part(&self) -> &str {
        &self.scheme_specific_part
    }

    /// Returns the decoded fragment, if present. `Some("")` for a trailing '#'.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the classified authority, if the URI has a non-empty one.
    #[must_use]
    pub const fn authority_component(&self) -> Option<&Authority> {
        match &self.shape {
            Shape::Hierarchical { authority, .. } => authority.as_ref(),
            Shape::Opaque => None,
        }
    }

    /// Returns the decoded authority text, if the URI has a non-empty authority.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority_component().map(Authority::decoded)
    }

    /// Returns the host of a server-based authority.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.authority_component().and_then(Authority::host)
    }

    /// Returns the decoded userinfo of a server-based authority.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.authority_component().and_then(Authority::user_info)
    }

    /// Returns the port of a server-based authority.
    ///
    /// No scheme default is substituted: `http://example.com` has no port.
    #[must_use]
    pub fn port(&self) -> Option<u32> {
        self.authority_component().and_then(Authority::port)
    }

    /// Returns the port as an integer, or [`ABSENT_PORT`] (-1) if there is none.
    #[must_use]
    pub fn port_or_absent(&self) -> i32 {
        self.port()
            .map_or(ABSENT_PORT, |p| i32::try_from(p).unwrap_or(ABSENT_PORT))
    }

    /// Returns the decoded path of a hierarchical URI. Opaque URIs have none.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match &self.shape {
            Shape::Hierarchical { path, .. } => Some(path),
            Shape::Opaque => None,
        }
    }

    /// Returns the decoded query of a hierarchical URI, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match &self.shape {
            Shape::Hierarchical { query, .. } => query.as_deref(),
            Shape::Opaque => None,
        }
    }

    /// Returns the URI string as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    #[allow(clippy::redundant_closure_for_method_calls)]
    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        let uri = match Uri::parse(input) {
            Ok(uri) => uri,
            Err(e) => {
                if UriRef::parse(input).is_ok() {
                    return Err(ParseErrorKind::MissingScheme);
                }
                return Err(ParseErrorKind::Syntax {
                    reason: e.to_string(),
                });
            }
        };

        let scheme = uri.scheme().as_str().to_string();
        let fragment = uri.fragment().map(decode);
        let path = uri.path();
        let query = uri.query().map(decode);

        let authority = uri.authority();
        let classified = authority.as_ref().and_then(|auth| {
            let host = match auth.host_parsed() {
                Host::RegName(name) => decode(name),
                _ => auth.host().to_string(),
            };
            Authority::classify(
                auth.as_str(),
                auth.userinfo().map(decode).as_deref(),
                &host,
                auth.port().map(|p| p.as_str()),
            )
        });

        let mut scheme_specific_part = String::with_capacity(input.len());
        if authority.is_some() {
            scheme_specific_part.push_str(AUTHORITY_PREFIX);
            scheme_specific_part.push_str(classified.as_ref().map_or("", Authority::decoded));
        }
        let path_decoded = decode(path);
        scheme_specific_part.push_str(&path_decoded);
        if let Some(query) = &query {
            scheme_specific_part.push('?');
            scheme_specific_part.push_str(query);
        }

        let shape = if authority.is_none() && !path.as_str().starts_with('/') {
            Shape::Opaque
        } else {
            Shape::Hierarchical {
                authority: classified,
                path: path_decoded,
                query,
            }
        };

        Ok(Self {
            scheme,
            scheme_specific_part,
            shape,
            fragment,
            serialized: input.to_string(),
        })
    }
}

fn decode<E: Encoder>(s: &EStr<E>) -> String {
    s.decode().into_string_lossy().into_owned()
}

impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialized)
    }
}

impl FromStr for ParsedUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ParsedUri {
    fn as_ref(&self) -> &str {
        &self.serialized
    }
}

impl TryFrom<&str> for ParsedUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.serialized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParsedUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
