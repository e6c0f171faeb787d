//! Authority classification for hierarchical URIs.
//!
//! RFC 3986 lets every authority be read as `[ userinfo "@" ] host [ ":" port ]`,
//! but not every such reading is usable as a network location. An authority is
//! treated as **server-based** when its host is non-empty and its port, if any,
//! is at most [`MAX_PORT`]. Everything else is **registry-based** and only its
//! decoded text takes part in ordering. An empty authority (`file:///etc`) is
//! no authority at all.

use std::fmt;

use crate::constants::MAX_PORT;

/// The authority component of a hierarchical URI.
///
/// Userinfo and registered-name hosts are percent-decoded; the raw text is
/// kept for display.
///
/// # Examples
///
/// ```
/// use scheme_agnostic_uri::ParsedUri;
///
/// let uri = ParsedUri::parse("http://us%65r@Example.com:8080/").unwrap();
/// let auth = uri.authority_component().unwrap();
/// assert!(auth.is_server_based());
/// assert_eq!(auth.user_info(), Some("user"));
/// assert_eq!(auth.host(), Some("Example.com"));
/// assert_eq!(auth.port(), Some(8080));
/// assert_eq!(auth.as_str(), "us%65r@Example.com:8080");
///
/// let uri = ParsedUri::parse("http://example.com:99999999999/").unwrap();
/// let auth = uri.authority_component().unwrap();
/// assert!(!auth.is_server_based());
/// assert_eq!(auth.decoded(), "example.com:99999999999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Authority {
    /// An authority that splits into userinfo, host, and port.
    Server {
        /// Raw authority text
        raw: String,
        /// Authority text with userinfo and host decoded
        decoded: String,
        /// Decoded userinfo before '@', if present
        user_info: Option<String>,
        /// Host, including brackets for IP literals
        host: String,
        /// Port, if present and non-empty
        port: Option<u32>,
    },
    /// An authority compared only as decoded text.
    Registry {
        /// Raw authority text
        raw: String,
        /// Authority text with userinfo and host decoded
        decoded: String,
    },
}

impl Authority {
    /// Classifies an authority from the pieces an RFC 3986 parser extracted.
    ///
    /// `user_info` and `host` are expected percent-decoded, `raw` and `port`
    /// as written. Returns `None` for an empty authority. An empty port
    /// (`host:`) counts as absent.
    #[must_use]
    pub fn classify(
        raw: &str,
        user_info: Option<&str>,
        host: &str,
        port: Option<&str>,
    ) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let mut decoded = String::with_capacity(raw.len());
        if let Some(user_info) = user_info {
            decoded.push_str(user_info);
            decoded.push('@');
        }
        decoded.push_str(host);
        if let Some(port) = port {
            decoded.push(':');
            decoded.push_str(port);
        }

        let port = match port {
            None | Some("") => Ok(None),
            Some(digits) => match digits.parse::<u32>() {
                Ok(n) if n <= MAX_PORT => Ok(Some(n)),
                _ => Err(()),
            },
        };

        let raw = raw.to_string();
        match port {
            Ok(port) if !host.is_empty() => Some(Self::Server {
                raw,
                decoded,
                user_info: user_info.map(str::to_string),
                host: host.to_string(),
                port,
            }),
            _ => Some(Self::Registry { raw, decoded }),
        }
    }

    /// Returns the raw authority text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Server { raw, .. } | Self::Registry { raw, .. } => raw,
        }
    }

    /// Returns the authority text with userinfo and host percent-decoded.
    #[must_use]
    pub fn decoded(&self) -> &str {
        match self {
            Self::Server { decoded, .. } | Self::Registry { decoded, .. } => decoded,
        }
    }

    /// Returns true if the authority splits into userinfo, host, and port.
    #[must_use]
    pub const fn is_server_based(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns the host of a server-based authority.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Server { host, .. } => Some(host),
            Self::Registry { .. } => None,
        }
    }

    /// Returns the decoded userinfo of a server-based authority.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        match self {
            Self::Server { user_info, .. } => user_info.as_deref(),
            Self::Registry { .. } => None,
        }
    }

    /// Returns the port of a server-based authority.
    #[must_use]
    pub const fn port(&self) -> Option<u32> {
        match self {
            Self::Server { port, .. } => *port,
            Self::Registry { .. } => None,
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Authority {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
