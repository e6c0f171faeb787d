//! Constants shared by the parser and comparator.

/// Suffix stripped from a lower-cased scheme before schemes are compared.
///
/// `https` orders as `http`, `ftps` as `ftp`, `wss` as `ws`.
pub const SECURE_SCHEME_SUFFIX: u8 = b's';

/// Integer encoding of an absent port, as returned by
/// [`ParsedUri::port_or_absent`](crate::ParsedUri::port_or_absent).
pub const ABSENT_PORT: i32 = -1;

/// Largest port a server-based authority may carry.
///
/// RFC 3986 puts no bound on port digits; ports are kept as long as they fit
/// a non-negative `i32`, so every port has an integer encoding next to
/// [`ABSENT_PORT`]. Larger ports make the authority registry-based.
pub const MAX_PORT: u32 = i32::MAX.unsigned_abs();

/// Prefix introducing an authority, kept in the scheme-specific part.
pub const AUTHORITY_PREFIX: &str = "//";
