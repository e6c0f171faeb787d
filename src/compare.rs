//! Scheme-agnostic ordering of parsed URIs.
//!
//! Components are compared in a fixed precedence; the first difference wins:
//!
//! 1. Scheme, lower-cased with one trailing `s` removed (`https` = `http`).
//! 2. Opacity: opaque URIs sort after hierarchical ones. Two opaque URIs are
//!    ordered by scheme-specific part, then fragment, and nothing else.
//! 3. Authority. Two server-based authorities compare userinfo, host
//!    (case-insensitively), then port, where an absent port sorts before any
//!    port. Otherwise decoded authority text is compared case-sensitively,
//!    except that an absent or registry-based authority always sorts before a
//!    server-based one.
//! 4. Path, then query.
//! 5. Fragment, where an absent fragment equals an empty one.
//!
//! Absent components sort before present ones throughout. Strings are the
//! percent-decoded forms [`ParsedUri`] exposes, so `%41` and `A` are equal.

use std::cmp::Ordering;

use crate::authority::Authority;
use crate::constants::SECURE_SCHEME_SUFFIX;
use crate::uri::ParsedUri;

/// Compares two URIs, treating `http` and `https` (and any `X`/`Xs` scheme
/// pair) as the same scheme.
///
/// This is a total order: reflexive, antisymmetric, and transitive, so it can
/// back `sort_by`, binary search, or an ordered collection (see
/// [`SchemeAgnostic`](crate::SchemeAgnostic)).
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use scheme_agnostic_uri::{compare_uris, ParsedUri};
///
/// let http = ParsedUri::parse("http://example.com/x").unwrap();
/// let https = ParsedUri::parse("HTTPS://EXAMPLE.com/x").unwrap();
/// assert_eq!(compare_uris(&http, &https), Ordering::Equal);
///
/// let mailto = ParsedUri::parse("mailto:a@b.com").unwrap();
/// let web = ParsedUri::parse("http://example.com/").unwrap();
/// assert_eq!(compare_uris(&web, &mailto), Ordering::Less);
///
/// let mut uris = vec![mailto, https, web];
/// uris.sort_by(compare_uris);
/// assert_eq!(uris[2].as_str(), "mailto:a@b.com");
/// ```
#[must_use]
pub fn compare_uris(left: &ParsedUri, right: &ParsedUri) -> Ordering {
    compare_schemes(left.scheme(), right.scheme()).then_with(|| {
        match (left.is_opaque(), right.is_opaque()) {
            (true, true) => left
                .scheme_specific_part()
                .cmp(right.scheme_specific_part())
                .then_with(|| cmp_nullable(left.fragment(), right.fragment())),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare_hierarchical(left, right),
        }
    })
}

/// Compares two schemes after lower-casing them and removing one trailing `s`.
///
/// ```
/// use std::cmp::Ordering;
/// use scheme_agnostic_uri::compare_schemes;
///
/// assert_eq!(compare_schemes("https", "HTTP"), Ordering::Equal);
/// assert_eq!(compare_schemes("wss", "ws"), Ordering::Equal);
/// assert_eq!(compare_schemes("ftp", "http"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_schemes(left: &str, right: &str) -> Ordering {
    scheme_key(left).cmp(scheme_key(right))
}

/// Returns the form of a scheme that [`compare_schemes`] compares.
///
/// ```
/// use scheme_agnostic_uri::normalize_scheme;
///
/// assert_eq!(normalize_scheme("HTTPS"), "http");
/// assert_eq!(normalize_scheme("ftps"), "ftp");
/// assert_eq!(normalize_scheme("urn"), "urn");
/// ```
#[must_use]
pub fn normalize_scheme(scheme: &str) -> String {
    scheme_key(scheme).map(char::from).collect()
}

/// Sorts URIs in place by [`compare_uris`]. The sort is stable, so
/// `http`/`https` twins keep their relative order.
pub fn sort_uris(uris: &mut [ParsedUri]) {
    uris.sort_by(compare_uris);
}

/// Sorts URIs and drops every URI that compares equal to an earlier one,
/// keeping the first of each group.
///
/// ```
/// use scheme_agnostic_uri::{dedup_uris, ParsedUri};
///
/// let uris = ["https://a.com/", "http://b.com/", "http://a.com/"]
///     .iter()
///     .map(|s| ParsedUri::parse(s).unwrap())
///     .collect();
/// let unique = dedup_uris(uris);
/// let unique: Vec<&str> = unique.iter().map(ParsedUri::as_str).collect();
/// assert_eq!(unique, ["https://a.com/", "http://b.com/"]);
/// ```
#[must_use]
pub fn dedup_uris(mut uris: Vec<ParsedUri>) -> Vec<ParsedUri> {
    sort_uris(&mut uris);
    uris.dedup_by(|later, earlier| compare_uris(earlier, later) == Ordering::Equal);
    uris
}

fn compare_hierarchical(left: &ParsedUri, right: &ParsedUri) -> Ordering {
    compare_authorities(left.authority_component(), right.authority_component())
        .then_with(|| cmp_nullable(left.path(), right.path()))
        .then_with(|| cmp_nullable(left.query(), right.query()))
        .then_with(|| {
            left.fragment()
                .unwrap_or_default()
                .cmp(right.fragment().unwrap_or_default())
        })
}

fn compare_authorities(left: Option<&Authority>, right: Option<&Authority>) -> Ordering {
    match (left, right) {
        (
            Some(Authority::Server {
                user_info: lu,
                host: lh,
                port: lp,
                ..
            }),
            Some(Authority::Server {
                user_info: ru,
                host: rh,
                port: rp,
                ..
            }),
        ) => cmp_nullable(lu.as_deref(), ru.as_deref())
            .then_with(|| cmp_ignore_ascii_case(lh, rh))
            .then_with(|| lp.cmp(rp)),
        // The text of a server-based authority never equals that of a
        // registry-based one, but ordering them by text would break
        // transitivity once hosts compare case-insensitively.
        (Some(Authority::Server { .. }), _) => Ordering::Greater,
        (_, Some(Authority::Server { .. })) => Ordering::Less,
        _ => cmp_nullable(left.map(Authority::decoded), right.map(Authority::decoded)),
    }
}

fn scheme_key(scheme: &str) -> impl Iterator<Item = u8> + '_ {
    let bytes = scheme.as_bytes();
    let trimmed = match bytes.split_last() {
        Some((last, rest)) if last.eq_ignore_ascii_case(&SECURE_SCHEME_SUFFIX) => rest,
        _ => bytes,
    };
    trimmed.iter().map(u8::to_ascii_lowercase)
}

/// Absent sorts before present; present values compare byte-wise.
fn cmp_nullable(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(l), Some(r)) => l.cmp(r),
    }
}

fn cmp_ignore_ascii_case(left: &str, right: &str) -> Ordering {
    left.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(right.bytes().map(|b| b.to_ascii_lowercase()))
}
