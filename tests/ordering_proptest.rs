//! Property-based tests for the ordering laws of `compare_uris`.
//!
//! Components are drawn from small pools so that generated URIs often share
//! prefixes and collide, which is where ordering bugs hide.

use std::cmp::Ordering;

use proptest::prelude::*;

use scheme_agnostic_uri::{ParsedUri, compare_uris, normalize_scheme, sort_uris};

/// Strategies for generating valid absolute URIs.
mod strategies {
    use super::*;

    pub fn scheme() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "http", "https", "HTTP", "HttpS", "ftp", "ftps", "ws", "wss", "file", "urn", "mailto",
            "s",
        ])
    }

    pub fn user_info() -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(vec!["u", "U", "user:pw", ""]))
    }

    pub fn host() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["a.com", "A.com", "b.org", "B.ORG", "[::1]", "192.0.2.1", ""])
    }

    /// Port text after ':'; includes empty, wide, and out-of-range ports.
    pub fn port() -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(vec!["", "0", "80", "443", "8080", "99999", "3000000000"]))
    }

    pub fn path() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["", "/", "/a", "/A", "/a/b", "/b"])
    }

    pub fn query() -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(vec!["", "q", "Q", "x=1"]))
    }

    pub fn fragment() -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(vec!["", "f", "F"]))
    }

    pub fn opaque_part() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["a", "A", "a@b.com", "isbn:1", "x?y", ""])
    }

    /// URI with an authority: `scheme://[userinfo@]host[:port]path[?query][#fragment]`
    pub fn with_authority() -> impl Strategy<Value = String> {
        (scheme(), user_info(), host(), port(), path(), query(), fragment()).prop_map(
            |(s, ui, h, p, path, q, f)| {
                let mut uri = format!("{s}://");
                if let Some(ui) = ui {
                    uri.push_str(ui);
                    uri.push('@');
                }
                uri.push_str(h);
                if let Some(p) = p {
                    uri.push(':');
                    uri.push_str(p);
                }
                uri.push_str(path);
                push_tail(&mut uri, q, f);
                uri
            },
        )
    }

    /// URI with an absolute path and no authority: `scheme:/path`
    pub fn path_only() -> impl Strategy<Value = String> {
        (scheme(), path(), query(), fragment()).prop_map(|(s, path, q, f)| {
            let path = if path.is_empty() { "/" } else { path };
            let mut uri = format!("{s}:{path}");
            push_tail(&mut uri, q, f);
            uri
        })
    }

    /// Opaque URI: `scheme:ssp[#fragment]`
    pub fn opaque() -> impl Strategy<Value = String> {
        (scheme(), opaque_part(), fragment()).prop_map(|(s, ssp, f)| {
            let mut uri = format!("{s}:{ssp}");
            push_tail(&mut uri, None, f);
            uri
        })
    }

    pub fn uri() -> impl Strategy<Value = ParsedUri> {
        prop_oneof![
            6 => with_authority(),
            1 => path_only(),
            2 => opaque(),
        ]
        .prop_map(|s| ParsedUri::parse(&s).unwrap())
    }

    fn push_tail(uri: &mut String, query: Option<&str>, fragment: Option<&str>) {
        if let Some(q) = query {
            uri.push('?');
            uri.push_str(q);
        }
        if let Some(f) = fragment {
            uri.push('#');
            uri.push_str(f);
        }
    }
}

mod order_laws {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn reflexive(a in uri()) {
            prop_assert_eq!(compare_uris(&a, &a), Ordering::Equal);
        }

        #[test]
        fn antisymmetric(a in uri(), b in uri()) {
            prop_assert_eq!(compare_uris(&a, &b), compare_uris(&b, &a).reverse());
        }

        #[test]
        fn transitive(a in uri(), b in uri(), c in uri()) {
            if compare_uris(&a, &b).is_le() && compare_uris(&b, &c).is_le() {
                prop_assert!(
                    compare_uris(&a, &c).is_le(),
                    "{} <= {} <= {} but not {} <= {}", a, b, c, a, c
                );
            }
        }

        #[test]
        fn equality_is_transitive(a in uri(), b in uri(), c in uri()) {
            if compare_uris(&a, &b).is_eq() && compare_uris(&b, &c).is_eq() {
                prop_assert!(compare_uris(&a, &c).is_eq());
            }
        }

        #[test]
        fn sorted_vectors_are_non_decreasing(uris in prop::collection::vec(uri(), 0..24)) {
            let mut uris = uris;
            sort_uris(&mut uris);
            for pair in uris.windows(2) {
                prop_assert!(compare_uris(&pair[0], &pair[1]).is_le());
            }
        }

        #[test]
        fn structurally_equal_uris_compare_equal(a in uri()) {
            let b = ParsedUri::parse(a.as_str()).unwrap();
            prop_assert_eq!(compare_uris(&a, &b), Ordering::Equal);
        }
    }
}

mod scheme_agnostic_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn adding_secure_suffix_changes_nothing(s in with_authority()) {
            let rest = &s[s.find(':').unwrap()..];
            let plain = ParsedUri::parse(&format!("http{rest}")).unwrap();
            let secure = ParsedUri::parse(&format!("HTTPS{rest}")).unwrap();
            prop_assert_eq!(compare_uris(&plain, &secure), Ordering::Equal);
        }

        #[test]
        fn different_normalized_schemes_decide_the_order(a in uri(), b in uri()) {
            let sa = normalize_scheme(a.scheme());
            let sb = normalize_scheme(b.scheme());
            if sa != sb {
                prop_assert_eq!(compare_uris(&a, &b), sa.cmp(&sb));
            }
        }

        #[test]
        fn opaque_after_hierarchical_within_a_scheme(a in uri(), b in uri()) {
            if normalize_scheme(a.scheme()) == normalize_scheme(b.scheme())
                && a.is_opaque() != b.is_opaque()
            {
                let expected = if a.is_opaque() { Ordering::Greater } else { Ordering::Less };
                prop_assert_eq!(compare_uris(&a, &b), expected);
            }
        }
    }
}

mod decoding_tests {
    use super::strategies::*;
    use super::*;

    fn encode_letters(s: &str) -> String {
        s.chars()
            .map(|c| match c {
                'a' | 'b' | 'A' => format!("%{:02X}", c as u32),
                _ => c.to_string(),
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn encoding_unreserved_letters_changes_nothing(
            path in path(),
            q in query(),
            f in fragment()
        ) {
            let mut plain = format!("http://host{path}");
            if let Some(q) = q {
                plain.push('?');
                plain.push_str(q);
            }
            if let Some(f) = f {
                plain.push('#');
                plain.push_str(f);
            }
            let encoded = format!("http://host{}", encode_letters(&plain["http://host".len()..]));

            let plain = ParsedUri::parse(&plain).unwrap();
            let encoded = ParsedUri::parse(&encoded).unwrap();
            prop_assert_eq!(compare_uris(&plain, &encoded), Ordering::Equal);
        }
    }
}
