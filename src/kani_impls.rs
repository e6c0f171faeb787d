//! Kani Arbitrary implementations and proof harnesses for the ordering laws.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use std::cmp::Ordering;

use crate::{Authority, ParsedUri, compare_schemes, compare_uris};

/// Letters valid anywhere in a scheme, host, or path segment
const ALPHA: &[u8] = b"aAsSz";

fn arbitrary_word(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            ALPHA[idx % ALPHA.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for Authority {
    fn any() -> Self {
        let host = arbitrary_word(3);
        let port: Option<u16> = kani::any();
        let port = port.map(|p| p.to_string());
        let raw = match &port {
            Some(p) => format!("{host}:{p}"),
            None => host.clone(),
        };
        Authority::classify(&raw, None, &host, port.as_deref()).expect("host is non-empty")
    }
}

impl kani::Arbitrary for ParsedUri {
    fn any() -> Self {
        let mut text = arbitrary_word(3);
        text.push(':');

        let opaque: bool = kani::any();
        if opaque {
            text.push_str(&arbitrary_word(2));
        } else {
            text.push_str("//");
            text.push_str(&arbitrary_word(2));
            let port: Option<u16> = kani::any();
            if let Some(p) = port {
                text.push_str(&format!(":{p}"));
            }
            text.push('/');
            text.push_str(&arbitrary_word(2));
        }

        let has_fragment: bool = kani::any();
        if has_fragment {
            text.push('#');
            text.push_str(&arbitrary_word(1));
        }

        ParsedUri::parse(&text).expect("letters and digits form a valid URI")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Every URI compares equal to itself
#[kani::proof]
#[kani::unwind(6)]
fn proof_compare_reflexive() {
    let uri: ParsedUri = kani::any();
    assert_eq!(compare_uris(&uri, &uri), Ordering::Equal);
}

/// Proof: Swapping the arguments reverses the ordering
#[kani::proof]
#[kani::unwind(6)]
fn proof_compare_antisymmetric() {
    let a: ParsedUri = kani::any();
    let b: ParsedUri = kani::any();
    assert_eq!(compare_uris(&a, &b), compare_uris(&b, &a).reverse());
}

/// Proof: Appending one 's' to a scheme without one never changes its ordering
#[kani::proof]
#[kani::unwind(6)]
fn proof_secure_suffix_ignored() {
    let scheme = arbitrary_word(3);
    kani::assume(!scheme.ends_with(['s', 'S']));
    let secure = format!("{scheme}s");
    assert_eq!(compare_schemes(&scheme, &secure), Ordering::Equal);
}

/// Proof: Authorities classified from a host and valid port are server-based
#[kani::proof]
#[kani::unwind(6)]
fn proof_host_with_port_is_server_based() {
    let auth: Authority = kani::any();
    assert!(auth.is_server_based());
}
