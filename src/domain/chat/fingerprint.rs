//! Derived pseudo-identity for anonymous callers.

use sha2::{Digest, Sha256};

/// Derives the pseudo-user-id for an anonymous caller.
///
/// Hashes the client network address and agent string, separated by `|`,
/// and prefixes the hex digest with `"u-"`. This is a heuristic identity,
/// not a cryptographic one; downstream consumers depend on its exact
/// reproducibility, so the format must never change.
pub fn anonymous_fingerprint(address: &str, agent: &str) -> String {
    let digest = Sha256::digest(format!("{}|{}", address, agent).as_bytes());
    format!("u-{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fingerprint_is_prefixed_and_hex() {
        let fp = anonymous_fingerprint("203.0.113.9", "Mozilla/5.0");
        assert!(fp.starts_with("u-"));
        assert_eq!(fp.len(), 2 + 64);
        assert!(fp[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fingerprint_is_reproducible() {
        let a = anonymous_fingerprint("203.0.113.9", "Mozilla/5.0");
        let b = anonymous_fingerprint("203.0.113.9", "Mozilla/5.0");
        assert_eq!(a, b);
    }

    #[test]
    fn separator_prevents_field_bleed() {
        // "ab" + "c" must not collide with "a" + "bc".
        assert_ne!(
            anonymous_fingerprint("ab", "c"),
            anonymous_fingerprint("a", "bc")
        );
    }

    proptest! {
        #[test]
        fn different_inputs_give_different_fingerprints(
            addr in "[a-z0-9.]{1,20}",
            agent in "[a-zA-Z0-9/. ]{1,40}",
            other_agent in "[a-zA-Z0-9/. ]{1,40}",
        ) {
            prop_assume!(agent != other_agent);
            prop_assert_ne!(
                anonymous_fingerprint(&addr, &agent),
                anonymous_fingerprint(&addr, &other_agent)
            );
        }
    }
}
