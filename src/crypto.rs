// src/crypto.rs
use sha2::{Digest, Sha256};

/// Hash a plaintext password into a 64-character lowercase hex digest.
///
/// SHA-256, unsalted, single pass. Equal inputs always produce equal digests,
/// which is what lets the store answer "was this password ever set" without
/// keeping the plaintext. Unsalted hashing is rainbow-table exposed; anything
/// guarding real secrets should move to a salted, memory-hard scheme, at the
/// cost of breaking compatibility with digests already on disk.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_64_hex_chars() {
        let digest = hash_password("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_eq!(hash_password(""), hash_password(""));
    }

    #[test]
    fn distinct_inputs_give_distinct_digests() {
        let samples = ["a", "b", "password", "passw0rd", "пароль", ""];
        for (i, p1) in samples.iter().enumerate() {
            for p2 in &samples[i + 1..] {
                assert_ne!(hash_password(p1), hash_password(p2));
            }
        }
    }

    #[test]
    fn matches_known_sha256_vector() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}
