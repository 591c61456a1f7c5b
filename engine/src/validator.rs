//! Verification of candidate nonces.
//!
//! Verification is total: any payload, nonce, and difficulty combination
//! has an answer, and an out-of-range difficulty is simply unmet rather
//! than an error.

use hashpow_crypto::pow_digest;
use hashpow_types::params::MAX_DIFFICULTY;
use hashpow_types::Nonce;

use crate::difficulty::meets_difficulty;

/// Whether `nonce` satisfies `difficulty` for `payload`.
///
/// Never fails: difficulties above 64 return `false`, since no digest
/// can have more than 64 leading zero hex characters.
pub fn valid(payload: &[u8], nonce: u64, difficulty: u8) -> bool {
    if difficulty > MAX_DIFFICULTY {
        return false;
    }
    meets_difficulty(&pow_digest(payload, Nonce::new(nonce)), difficulty)
}

/// Hex digest of `payload` with `nonce` appended, for display or audit.
pub fn get_hash(payload: &[u8], nonce: u64) -> String {
    pow_digest(payload, Nonce::new(nonce)).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_difficulty_accepts_any_nonce() {
        assert!(valid(b"data", 0, 0));
        assert!(valid(b"data", u64::MAX, 0));
        assert!(valid(b"", 12345, 0));
    }

    #[test]
    fn known_nonces_validate_at_their_difficulty() {
        assert!(valid(b"test data", 10, 1));
        assert!(!valid(b"test data", 10, 2));
        assert!(valid(b"test data", 89, 2));
        assert!(valid(b"hello world", 347, 2));
    }

    #[test]
    fn out_of_range_difficulty_is_unmet_not_an_error() {
        assert!(!valid(b"data", 0, 65));
        assert!(!valid(b"data", 0, u8::MAX));
    }

    #[test]
    fn matches_hash_prefix() {
        for nonce in [0u64, 10, 89, 500] {
            let hash = get_hash(b"test data", nonce);
            let zeros = hash.chars().take_while(|&c| c == '0').count();
            for difficulty in 0..=4u8 {
                assert_eq!(
                    valid(b"test data", nonce, difficulty),
                    usize::from(difficulty) <= zeros,
                );
            }
        }
    }

    #[test]
    fn hash_known_vector() {
        assert_eq!(
            get_hash(b"test data", 12345),
            "b089249dceee6239f926e601e74f2f005ed18e0ac67ff54705acd081b477a3ab"
        );
    }

    #[test]
    fn hash_of_empty_payload() {
        assert_eq!(
            get_hash(b"", 0),
            "af5570f5a1810b7af78caf4bc70a660f0df51e42baf91d4de5b2328de0e83dfc"
        );
    }

    #[test]
    fn hash_shape() {
        let hash = get_hash(b"data", 7);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hash_is_deterministic_and_input_sensitive() {
        assert_eq!(get_hash(b"data", 1), get_hash(b"data", 1));
        assert_ne!(get_hash(b"data", 1), get_hash(b"data", 2));
        assert_ne!(get_hash(b"data", 1), get_hash(b"atad", 1));
    }
}
