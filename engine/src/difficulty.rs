//! The difficulty rule: leading zero hex characters of a digest.

use hashpow_types::PowDigest;

/// Whether `digest` has at least `difficulty` leading zero hex characters.
///
/// Difficulty 0 is trivially satisfied; difficulty 64 demands the all-zero
/// digest. Values above 64 can never be met — callers range-check them
/// before any hashing starts.
pub fn meets_difficulty(digest: &PowDigest, difficulty: u8) -> bool {
    digest.leading_zero_nibbles() >= difficulty
}
