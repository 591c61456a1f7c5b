//! Engine-wide parameter bounds.
//!
//! Difficulty counts leading zero hex characters of the digest, so its
//! ceiling is the full 64-nibble width of a SHA-256 digest.

/// SHA-256 digest width in bytes.
pub const DIGEST_LEN: usize = 32;

/// Digest width in hex characters (two per byte).
pub const HEX_DIGEST_LEN: usize = 64;

/// Width of the canonical nonce encoding appended to the payload.
pub const NONCE_LEN: usize = 8;

/// Highest meaningful difficulty: every hex character of the digest zero.
pub const MAX_DIFFICULTY: u8 = 64;

/// Minimum worker count for a parallel search.
pub const MIN_THREADS: usize = 1;

/// Maximum worker count for a parallel search.
pub const MAX_THREADS: usize = 64;
