//! SHA-256 hashing over `payload || nonce`.

use sha2::{Digest, Sha256};

use hashpow_types::{Nonce, PowDigest};

/// Compute a 256-bit SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Digest of `payload || nonce` — the unit the difficulty rule judges.
///
/// The nonce enters the hash in its canonical little-endian encoding.
/// Changing that encoding is a breaking change: search and validation
/// would stop agreeing on which nonces are proofs.
pub fn pow_digest(payload: &[u8], nonce: Nonce) -> PowDigest {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    hasher.update(nonce.to_le_bytes());
    PowDigest::new(hasher.finalize().into())
}
