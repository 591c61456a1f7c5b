//! SHA-256 digest primitives for the hashpow engine.
//!
//! One hash function, one concatenation rule: every digest in the workspace
//! is SHA-256 over `payload || nonce` with the nonce in its canonical
//! little-endian encoding.

pub mod hash;

pub use hash::{pow_digest, sha256};
