//! The nonce — the integer search variable of proof-of-work.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::NONCE_LEN;

/// A proof-of-work nonce.
///
/// Logically a non-negative counter starting at zero; represented as a
/// 64-bit unsigned integer. When combined with a payload for hashing it has
/// exactly one canonical byte encoding, [`Nonce::to_le_bytes`] — every
/// operation that hashes `payload || nonce` must go through it, otherwise
/// search and validation stop agreeing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Nonce(u64);

impl Nonce {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Canonical wire encoding: 8 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; NONCE_LEN] {
        self.0.to_le_bytes()
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Nonce> for u64 {
    fn from(nonce: Nonce) -> Self {
        nonce.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
