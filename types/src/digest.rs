//! The SHA-256 digest of a payload + nonce combination.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::DIGEST_LEN;

/// A 32-byte SHA-256 digest.
///
/// Externally a digest is a 64-character lowercase hex string; the
/// difficulty rule counts leading `'0'` characters of that form. Each byte
/// contributes two hex characters (nibbles), high nibble first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowDigest([u8; DIGEST_LEN]);

impl PowDigest {
    pub const ZERO: Self = Self([0u8; DIGEST_LEN]);

    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }

    /// The external form: 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Count of leading zero hex characters, 0..=64.
    ///
    /// Byte-wise equivalent of scanning `to_hex()` for leading `'0'`s,
    /// without allocating the string.
    pub fn leading_zero_nibbles(&self) -> u8 {
        let mut count = 0u8;
        for &byte in &self.0 {
            if byte == 0 {
                count += 2;
                continue;
            }
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
        count
    }
}

impl From<[u8; DIGEST_LEN]> for PowDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for PowDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PowDigest({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for PowDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
