//! Single-threaded nonce search.
//!
//! Tests nonces in ascending order from zero, so the returned nonce is
//! always the smallest one satisfying the difficulty. Two runs over the
//! same payload and difficulty return the same nonce.

use hashpow_crypto::sha256;
use hashpow_types::params::NONCE_LEN;
use hashpow_types::{Nonce, PowDigest};

use crate::bounds::{check_difficulty, runaway_limit};
use crate::difficulty::meets_difficulty;
use crate::error::PowError;

/// Sequential searcher with an optional iteration ceiling.
#[derive(Debug, Clone, Default)]
pub struct SequentialSearch {
    iteration_limit: Option<u64>,
}

impl SequentialSearch {
    /// Searcher with no iteration ceiling: runs until a nonce is found
    /// or the nonce space is exhausted.
    pub fn new() -> Self {
        Self {
            iteration_limit: None,
        }
    }

    /// Searcher that gives up after `limit` nonces.
    pub fn with_iteration_limit(limit: u64) -> Self {
        Self {
            iteration_limit: Some(limit),
        }
    }

    /// Find the smallest nonce whose digest over `payload` meets
    /// `difficulty`.
    pub fn run(&self, payload: &[u8], difficulty: u8) -> Result<Nonce, PowError> {
        check_difficulty(difficulty)?;

        let limit = self.iteration_limit.unwrap_or(u64::MAX);

        // One input buffer for the whole search; only the 8-byte nonce
        // tail changes between iterations.
        let mut buf = Vec::with_capacity(payload.len() + NONCE_LEN);
        buf.extend_from_slice(payload);
        buf.extend_from_slice(&[0u8; NONCE_LEN]);

        for nonce in 0..limit {
            buf[payload.len()..].copy_from_slice(&nonce.to_le_bytes());
            let digest = PowDigest::new(sha256(&buf));
            if meets_difficulty(&digest, difficulty) {
                tracing::debug!(nonce, difficulty, "sequential search found nonce");
                return Ok(Nonce::new(nonce));
            }
        }

        Err(PowError::Exhausted {
            difficulty,
            attempts: limit,
        })
    }
}

/// Find the smallest nonce whose digest over `payload` meets `difficulty`.
///
/// Difficulties above 20 get an internal iteration ceiling of 10^8 so an
/// effectively unsatisfiable request fails with [`PowError::Exhausted`]
/// instead of spinning indefinitely.
pub fn compute(payload: &[u8], difficulty: u8) -> Result<Nonce, PowError> {
    let search = match runaway_limit(difficulty) {
        Some(limit) => SequentialSearch::with_iteration_limit(limit),
        None => SequentialSearch::new(),
    };
    search.run(payload, difficulty)
}
