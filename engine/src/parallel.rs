//! Multi-threaded nonce search over striped nonce ranges.
//!
//! Worker `i` of `n` tests nonces `i, i + n, i + 2n, …`, so the workers
//! cover the nonce space without overlap. The first worker to find a
//! satisfying nonce publishes it through a shared slot and the rest
//! drain out at their next poll. The published nonce is valid but not
//! necessarily the smallest one; with a single worker the search
//! degenerates to the sequential order and the result matches
//! [`crate::compute`].

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use hashpow_crypto::sha256;
use hashpow_types::params::NONCE_LEN;
use hashpow_types::{Nonce, PowDigest};

use crate::bounds::{check_difficulty, check_thread_count, runaway_limit};
use crate::difficulty::meets_difficulty;
use crate::error::PowError;

/// Nonces a worker tests between checks of the shared winner slot.
const BATCH_SIZE: u64 = 4096;

/// Sentinel for "no winner yet". `u64::MAX` is reserved: stripes stop
/// one step before it, so it can never be a published result.
const NONCE_UNSET: u64 = u64::MAX;

/// Parallel searcher with a fixed worker count and an optional
/// per-worker iteration ceiling.
#[derive(Debug, Clone)]
pub struct ParallelSearch {
    threads: usize,
    iteration_limit: Option<u64>,
}

impl ParallelSearch {
    /// Searcher that spreads the nonce space over `threads` workers.
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            iteration_limit: None,
        }
    }

    /// Searcher whose workers each give up after `limit` nonces.
    pub fn with_iteration_limit(threads: usize, limit: u64) -> Self {
        Self {
            threads,
            iteration_limit: Some(limit),
        }
    }

    /// Find a nonce whose digest over `payload` meets `difficulty`.
    pub fn run(&self, payload: &[u8], difficulty: u8) -> Result<Nonce, PowError> {
        check_difficulty(difficulty)?;
        check_thread_count(self.threads)?;

        // Nonce 0 satisfies difficulty 0; not worth waking a pool.
        if difficulty == 0 {
            return Ok(Nonce::ZERO);
        }

        let limit = self.iteration_limit.unwrap_or(u64::MAX);
        let threads = self.threads;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| PowError::WorkerPool(e.to_string()))?;

        tracing::debug!(threads, difficulty, "dispatching parallel nonce search");

        let winner = AtomicU64::new(NONCE_UNSET);

        pool.install(|| {
            (0..threads).into_par_iter().for_each(|worker| {
                let mut buf = Vec::with_capacity(payload.len() + NONCE_LEN);
                buf.extend_from_slice(payload);
                buf.extend_from_slice(&[0u8; NONCE_LEN]);

                let stride = threads as u64;
                let mut nonce = worker as u64;
                let mut tested = 0u64;

                while tested < limit {
                    if winner.load(Ordering::Relaxed) != NONCE_UNSET {
                        return;
                    }

                    let batch_end = tested.saturating_add(BATCH_SIZE).min(limit);
                    while tested < batch_end {
                        buf[payload.len()..].copy_from_slice(&nonce.to_le_bytes());
                        let digest = PowDigest::new(sha256(&buf));
                        if meets_difficulty(&digest, difficulty) {
                            // First writer wins; later finds are dropped.
                            let _ = winner.compare_exchange(
                                NONCE_UNSET,
                                nonce,
                                Ordering::AcqRel,
                                Ordering::Relaxed,
                            );
                            return;
                        }
                        tested += 1;
                        // u64::MAX is the sentinel; the stripe ends just
                        // before it.
                        nonce = match nonce.checked_add(stride) {
                            Some(n) if n != NONCE_UNSET => n,
                            _ => return,
                        };
                    }
                }
            });
        });

        // All workers have returned; the slot is final.
        match winner.load(Ordering::Acquire) {
            NONCE_UNSET => Err(PowError::Exhausted {
                difficulty,
                attempts: limit.saturating_mul(threads as u64),
            }),
            nonce => {
                tracing::debug!(nonce, difficulty, "parallel search found nonce");
                Ok(Nonce::new(nonce))
            }
        }
    }
}

/// Find a nonce whose digest over `payload` meets `difficulty`, using
/// `threads` workers.
///
/// The returned nonce is valid but not necessarily the smallest one;
/// run with one thread for the sequential result. Difficulties above 20
/// get a per-worker iteration ceiling of 10^8, as in [`crate::compute`].
pub fn compute_parallel(payload: &[u8], difficulty: u8, threads: usize) -> Result<Nonce, PowError> {
    let search = match runaway_limit(difficulty) {
        Some(limit) => ParallelSearch::with_iteration_limit(threads, limit),
        None => ParallelSearch::new(threads),
    };
    search.run(payload, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequential::compute;
    use crate::validator::valid;

    #[test]
    fn single_worker_matches_sequential() {
        let sequential = compute(b"hello world", 2).unwrap();
        let parallel = compute_parallel(b"hello world", 2, 1).unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.get(), 347);
    }

    #[test]
    fn multi_worker_result_is_valid() {
        let nonce = compute_parallel(b"test data", 2, 4).unwrap();
        assert!(valid(b"test data", nonce.get(), 2));
    }

    #[test]
    fn max_worker_count_works() {
        let nonce = compute_parallel(b"test data", 1, 64).unwrap();
        assert!(valid(b"test data", nonce.get(), 1));
    }

    #[test]
    fn zero_difficulty_short_circuits() {
        assert_eq!(compute_parallel(b"anything", 0, 8).unwrap(), Nonce::ZERO);
    }

    #[test]
    fn empty_payload_works() {
        let nonce = compute_parallel(b"", 1, 2).unwrap();
        assert!(valid(b"", nonce.get(), 1));
    }

    #[test]
    fn rejects_thread_count_out_of_range() {
        assert!(matches!(
            compute_parallel(b"data", 1, 0),
            Err(PowError::InvalidThreadCount { threads: 0 })
        ));
        assert!(matches!(
            compute_parallel(b"data", 1, 65),
            Err(PowError::InvalidThreadCount { threads: 65 })
        ));
    }

    #[test]
    fn difficulty_checked_before_thread_count() {
        // Both arguments invalid: the difficulty error wins.
        assert!(matches!(
            compute_parallel(b"data", 65, 0),
            Err(PowError::InvalidDifficulty { difficulty: 65 })
        ));
    }

    #[test]
    fn exhausts_with_attempts_across_workers() {
        let search = ParallelSearch::with_iteration_limit(4, 500);
        assert!(matches!(
            search.run(b"data", 64),
            Err(PowError::Exhausted {
                difficulty: 64,
                attempts: 2000
            })
        ));
    }
}
