//! Parameter range checks and search guards shared by the searchers.

use hashpow_types::params::{MAX_DIFFICULTY, MAX_THREADS, MIN_THREADS};

use crate::error::PowError;

/// Difficulties above this get an iteration ceiling in the convenience
/// entry points, so an unsatisfiable request cannot spin forever.
pub(crate) const RUNAWAY_DIFFICULTY: u8 = 20;

/// Iteration ceiling applied past [`RUNAWAY_DIFFICULTY`].
pub(crate) const RUNAWAY_CEILING: u64 = 100_000_000;

pub(crate) fn check_difficulty(difficulty: u8) -> Result<(), PowError> {
    if difficulty > MAX_DIFFICULTY {
        return Err(PowError::InvalidDifficulty { difficulty });
    }
    Ok(())
}

pub(crate) fn check_thread_count(threads: usize) -> Result<(), PowError> {
    if !(MIN_THREADS..=MAX_THREADS).contains(&threads) {
        return Err(PowError::InvalidThreadCount { threads });
    }
    Ok(())
}

/// Iteration ceiling for a given difficulty, if one applies.
pub(crate) fn runaway_limit(difficulty: u8) -> Option<u64> {
    (difficulty > RUNAWAY_DIFFICULTY).then_some(RUNAWAY_CEILING)
}
