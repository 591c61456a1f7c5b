use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowError {
    #[error("difficulty {difficulty} exceeds maximum 64")]
    InvalidDifficulty { difficulty: u8 },

    #[error("thread count {threads} outside the valid range 1-64")]
    InvalidThreadCount { threads: usize },

    #[error("no nonce met difficulty {difficulty} within {attempts} attempts")]
    Exhausted { difficulty: u8, attempts: u64 },

    #[error("worker pool failed to start: {0}")]
    WorkerPool(String),
}
