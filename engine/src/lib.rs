//! Proof-of-work nonce search over SHA-256.
//!
//! Given an opaque payload and a difficulty — a required count of leading
//! zero hex characters in the digest of `payload || nonce` — find a nonce
//! that satisfies it, or check one that claims to. Search is either
//! sequential (lowest nonce first, deterministic) or striped across a fixed
//! pool of workers (first find wins, not necessarily the lowest).
//!
//! The boundary is four operations: [`compute`], [`compute_parallel`],
//! [`valid`], and [`get_hash`]. Composing them into anything larger
//! (blocks, challenges, rate limiters) is the caller's business.

mod bounds;
pub mod difficulty;
pub mod error;
pub mod parallel;
pub mod sequential;
pub mod validator;

pub use difficulty::meets_difficulty;
pub use error::PowError;
pub use parallel::{compute_parallel, ParallelSearch};
pub use sequential::{compute, SequentialSearch};
pub use validator::{get_hash, valid};

// Re-exported so embedders need only this crate.
pub use hashpow_types::{Nonce, PowDigest};
