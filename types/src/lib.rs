//! Fundamental types for the hashpow engine.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! the nonce with its canonical byte encoding, the SHA-256 digest with its
//! hex surface, and the engine-wide parameter bounds.

pub mod digest;
pub mod nonce;
pub mod params;

pub use digest::PowDigest;
pub use nonce::Nonce;
