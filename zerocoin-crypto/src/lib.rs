//! Commitment primitives for a zerocoin-style mint, instantiated over an RSA-style
//! multiplicative group:
//! - coin commitment group parameters (modulus, two generators, secret bit bounds),
//! - double-base Pedersen commitments binding a serial number under fresh randomness,
//! - the public acceptance predicate: commitment bit-length in range, and probably prime,
//! - uniform sampling of the secret domains from a cryptographically secure source.

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod params;
pub mod pedersen;

mod serde;

pub use crate::serde::SerializeBigNum;

use thiserror::*;

/// Error types that may arise from cryptographic operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Caused by the secure randomness source failing to supply entropy. Fatal; the draw is
    /// never silently retried.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),
    /// Caused by constructing group parameters with a modulus that is not an odd number
    /// greater than one.
    #[error("commitment group modulus must be an odd number greater than one")]
    InvalidModulus,
    /// Caused by constructing group parameters with a generator outside `(1, modulus)`.
    #[error("generators must lie strictly between one and the modulus")]
    InvalidGenerator,
    /// Caused by constructing group parameters with an empty commitment bit range.
    #[error("commitment bit range is empty ({min}..={max})")]
    EmptyCommitmentRange {
        /// The lower bound on commitment bit length.
        min: u64,
        /// The upper bound on commitment bit length.
        max: u64,
    },
    /// Caused by constructing group parameters with a zero-width secret domain.
    #[error("serial number and randomness bit bounds must be nonzero")]
    ZeroBitBound,
}

/// A trait synonym for a cryptographically secure random number generator. This trait is
/// blanket-implemented for all valid types and will never need to be implemented by-hand.
pub trait Rng: rand::CryptoRng + rand::RngCore {}
impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}
