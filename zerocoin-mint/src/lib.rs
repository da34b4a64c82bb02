/*!
This crate implements the coin side of a zerocoin-style anonymous token protocol: the fixed
denomination set, the public/private halves of a coin, and the minting search that produces
a coin the network will accept. It defines contextual types as wrappers over the commitment
primitives in `zerocoin-crypto`.

Minting converts ordinary value into an anonymous token. The mint samples a secret serial
number, then searches for commitment randomness under which the commitment to that serial is
prime and in the accepted range; the resulting [`PublicCoin`] is broadcast while the
[`PrivateCoin`] keeping the secrets stays with the owner. Any third party holding the group
parameters can re-run [`PublicCoin::validate`] to accept or reject a coin. The spend side of
the protocol (accumulator witnesses, the proof of knowledge revealing the serial number) is
out of scope here.
*/
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod coin;
pub mod denomination;

mod mint;

pub use coin::{PrivateCoin, PublicCoin};
pub use denomination::{Denomination, COIN};

use thiserror::*;

/// Error types that may arise from coin operations.
///
/// Note that [`PublicCoin::validate`] returning `false` is deliberately *not* represented
/// here: rejecting a forged or corrupted coin is a normal verdict, not a fault.
#[derive(Debug, Error)]
pub enum Error {
    /// Caused by parsing a denomination label outside the fixed set.
    #[error("unrecognized denomination label {0:?}")]
    UnknownDenominationLabel(String),
    /// Caused by converting an amount that matches no denomination exactly.
    #[error("amount {0} does not correspond to any coin denomination")]
    UnknownDenominationAmount(i64),
    /// Caused by decoding a denomination tag outside the fixed set. Zero is reserved and
    /// never decodes.
    #[error("unknown denomination tag {0}")]
    UnknownDenominationTag(u32),
    /// Caused by the minting search reaching its attempt bound without finding a valid
    /// commitment. Most likely the parameters admit no prime commitment in range.
    #[error("gave up minting after {attempts} attempts; check the commitment range in the group parameters")]
    MintExhausted {
        /// The attempt bound that was exhausted.
        attempts: u32,
    },
    /// Caused by reconstructing a private coin whose commitment does not open to the
    /// provided serial number and randomness.
    #[error("commitment does not open to the provided serial number and randomness")]
    InvalidOpening,
    /// An error arising from the underlying cryptographic operations, including entropy
    /// source failure.
    #[error(transparent)]
    Crypto(#[from] zerocoin_crypto::Error),
}

/// Trait synonym for a cryptographically secure random number generator.
pub trait Rng: rand::CryptoRng + rand::RngCore {}
impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}
