//! Double-base Pedersen commitments over the coin commitment group.
//!
//! A commitment to a serial number `s` under randomness `r` is `g^s * h^r mod n`. It hides
//! `s` as long as `r` stays secret and binds its owner to `s` as long as the discrete-log
//! relation between the generators is unknown. Commitments may be formed with
//! [`Commitment::new`] and checked against an opening with [`Commitment::verify_opening`];
//! callers never perform raw group exponentiation themselves.
//!
//! The network-facing acceptance predicate is split over [`Commitment::is_in_range`] and
//! [`Commitment::is_probable_prime`] so each half can be tested on its own.

use crate::{params::GroupParams, Error, Rng, SerializeBigNum};
use glass_pumpkin::prime;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A commitment to a serial number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "SerializeBigNum")] BigUint);

impl Commitment {
    /// Commit to a serial number under the given randomness. Deterministic in all three
    /// inputs.
    pub fn new(serial_number: &BigUint, randomness: &BigUint, params: &GroupParams) -> Self {
        let value = (params.g().modpow(serial_number, params.modulus())
            * params.h().modpow(randomness, params.modulus()))
            % params.modulus();
        Commitment(value)
    }

    /// Verify a provided opening of the commitment.
    pub fn verify_opening(
        &self,
        params: &GroupParams,
        serial_number: &BigUint,
        randomness: &BigUint,
    ) -> bool {
        Commitment::new(serial_number, randomness, params) == *self
    }

    /// True iff the commitment's bit length lies within the range the parameters declare.
    pub fn is_in_range(&self, params: &GroupParams) -> bool {
        let bits = self.0.bits();
        params.commitment_min_bits() <= bits && bits <= params.commitment_max_bits()
    }

    /// Probabilistic primality test on the commitment value.
    ///
    /// Delegates to [`glass_pumpkin::prime::check`]: trial division, a Fermat check, and
    /// Miller-Rabin/Lucas rounds. Its false-positive bound is far stronger than the one the
    /// network requires to accept a coin, so a coin passing here will not be rejected by a
    /// stricter peer.
    pub fn is_probable_prime(&self) -> bool {
        prime::check(&self.0)
    }

    /// The commitment to the same serial number under `randomness + 1`: one modular
    /// multiplication by `h` instead of a full recompute. This is the incremental step of
    /// the fast minting profile.
    pub fn increment_randomness(&self, params: &GroupParams) -> Commitment {
        Commitment((&self.0 * params.h()) % params.modulus())
    }

    /// Wrap a raw group element as a commitment, e.g. when decoding a received coin. Nothing
    /// about the result is checked.
    pub fn from_big_uint(value: BigUint) -> Self {
        Commitment(value)
    }

    /// Borrow the inner group element.
    pub fn as_big_uint(&self) -> &BigUint {
        &self.0
    }

    /// Convert into the inner group element.
    pub fn to_big_uint(self) -> BigUint {
        self.0
    }
}

/// Sample an integer uniformly at random from `[0, 2^bits)`.
///
/// Entropy is drawn with `try_fill_bytes`, so an exhausted or broken source surfaces as
/// [`Error::Entropy`] instead of aborting the process. The draw is never retried here.
pub fn random_bounded(rng: &mut impl Rng, bits: u64) -> Result<BigUint, Error> {
    let n_bytes = ((bits + 7) / 8) as usize;
    let mut buf = vec![0u8; n_bytes];
    rng.try_fill_bytes(&mut buf)?;
    let excess = (n_bytes as u64) * 8 - bits;
    if excess > 0 {
        buf[0] &= 0xff >> excess;
    }
    Ok(BigUint::from_bytes_be(&buf))
}

/// Sample a serial number uniformly from the domain the parameters declare.
pub fn random_serial_number(rng: &mut impl Rng, params: &GroupParams) -> Result<BigUint, Error> {
    random_bounded(rng, params.serial_number_bits())
}

/// Sample commitment randomness uniformly from the domain the parameters declare.
pub fn random_blinding(rng: &mut impl Rng, params: &GroupParams) -> Result<BigUint, Error> {
    random_bounded(rng, params.randomness_bits())
}
