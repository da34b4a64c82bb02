//! Parameters of the coin commitment group.
//!
//! A [`GroupParams`] value describes the group every coin commitment lives in: the modulus,
//! the two generators, the bit bounds on the secret domains, and the bit range a commitment
//! must land in to be accepted. Generating a trustworthy parameter set (a modulus of unknown
//! factorization, generators with no known discrete-log relation) is a setup ceremony that
//! happens outside this crate; this module only consumes the result.
//!
//! Parameters are immutable after construction. Coins hold no reference to them — every
//! operation that needs group context takes `&GroupParams` — so sharing a parameter set
//! across threads needs no synchronization.

use crate::{Error, SerializeBigNum};
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// An immutable description of the coin commitment group.
///
/// Two coins produced under different parameter sets are never comparable or
/// interchangeable; a verifier must use the same parameters the minter did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParams {
    #[serde(with = "SerializeBigNum")]
    modulus: BigUint,
    #[serde(with = "SerializeBigNum")]
    g: BigUint,
    #[serde(with = "SerializeBigNum")]
    h: BigUint,
    serial_number_bits: u64,
    randomness_bits: u64,
    commitment_min_bits: u64,
    commitment_max_bits: u64,
    mint_attempt_bound: u32,
}

impl GroupParams {
    /// Assemble a parameter set from the outputs of a trusted setup.
    ///
    /// Serial numbers are sampled from `[0, 2^serial_number_bits)` and commitment randomness
    /// from `[0, 2^randomness_bits)`; a commitment is accepted only if its bit length lies in
    /// `commitment_min_bits..=commitment_max_bits`.
    ///
    /// The mint attempt bound defaults to a value derived from the commitment bit length
    /// (see [`GroupParams::mint_attempt_bound`]) and can be overridden with
    /// [`GroupParams::with_mint_attempt_bound`].
    pub fn new(
        modulus: BigUint,
        g: BigUint,
        h: BigUint,
        serial_number_bits: u64,
        randomness_bits: u64,
        commitment_min_bits: u64,
        commitment_max_bits: u64,
    ) -> Result<Self, Error> {
        if modulus <= BigUint::one() || !modulus.bit(0) {
            return Err(Error::InvalidModulus);
        }
        if g <= BigUint::one() || g >= modulus || h <= BigUint::one() || h >= modulus {
            return Err(Error::InvalidGenerator);
        }
        if serial_number_bits == 0 || randomness_bits == 0 {
            return Err(Error::ZeroBitBound);
        }
        if commitment_min_bits > commitment_max_bits || commitment_max_bits == 0 {
            return Err(Error::EmptyCommitmentRange {
                min: commitment_min_bits,
                max: commitment_max_bits,
            });
        }
        let mint_attempt_bound = default_attempt_bound(commitment_max_bits);
        Ok(Self {
            modulus,
            g,
            h,
            serial_number_bits,
            randomness_bits,
            commitment_min_bits,
            commitment_max_bits,
            mint_attempt_bound,
        })
    }

    /// Replace the mint attempt bound. Consumes the parameter set, so an already-shared set
    /// can never be reconfigured under a live coin.
    pub fn with_mint_attempt_bound(mut self, bound: u32) -> Self {
        self.mint_attempt_bound = bound;
        self
    }

    /// The group modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The generator raised to the serial number.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// The generator raised to the commitment randomness.
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    /// Bit bound of the serial number domain.
    pub fn serial_number_bits(&self) -> u64 {
        self.serial_number_bits
    }

    /// Bit bound of the commitment randomness domain.
    pub fn randomness_bits(&self) -> u64 {
        self.randomness_bits
    }

    /// Minimum accepted commitment bit length.
    pub fn commitment_min_bits(&self) -> u64 {
        self.commitment_min_bits
    }

    /// Maximum accepted commitment bit length.
    pub fn commitment_max_bits(&self) -> u64 {
        self.commitment_max_bits
    }

    /// The number of attempts a minting search may spend before giving up.
    ///
    /// By the prime number theorem, a b-bit value is prime with probability roughly
    /// `1/(b ln 2)`, so a successful search is expected within a small multiple of b
    /// attempts. The default bound of `64 * commitment_max_bits` leaves a margin of more
    /// than fifty times the expectation; reaching it signals misconfigured parameters, not
    /// bad luck.
    pub fn mint_attempt_bound(&self) -> u32 {
        self.mint_attempt_bound
    }
}

fn default_attempt_bound(commitment_max_bits: u64) -> u32 {
    commitment_max_bits.saturating_mul(64).min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod test {
    use super::*;

    fn candidate() -> (BigUint, BigUint, BigUint) {
        (
            BigUint::from(1_000_003u32),
            BigUint::from(2u32),
            BigUint::from(3u32),
        )
    }

    #[test]
    fn valid_parameters_construct() {
        let (n, g, h) = candidate();
        let params = GroupParams::new(n, g, h, 16, 16, 1, 20).unwrap();
        assert_eq!(params.serial_number_bits(), 16);
        assert_eq!(params.commitment_max_bits(), 20);
        assert_eq!(params.mint_attempt_bound(), 20 * 64);
    }

    #[test]
    fn attempt_bound_can_be_overridden() {
        let (n, g, h) = candidate();
        let params = GroupParams::new(n, g, h, 16, 16, 1, 20)
            .unwrap()
            .with_mint_attempt_bound(7);
        assert_eq!(params.mint_attempt_bound(), 7);
    }

    #[test]
    fn even_or_trivial_modulus_is_rejected() {
        let (_, g, h) = candidate();
        let even = GroupParams::new(BigUint::from(1_000_004u32), g.clone(), h.clone(), 16, 16, 1, 20);
        assert!(matches!(even, Err(Error::InvalidModulus)));
        let one = GroupParams::new(BigUint::one(), g, h, 16, 16, 1, 20);
        assert!(matches!(one, Err(Error::InvalidModulus)));
    }

    #[test]
    fn out_of_group_generators_are_rejected() {
        let (n, g, _) = candidate();
        let too_small = GroupParams::new(n.clone(), g.clone(), BigUint::one(), 16, 16, 1, 20);
        assert!(matches!(too_small, Err(Error::InvalidGenerator)));
        let too_large = GroupParams::new(n.clone(), n, g, 16, 16, 1, 20);
        assert!(matches!(too_large, Err(Error::InvalidGenerator)));
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        let (n, g, h) = candidate();
        let no_serial = GroupParams::new(n.clone(), g.clone(), h.clone(), 0, 16, 1, 20);
        assert!(matches!(no_serial, Err(Error::ZeroBitBound)));
        let empty_range = GroupParams::new(n, g, h, 16, 16, 21, 20);
        assert!(matches!(
            empty_range,
            Err(Error::EmptyCommitmentRange { min: 21, max: 20 })
        ));
    }
}
