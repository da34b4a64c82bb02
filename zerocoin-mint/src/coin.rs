//! The public and private halves of a coin.
//!
//! A [`PublicCoin`] is the part of a coin that is published to the network: the commitment
//! to a serial number and the coin's denomination. A [`PrivateCoin`] additionally owns the
//! secrets that open the commitment and is the sole owner of its embedded public half.
//!
//! *Correctness*: a coin produced by the minting search always validates.
//!
//! *Unforgeability*: an adversary holding only public coins cannot feasibly produce an
//! opening for any of them, so validation plus a later serial-number disclosure ties a
//! spend to some mint without revealing which one.

use crate::{denomination::Denomination, Error};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use zerocoin_crypto::{params::GroupParams, pedersen::Commitment, SerializeBigNum};

/// The shareable half of a coin: a commitment value and a denomination.
///
/// Equality compares the value and denomination only and says nothing about validity. A
/// freshly decoded public coin is *unvalidated*; anything that crossed a trust boundary
/// must pass [`PublicCoin::validate`] before it is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WirePublicCoin", into = "WirePublicCoin")]
pub struct PublicCoin {
    value: Commitment,
    denomination: Denomination,
}

impl PublicCoin {
    /// Construct a public coin from a commitment value and a denomination.
    pub fn new(value: Commitment, denomination: Denomination) -> Self {
        Self {
            value,
            denomination,
        }
    }

    /// The commitment value.
    pub fn value(&self) -> &Commitment {
        &self.value
    }

    /// The face value this coin denominates.
    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// The public acceptance predicate: the commitment's bit length lies in the range the
    /// parameters declare *and* the commitment is probably prime.
    ///
    /// Re-runnable by any party holding only the group parameters and this coin. A `false`
    /// verdict is the normal outcome for a forged or corrupted coin, not an internal fault.
    pub fn validate(&self, params: &GroupParams) -> bool {
        self.value.is_in_range(params) && self.value.is_probable_prime()
    }
}

/// Wire layout of a public coin: the commitment bytes, then the denomination as its stable
/// integer tag. Keeps the in-memory enum representation out of the encoding.
#[derive(Debug, Serialize, Deserialize)]
struct WirePublicCoin {
    value: Commitment,
    denomination: u32,
}

impl From<PublicCoin> for WirePublicCoin {
    fn from(coin: PublicCoin) -> Self {
        WirePublicCoin {
            value: coin.value,
            denomination: coin.denomination.to_tag(),
        }
    }
}

impl TryFrom<WirePublicCoin> for PublicCoin {
    type Error = Error;

    /// Decode a public coin from its wire form. An unknown tag fails the decode; the coin's
    /// validity predicate is *not* checked here.
    fn try_from(wire: WirePublicCoin) -> Result<Self, Self::Error> {
        Ok(PublicCoin {
            value: wire.value,
            denomination: Denomination::from_tag(wire.denomination)?,
        })
    }
}

/// A private coin. As the name implies, everything in here except the embedded
/// [`PublicCoin`] must stay secret: leaking the serial number or randomness forfeits the
/// coin and the anonymity of its eventual spend.
///
/// Invariant: the embedded public coin's value is the commitment to `serial_number` under
/// `randomness`. The minting search and [`PrivateCoin::from_parts`] establish it; only
/// [`PrivateCoin::from_parts_unchecked`] can construct a coin without it being checked.
///
/// The serde encoding contains both secrets — its only legitimate destination is the
/// owner's wallet storage, never a public channel. Fields are encoded in wire order
/// (public coin, randomness, serial number) and decoding does not re-check the invariant,
/// so a coin restored from untrusted storage should go through
/// [`PrivateCoin::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateCoin {
    public_coin: PublicCoin,
    #[serde(with = "SerializeBigNum")]
    randomness: BigUint,
    #[serde(with = "SerializeBigNum")]
    serial_number: BigUint,
}

impl PrivateCoin {
    /// Assemble the result of a successful minting search. The search only calls this with
    /// a value it just computed from the secrets, so the invariant holds by construction.
    pub(crate) fn from_search(
        value: Commitment,
        denomination: Denomination,
        serial_number: BigUint,
        randomness: BigUint,
    ) -> Self {
        Self {
            public_coin: PublicCoin::new(value, denomination),
            randomness,
            serial_number,
        }
    }

    /// Reconstruct a private coin from stored fields, re-deriving the commitment from the
    /// secrets and rejecting a mismatched opening with [`Error::InvalidOpening`].
    pub fn from_parts(
        params: &GroupParams,
        public_coin: PublicCoin,
        serial_number: BigUint,
        randomness: BigUint,
    ) -> Result<Self, Error> {
        if !public_coin
            .value()
            .verify_opening(params, &serial_number, &randomness)
        {
            return Err(Error::InvalidOpening);
        }
        Ok(Self {
            public_coin,
            randomness,
            serial_number,
        })
    }

    /// Reconstruct a private coin from fields trusted outright, e.g. the wallet's own
    /// storage. The caller is responsible for the core invariant actually holding; prefer
    /// [`PrivateCoin::from_parts`] anywhere the fields could have been tampered with.
    pub fn from_parts_unchecked(
        public_coin: PublicCoin,
        serial_number: BigUint,
        randomness: BigUint,
    ) -> Self {
        Self {
            public_coin,
            randomness,
            serial_number,
        }
    }

    /// The shareable half of this coin.
    pub fn public_coin(&self) -> &PublicCoin {
        &self.public_coin
    }

    /// Copy out the public half for broadcast.
    pub fn to_public_coin(&self) -> PublicCoin {
        self.public_coin.clone()
    }

    /// The secret serial number. Disclosed only at spend time.
    pub fn serial_number(&self) -> &BigUint {
        &self.serial_number
    }

    /// The commitment trapdoor: the randomness the serial number was committed under.
    pub fn randomness(&self) -> &BigUint {
        &self.randomness
    }
}
