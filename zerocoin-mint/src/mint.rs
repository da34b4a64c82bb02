//! The minting search.
//!
//! Minting is a randomized search, not a closed-form computation: sample a secret serial
//! number once, then re-blind it under new randomness until the commitment lands on a prime
//! in the accepted range. Prime density makes success expected but not guaranteed, so the
//! loop is bounded by [`GroupParams::mint_attempt_bound`] and fails loudly with
//! [`Error::MintExhausted`] instead of spinning forever.
//!
//! One loop serves both public entry points. The profile only changes how the next
//! candidate is produced and pre-screened, never which candidates are accepted, so the two
//! variants cannot diverge on the accepted-coin set. Attempts are stateless and do no I/O;
//! a caller wanting cancellable minting runs the call on a task of its own, since the
//! attempt boundary is the only safe suspension point.

use crate::{coin::PrivateCoin, denomination::Denomination, Error, Rng};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use zerocoin_crypto::params::GroupParams;
use zerocoin_crypto::pedersen::{self, Commitment};

/// How candidate commitments are produced and pre-screened during the search.
#[derive(Debug, Clone, Copy)]
enum MintProfile {
    /// Fresh uniform randomness and a full recompute and primality test per attempt. Every
    /// attempt does the same work, which keeps the timing channel quiet.
    Careful,
    /// Incremental re-blinding (randomness + 1, one multiplication by `h`) with a
    /// small-prime sieve ahead of the full primality test. Attempt latency now depends on
    /// the candidate value.
    Fast,
}

impl PrivateCoin {
    /// Mint a new coin of the given denomination.
    ///
    /// Selects a random serial number, then commits to it under fresh randomness until the
    /// resulting commitment is prime and in the accepted range. The returned coin carries
    /// the commitment (as its public half) and the trapdoor randomness.
    ///
    /// Fails with [`Error::MintExhausted`] once the parameters' attempt bound is reached —
    /// which indicates misconfigured parameters far more often than bad luck — and with
    /// [`Error::Crypto`] if the entropy source gives out. No I/O happens inside the loop.
    pub fn mint(
        rng: &mut impl Rng,
        params: &GroupParams,
        denomination: Denomination,
    ) -> Result<PrivateCoin, Error> {
        search(rng, params, denomination, MintProfile::Careful)
    }

    /// Mint a new coin of the given denomination, trading timing-channel quiet for speed.
    ///
    /// Same contract, attempt bound, and accepted-coin set as [`PrivateCoin::mint`]. This
    /// routine is substantially faster on average: each attempt re-blinds the previous
    /// commitment with a single multiplication and a cheap sieve discards most composites
    /// before the full primality test runs. The cost is that attempt latency varies with
    /// the candidate value — don't use this if someone could be timing your mint.
    pub fn mint_fast(
        rng: &mut impl Rng,
        params: &GroupParams,
        denomination: Denomination,
    ) -> Result<PrivateCoin, Error> {
        search(rng, params, denomination, MintProfile::Fast)
    }
}

fn search(
    rng: &mut impl Rng,
    params: &GroupParams,
    denomination: Denomination,
    profile: MintProfile,
) -> Result<PrivateCoin, Error> {
    let serial_number = pedersen::random_serial_number(rng, params)?;
    let bound = params.mint_attempt_bound();

    let mut randomness = pedersen::random_blinding(rng, params)?;
    let mut value = Commitment::new(&serial_number, &randomness, params);
    let randomness_limit = BigUint::one() << params.randomness_bits();

    for _ in 0..bound {
        let plausible = match profile {
            MintProfile::Careful => true,
            MintProfile::Fast => passes_sieve(&value),
        };
        if plausible && value.is_in_range(params) && value.is_probable_prime() {
            return Ok(PrivateCoin::from_search(
                value,
                denomination,
                serial_number,
                randomness,
            ));
        }

        match profile {
            MintProfile::Careful => {
                randomness = pedersen::random_blinding(rng, params)?;
                value = Commitment::new(&serial_number, &randomness, params);
            }
            MintProfile::Fast => {
                randomness += 1u32;
                if randomness < randomness_limit {
                    value = value.increment_randomness(params);
                } else {
                    // Walked off the end of the randomness domain; start a fresh walk.
                    randomness = pedersen::random_blinding(rng, params)?;
                    value = Commitment::new(&serial_number, &randomness, params);
                }
            }
        }
    }

    Err(Error::MintExhausted { attempts: bound })
}

/// Small primes used to discard obvious composites before the full primality test runs.
///
/// Any commitment in an accepted range dwarfs every entry here, so the sieve can only
/// reject composites; it never shrinks the accepted set.
const SMALL_PRIMES: &[u64] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

fn passes_sieve(value: &Commitment) -> bool {
    let n = value.as_big_uint();
    if !n.bit(0) {
        return false;
    }
    SMALL_PRIMES.iter().all(|p| !(n % *p).is_zero())
}

#[cfg(test)]
mod test {
    use super::*;

    // A commitment range no value under this modulus can reach, so every attempt misses
    // and the search must hit its bound.
    fn unsatisfiable_params() -> GroupParams {
        GroupParams::new(
            BigUint::from(1_000_003u32),
            BigUint::from(2u32),
            BigUint::from(3u32),
            16,
            16,
            64,
            64,
        )
        .unwrap()
        .with_mint_attempt_bound(50)
    }

    #[test]
    fn minting_exhausts_when_the_range_is_unsatisfiable() {
        let mut rng = rand::thread_rng();
        let params = unsatisfiable_params();

        match PrivateCoin::mint(&mut rng, &params, Denomination::Lovelace) {
            Err(Error::MintExhausted { attempts }) => assert_eq!(attempts, 50),
            other => panic!("expected mint exhaustion, got {:?}", other),
        }
        match PrivateCoin::mint_fast(&mut rng, &params, Denomination::Lovelace) {
            Err(Error::MintExhausted { attempts }) => assert_eq!(attempts, 50),
            other => panic!("expected mint exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn sieve_passes_primes_and_rejects_small_factors() {
        // The Mersenne prime 2^127 - 1.
        let m127 = BigUint::parse_bytes(b"170141183460469231731687303715884105727", 10).unwrap();
        assert!(passes_sieve(&Commitment::from_big_uint(m127)));

        // Even, and divisible by three, respectively.
        assert!(!passes_sieve(&Commitment::from_big_uint(BigUint::from(
            1u32 << 20
        ))));
        assert!(!passes_sieve(&Commitment::from_big_uint(BigUint::from(
            105u32
        ))));
    }
}
