use num_bigint::BigUint;
use rand::SeedableRng;
use zerocoin_crypto::params::GroupParams;

// Seeded rng for replicable tests.
pub fn seeded_rng() -> (impl rand::CryptoRng + rand::RngCore) {
    const TEST_RNG_SEED: [u8; 32] = *b"NEVER USE THIS FOR ANYTHING REAL";
    rand::rngs::StdRng::from_seed(TEST_RNG_SEED)
}

/// A fixed 256-bit commitment group for tests. The modulus is the secp256k1 field prime and
/// the generators are arbitrary fixed values; nothing here came out of a trusted setup.
/// Only the predicate arithmetic matters to these tests, not the hiding/binding strength.
pub fn group_params() -> GroupParams {
    let modulus = BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .unwrap();
    let g = BigUint::parse_bytes(
        b"8b6bdf482fde301b677a0d9d04f6eb2e7888d44ef1b36b9b6e668b82d53a47ec",
        16,
    )
    .unwrap();
    let h = BigUint::parse_bytes(
        b"421a7c3e5ef6a10bb3bb3a7db39b3be41bdbfdfb02bd42c5e9c6c1f79dd91524",
        16,
    )
    .unwrap();
    GroupParams::new(modulus, g, h, 160, 160, 200, 256).unwrap()
}
