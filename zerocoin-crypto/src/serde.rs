//! Utilities for serializing and deserializing big integers using Serde.
//!
//! To Serde, [`SerializeBigNum`] looks like a "module" which can be used with the
//! `#[serde(with = "SerializeBigNum")]` syntax to add serialization/deserialization
//! functionality to [`BigUint`] fields. The encoding is the minimal big-endian byte string
//! of the value, which pins the wire format independently of the bignum library's in-memory
//! limb layout.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialization/deserialization functionality for arbitrary-precision unsigned integers.
pub trait SerializeBigNum: Sized {
    /// Proxy serialization function telling serde how to serialize the implementing type.
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    /// Proxy deserialization function telling serde how to deserialize the implementing type.
    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

impl SerializeBigNum for BigUint {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        this.to_bytes_be().serialize(serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Ok(BigUint::from_bytes_be(&bytes))
    }
}
