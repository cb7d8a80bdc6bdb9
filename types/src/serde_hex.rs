//! Hex-string serde for fixed-size byte arrays.
//!
//! Keys, signatures, and hashes serialize as lowercase hex strings so that a
//! serialized chain reads naturally as JSON.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let bytes = hex::decode(&text).map_err(serde::de::Error::custom)?;
    bytes
        .try_into()
        .map_err(|_| serde::de::Error::custom(format!("expected {N} hex-encoded bytes")))
}
