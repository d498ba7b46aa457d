//! BLS secret keys: a scalar modulo the group order n

use alloc::string::String;
use core::fmt;

use blsmpl_algorithms::{G1Projective, Scalar};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::hd_keys;
use crate::error::{Error, Result};

/// A BLS private key
///
/// Any integer is accepted on input and reduced modulo n; the canonical
/// encoding is 32 big-endian bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    value: Scalar,
}

impl PrivateKey {
    /// Size of the serialized key in bytes
    pub const SIZE: usize = 32;

    /// Wrap an already reduced scalar
    pub fn from_scalar(value: Scalar) -> Self {
        PrivateKey { value }
    }

    /// Key with a small integer value
    pub fn from_u64(value: u64) -> Self {
        Self::from_scalar(Scalar::from(value))
    }

    /// Interpret `bytes` as a big-endian integer of any length, mod n
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_scalar(Scalar::from_be_bytes_reduced(bytes))
    }

    /// Hex form of [`PrivateKey::from_bytes`]
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = zeroize::Zeroizing::new(
            hex::decode(s).map_err(|_| Error::InvalidKey {
                context: "PrivateKey::from_hex",
                details: "not valid hexadecimal".into(),
            })?,
        );
        Ok(Self::from_bytes(&bytes))
    }

    /// Deterministic key from seed material (the BLS `KeyGen` procedure)
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        hd_keys::key_gen(seed)
    }

    /// Sum of keys mod n; its public key is the sum of their public keys
    pub fn aggregate(keys: &[PrivateKey]) -> Self {
        Self::from_scalar(keys.iter().map(|k| k.value).sum())
    }

    /// The underlying scalar
    pub fn scalar(&self) -> &Scalar {
        &self.value
    }

    /// Public key `sk · G1`
    pub fn g1(&self) -> G1Projective {
        G1Projective::generator() * self.value
    }

    /// 32-byte big-endian encoding
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.value.to_be_bytes()
    }

    /// Hex of [`PrivateKey::to_bytes`]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for PrivateKey {}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(0x{})", self.to_hex())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl From<Scalar> for PrivateKey {
    fn from(value: Scalar) -> Self {
        Self::from_scalar(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PrivateKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&zeroize::Zeroizing::new(self.to_hex()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrivateKey {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        let s = zeroize::Zeroizing::new(String::deserialize(deserializer)?);
        let bytes = zeroize::Zeroizing::new(hex::decode(s.as_str()).map_err(D::Error::custom)?);
        if bytes.len() != Self::SIZE {
            return Err(D::Error::invalid_length(bytes.len(), &"32 bytes"));
        }
        Ok(Self::from_bytes(&bytes))
    }
}
